/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! the collaborators of the ring display. None of them is implemented here - the feed, the coordinate
//! reprojection and the two hardware drivers are provided by the host

use crate::{Color, geometry::MapPoint, errors::Result};

/// geographic to planar (map unit) conversion
pub trait MapProjection {
    fn to_map (&self, lat_deg: f64, lon_deg: f64, alt_m: f64)->MapPoint;
}

/// static reference data that is loaded once before the first update
pub trait ReferenceData {
    /// planar position of the receiving station
    fn home (&self)->MapPoint;

    /// human readable airline name for an airline code, `None` if unknown
    fn airline_name (&self, code: &str)->Option<&str>;
}

/// the LED strip transmission driver
pub trait LedStrip {
    /// staging area for the next frame, sized to the total number of LEDs
    fn pixels_mut (&mut self)->&mut [Color];

    fn set_brightness (&mut self, brightness: f32);

    /// transmit the staged pixels
    fn show (&mut self)->Result<()>;
}

/// the character display that shows the status lines
pub trait CharDisplay {
    /// `line` is 1-based
    fn display_line (&mut self, line: usize, text: &str)->Result<()>;
}
