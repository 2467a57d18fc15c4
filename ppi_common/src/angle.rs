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

//! radian normalization and bearings

use crate::TWO_PI;

/// normalize radians into [0,2π)
#[inline]
pub fn normalize_two_pi (r: f64) -> f64 {
    let mut x = r % TWO_PI;
    if x < 0.0 { x += TWO_PI; }
    if x >= TWO_PI { x -= TWO_PI; } // tiny negative values round up to 2π
    x
}

/// clockwise angle from the vertical (north) axis for a planar offset, normalized to [0,2π).
/// `atan2` measures counter-clockwise from the horizontal axis, which precedes north by π/2
pub fn bearing_from_north (dx: f64, dy: f64) -> f64 {
    normalize_two_pi( crate::HALF_PI - crate::atan2(dy, dx))
}
