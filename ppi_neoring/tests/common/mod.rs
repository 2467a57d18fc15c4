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
#![allow(unused)]

//! mock collaborators shared by the integration tests

use std::{collections::HashMap, sync::{Arc, Mutex}, thread, time::Duration};
use chrono::{DateTime, Utc};
use ppi_common::{METERS_TO_MILES, sin, cos};
use ppi_neoring::{
    Color, OFF, aircraft::Aircraft, config::NeoRingConfig,
    drivers::{CharDisplay, LedStrip, MapProjection, ReferenceData},
    engine::NeoRingEngine, geometry::MapPoint, errors::{NeoRingError, Result}
};

/// uses lon/lat degrees directly as map units (meters), which keeps test positions easy to construct
pub struct IdentityProjection;

impl MapProjection for IdentityProjection {
    fn to_map (&self, lat_deg: f64, lon_deg: f64, _alt_m: f64)->MapPoint { MapPoint::new( lon_deg, lat_deg) }
}

pub struct TestReference {
    pub home: MapPoint,
    pub airlines: HashMap<String,String>,
}

impl TestReference {
    pub fn new ()->Self {
        let mut airlines = HashMap::new();
        airlines.insert( "BAW".to_string(), "British Airways".to_string());
        airlines.insert( "EZY".to_string(), "easyJet".to_string());
        TestReference { home: MapPoint::new( 0.0, 0.0), airlines }
    }
}

impl ReferenceData for TestReference {
    fn home (&self)->MapPoint { self.home }
    fn airline_name (&self, code: &str)->Option<&str> { self.airlines.get(code).map( |s| s.as_str()) }
}

#[derive(Clone,Default)]
pub struct RecordingDisplay {
    pub lines: Arc<Mutex<Vec<(usize,String)>>>,
}

impl CharDisplay for RecordingDisplay {
    fn display_line (&mut self, line: usize, text: &str)->Result<()> {
        self.lines.lock().unwrap().push( (line, text.to_string()));
        Ok(())
    }
}

/// keeps every transmitted frame
pub struct MemoryStrip {
    pub pixels: Vec<Color>,
    pub shown: Arc<Mutex<Vec<Vec<Color>>>>,
    pub brightness: Arc<Mutex<f32>>,
    pub fail: bool,
    pub delay: Duration, // simulated transmission time
}

impl MemoryStrip {
    pub fn new (n: usize)->Self {
        MemoryStrip { pixels: vec![OFF; n], shown: Arc::new( Mutex::new( Vec::new())), brightness: Arc::new( Mutex::new(0.0)), fail: false, delay: Duration::ZERO }
    }
}

impl LedStrip for MemoryStrip {
    fn pixels_mut (&mut self)->&mut [Color] { self.pixels.as_mut_slice() }
    fn set_brightness (&mut self, brightness: f32) { *self.brightness.lock().unwrap() = brightness; }

    fn show (&mut self)->Result<()> {
        if !self.delay.is_zero() {
            thread::sleep( self.delay);
        }
        if self.fail {
            return Err( NeoRingError::DriverError("no strip attached".to_string()))
        }
        self.shown.lock().unwrap().push( self.pixels.clone());
        Ok(())
    }
}

/// an aircraft at the given range (miles) and bearing (degrees clockwise from north) from a home
/// at the origin, in [`IdentityProjection`] coordinates
pub fn aircraft_at (addr: u32, flight: Option<&str>, range: f64, bearing_deg: f64, seen: DateTime<Utc>)->Aircraft {
    let r = range / METERS_TO_MILES;
    let b = bearing_deg.to_radians();
    let mut ac = Aircraft::new( addr, seen);
    ac.flight = flight.map( |s| s.to_string());
    ac.lon = sin(b) * r;
    ac.lat = cos(b) * r;
    ac.altitude = 35000;
    ac
}

pub fn test_engine (config: NeoRingConfig)->(NeoRingEngine, RecordingDisplay) {
    let display = RecordingDisplay::default();
    let engine = NeoRingEngine::new(
        config,
        Box::new( TestReference::new()),
        Box::new( IdentityProjection),
        Box::new( display.clone())
    ).unwrap();
    (engine, display)
}
