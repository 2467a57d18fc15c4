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

use std::{fmt, time::Duration};
use chrono::{DateTime,Utc};
use uom::si::{f64::Length, length::{foot, meter}};
use ppi_common::datetime::duration_since;

/// one record of the tracked aircraft list as supplied by the feed. A zero latitude and longitude
/// means there was no position fix yet
#[derive(Debug,Clone)]
pub struct Aircraft {
    pub addr: u32, // ICAO 24 bit address
    pub flight: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub altitude: i32, // feet
    pub speed: i32, // knots
    pub track: i32, // degrees
    pub seen: DateTime<Utc>,
    pub messages: u64,
}

impl Aircraft {
    pub fn new (addr: u32, seen: DateTime<Utc>)->Self {
        Aircraft { addr, flight: None, lat: 0.0, lon: 0.0, altitude: 0, speed: 0, track: 0, seen, messages: 0 }
    }

    pub fn has_fix (&self)->bool { self.lat != 0.0 || self.lon != 0.0 }

    /// printable ICAO address
    pub fn hex_addr (&self)->String { format!("{:06X}", self.addr) }

    /// flight number if we got one, otherwise the hex address
    pub fn display_name (&self)->String {
        match self.flight() {
            Some(flight) => flight.to_string(),
            None => self.hex_addr()
        }
    }

    pub fn flight (&self)->Option<&str> {
        self.flight.as_deref().map(str::trim).filter( |f| !f.is_empty())
    }

    /// leading non-digit part of the flight number
    pub fn airline_code (&self)->Option<&str> {
        let flight = self.flight()?;
        let end = flight.find( |c: char| c.is_ascii_digit()).unwrap_or( flight.len());
        if end > 0 { Some(&flight[..end]) } else { None }
    }

    pub fn altitude_meters (&self)->f64 {
        Length::new::<foot>( self.altitude as f64).get::<meter>()
    }

    pub fn age (&self, now: &DateTime<Utc>)->Duration {
        duration_since( now, &self.seen)
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Aircraft( addr: {}", self.hex_addr())?;
        if let Some(flight) = self.flight() { write!( f, ", flight: \"{flight}\"")?; }
        if self.has_fix() { write!( f, ", pos: ({:.5},{:.5})", self.lat, self.lon)?; }
        write!( f, ", alt: {}, spd: {}, trk: {}, msgs: {}, seen: {})", self.altitude, self.speed, self.track, self.messages, self.seen)
    }
}
