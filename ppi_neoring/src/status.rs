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

//! status lines for the character display: the nearest aircraft, alternating between an
//! identifier+altitude and an airline name form

use crate::{aircraft::Aircraft, config::StatusConfig, geometry::LedTarget};

const SPINNER: [char; 3] = ['.', '-', '#'];

/// an aircraft with a position fix, valid for one update pass
#[derive(Debug,Clone)]
pub struct RangedAircraft<'a> {
    pub aircraft: &'a Aircraft,
    pub range: f64, // miles
    pub target: LedTarget,
    pub airline: Option<String>,
}

/// sort ascending by range
pub fn rank_by_range (ranged: &mut [RangedAircraft<'_>]) {
    ranged.sort_by( |a,b| a.range.total_cmp( &b.range));
}

pub struct StatusLines {
    config: StatusConfig,
    cycle: usize,
}

impl StatusLines {
    pub fn new (config: StatusConfig)->Self {
        StatusLines { config, cycle: 0 }
    }

    pub fn cycle (&self)->usize { self.cycle }

    pub fn shows_airline (&self)->bool { self.cycle >= self.config.airline_phase }

    /// called once per update pass
    pub fn advance (&mut self) {
        self.cycle += 1;
        if self.cycle >= self.config.period {
            self.cycle = 0;
        }
    }

    /// one fixed width line per display line. `ranked` has to be sorted by range, `n_total` is the
    /// number of aircraft that were considered in this pass (with or without fix)
    pub fn format_lines (&self, ranked: &[RangedAircraft<'_>], n_total: usize)->Vec<String> {
        let n_lines = self.config.lines;
        (0..n_lines).map( |i| {
            if let Some(r) = ranked.get(i) {
                self.fit( self.format_aircraft( r))
            } else if i + 1 < n_lines {
                self.fit( SPINNER[self.cycle % SPINNER.len()].to_string())
            } else {
                self.fit( format!("{}/{} Unknown", n_total.saturating_sub( ranked.len()), n_total))
            }
        }).collect()
    }

    fn format_aircraft (&self, r: &RangedAircraft<'_>)->String {
        match &r.airline {
            Some(airline) if self.shows_airline() && !airline.is_empty() => {
                format!("{:04.1} {}", r.range, airline)
            }
            _ => format!("{:04.1} {:<8} {:<5}", r.range, r.aircraft.display_name(), r.aircraft.altitude)
        }
    }

    fn fit (&self, s: String)->String {
        let w = self.config.width;
        format!("{s:<w$.w$}")
    }
}
