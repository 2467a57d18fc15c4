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

use std::{path::Path, time::Duration};
use serde::Deserialize;
use ppi_common::{config::load_config, datetime::{deserialize_duration, millis, secs}};
use crate::{Color, errors::{NeoRingError, Result}};

/// the compiled in default, used if there is no config file
pub const DEFAULT_CONFIG: &str = include_str!("../configs/neoring.ron");

/// lines of the character display
pub const MAX_STATUS_LINES: usize = 4;

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        Err( NeoRingError::ConfigError( format!( $fmt $(, $arg)* )))
    };
}

#[derive(Deserialize,Debug,Clone,PartialEq)]
pub struct NeoRingConfig {
    pub ring_led_counts: Vec<usize>, // outermost ring first
    pub ring_spacing: f64, // in miles

    #[serde(deserialize_with="deserialize_duration")]
    pub tick_interval: Duration,

    pub brightness: f32,
    pub max_aircraft: usize, // per update pass, the rest of the feed is ignored

    #[serde(deserialize_with="deserialize_duration")]
    pub stale_after: Duration,

    pub colors: AircraftColors,
    pub sweep: SweepConfig,
    pub status: StatusConfig,
}

impl NeoRingConfig {
    /// load from `path` if it exists, otherwise from the compiled in default
    pub fn load (path: Option<&Path>)->Result<Self> {
        let config: NeoRingConfig = load_config( path, Some(DEFAULT_CONFIG))?;
        config.validate()?;
        Ok(config)
    }

    /// reject values the engine or the render loop cannot run with. The ring layout itself is checked
    /// when it is created
    pub fn validate (&self)->Result<()> {
        if !(self.ring_spacing.is_finite() && self.ring_spacing > 0.0) {
            return config_error!("ring_spacing has to be positive, is {}", self.ring_spacing)
        }
        if self.tick_interval.is_zero() {
            return config_error!("tick_interval has to be positive")
        }
        if !(0.0..=1.0).contains( &self.brightness) {
            return config_error!("brightness has to be within [0,1], is {}", self.brightness)
        }
        if !(0.0..=1.0).contains( &self.sweep.attenuation) {
            return config_error!("sweep.attenuation has to be within [0,1], is {}", self.sweep.attenuation)
        }
        if self.sweep.min_green > self.sweep.max_green {
            return config_error!("sweep.min_green {} exceeds max_green {}", self.sweep.min_green, self.sweep.max_green)
        }

        let status = &self.status;
        if status.lines == 0 || status.lines > MAX_STATUS_LINES {
            return config_error!("status.lines has to be within 1..{}, is {}", MAX_STATUS_LINES, status.lines)
        }
        if status.width == 0 {
            return config_error!("status.width has to be positive")
        }
        if status.period == 0 {
            return config_error!("status.period has to be positive")
        }
        Ok(())
    }
}

impl Default for NeoRingConfig {
    fn default()->Self {
        NeoRingConfig {
            ring_led_counts: vec![60, 48, 40, 32, 24, 16, 12, 8, 1],
            ring_spacing: 1.0,
            tick_interval: millis(25),
            brightness: 1.0,
            max_aircraft: 30,
            stale_after: secs(5),
            colors: AircraftColors::default(),
            sweep: SweepConfig::default(),
            status: StatusConfig::default(),
        }
    }
}

#[derive(Deserialize,Debug,Clone,PartialEq)]
pub struct AircraftColors {
    pub fresh: Color,
    pub stale: Color,
}

impl Default for AircraftColors {
    fn default()->Self {
        AircraftColors { fresh: Color::new(64, 0, 0), stale: Color::new(0, 0, 32) }
    }
}

/// phosphor simulation and beam parameters
#[derive(Deserialize,Debug,Clone,PartialEq)]
pub struct SweepConfig {
    pub attenuation: f32, // applied before squaring
    pub noise_probability: f32,
    pub noise_amplitude: f32,
    pub beam_level: f32,
    pub beam_jitter: f32,
    pub step_degrees: f32,
    pub overshoot: f32, // multiple of 360deg subtracted when the beam passes 360deg
    pub max_green: u8,
    pub min_green: u8,
}

impl Default for SweepConfig {
    fn default()->Self {
        SweepConfig {
            attenuation: 0.98,
            noise_probability: 0.01,
            noise_amplitude: 0.075,
            beam_level: 0.9,
            beam_jitter: 0.1,
            step_degrees: 6.0,
            overshoot: 1.2,
            max_green: 24,
            min_green: 1,
        }
    }
}

#[derive(Deserialize,Debug,Clone,PartialEq)]
pub struct StatusConfig {
    pub width: usize,
    pub lines: usize,
    pub airline_phase: usize, // rotation counter values >= this show airline names
    pub period: usize,
    pub title: String,
}

impl Default for StatusConfig {
    fn default()->Self {
        StatusConfig { width: 20, lines: 4, airline_phase: 3, period: 5, title: "ADS-B 1090".to_string() }
    }
}
