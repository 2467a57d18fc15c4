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

//! radar sweep animation that simulates a phosphor screen. Each LED has a decay value in [0,1] which fades
//! every tick, gets randomly excited by a little noise and is set to near maximum when the beam passes

use std::sync::Arc;
use rand::{Rng, rngs::StdRng};
use crate::{Color, OFF, config::SweepConfig, geometry::RingLayout};

pub struct SweepState {
    config: SweepConfig,
    layout: Arc<RingLayout>,
    decay: Vec<f32>,
    rng: StdRng,
}

impl SweepState {
    pub fn new (config: SweepConfig, layout: Arc<RingLayout>, rng: StdRng)->Self {
        let decay = vec![0.0; layout.total_leds()];
        SweepState { config, layout, decay, rng }
    }

    pub fn decay (&self)->&[f32] { self.decay.as_slice() }

    pub fn set_decay (&mut self, idx: usize, value: f32) {
        if let Some(d) = self.decay.get_mut(idx) { *d = value.clamp( 0.0, 1.0) }
    }

    /// one render tick: fade, add noise, excite along the beam (if there is one) and write the green
    /// phosphor color into all `pixels` that are not occupied by aircraft in the `front` frame
    pub fn tick (&mut self, angle: Option<f32>, front: &[Color], pixels: &mut [Color]) {
        self.fade();
        if let Some(angle) = angle {
            self.excite_beam( angle);
        }

        for ((pixel, color), decay) in pixels.iter_mut().zip( front).zip( &self.decay) {
            if *color == OFF {
                *pixel = self.phosphor_color( *decay);
            }
        }
    }

    /// attenuate then square, which gives a steep initial fade and a long dim tail
    pub fn fade (&mut self) {
        let cfg = &self.config;
        for d in self.decay.iter_mut() {
            *d = (*d * cfg.attenuation).powi(2);

            // a little static makes it look more analog
            if self.rng.random::<f32>() < cfg.noise_probability {
                *d = (*d + self.rng.random::<f32>() * cfg.noise_amplitude).min( 1.0);
            }
        }
    }

    /// set the LED under the beam in each ring to near maximum, regardless of its current value
    pub fn excite_beam (&mut self, angle: f32) {
        let angle = if angle > 360.0 { angle - 360.0 } else { angle };

        for (ring, count) in self.layout.led_counts().iter().enumerate() {
            let seg = 360.0 / *count as f32;
            let led = (angle / seg).floor() as usize % count;
            let idx = self.layout.ring_start_offset( ring).unwrap_or(0) + led;
            self.decay[idx] = self.config.beam_level + self.rng.random::<f32>() * self.config.beam_jitter;
        }
    }

    pub fn phosphor_color (&self, decay: f32)->Color {
        // more dynamic range makes the ring too bright, which can brown out the hardware
        let g = (self.config.max_green as f32 * decay) as u8;
        Color::new( 0, g.max( self.config.min_green), 0)
    }
}

/// beam position in degrees. After passing 360 the angle drops below zero by the overshoot margin and
/// the beam stays dark until it is positive again
#[derive(Debug,Clone,Copy)]
pub struct SweepAngle {
    degrees: f32,
    step: f32,
    overshoot: f32,
}

impl SweepAngle {
    pub fn new (config: &SweepConfig)->Self {
        SweepAngle { degrees: 0.0, step: config.step_degrees, overshoot: config.overshoot }
    }

    pub fn degrees (&self)->f32 { self.degrees }

    /// the beam angle if the beam is currently visible
    pub fn current (&self)->Option<f32> {
        if self.degrees >= 0.0 { Some(self.degrees) } else { None }
    }

    pub fn advance (&mut self) {
        self.degrees += self.step;
        if self.degrees > 360.0 {
            self.degrees -= 360.0 * self.overshoot;
        }
    }
}
