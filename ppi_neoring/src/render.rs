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

//! the free running render loop that pushes the presented frame plus the sweep animation to the LED strip

use std::{sync::Arc, thread, time::{Duration, Instant}};
use rand::rngs::StdRng;
use tokio::task::{self, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use crate::{
    config::NeoRingConfig, drivers::LedStrip, frame_store::FrameStore,
    sweep::{SweepAngle, SweepState}, errors::{NeoRingError, Result}
};

pub struct RenderLoop {
    frames: Arc<FrameStore>,
    sweep: SweepState,
    angle: SweepAngle,
    strip: Box<dyn LedStrip + Send>,
    tick_interval: Duration,
    n_ticks: u64,
}

impl RenderLoop {
    pub fn new (config: &NeoRingConfig, frames: Arc<FrameStore>, mut strip: Box<dyn LedStrip + Send>, rng: StdRng)->Result<Self> {
        config.validate()?;

        let n_leds = frames.layout().total_leds();
        let n_pixels = strip.pixels_mut().len();
        if n_pixels != n_leds {
            return Err( NeoRingError::DriverError( format!("LED strip has {n_pixels} pixels, layout needs {n_leds}")))
        }
        strip.set_brightness( config.brightness);

        let sweep = SweepState::new( config.sweep.clone(), frames.layout().clone(), rng);
        let angle = SweepAngle::new( &config.sweep);

        Ok( RenderLoop { frames, sweep, angle, strip, tick_interval: config.tick_interval, n_ticks: 0 } )
    }

    pub fn n_ticks (&self)->u64 { self.n_ticks }
    pub fn sweep (&self)->&SweepState { &self.sweep }
    pub fn angle (&self)->&SweepAngle { &self.angle }

    /// one iteration: compose the frame while holding the frame store lock, then transmit without it
    pub fn tick (&mut self)->Result<()> {
        {
            let front = self.frames.front_buffer()?;
            let colors = front.colors();
            let pixels = self.strip.pixels_mut();
            pixels.copy_from_slice( colors);
            self.sweep.tick( self.angle.current(), colors, pixels);
        }

        self.angle.advance();
        self.n_ticks += 1;
        self.strip.show()
    }

    /// run until `cancel` is triggered. This blocks the calling thread between ticks and while the strip
    /// transmits, hence it has to run on a thread of its own (see [`RenderLoop::spawn`]). Transmission
    /// errors are logged, not retried
    pub fn run (mut self, cancel: CancellationToken) {
        info!("render loop started with {:?} tick interval", self.tick_interval);
        let mut deadline = Instant::now();

        while !cancel.is_cancelled() {
            match self.tick() {
                Ok(()) => {}
                Err(NeoRingError::Poisoned) => {
                    warn!("frame store poisoned, terminating render loop");
                    break
                }
                Err(e) => warn!("render tick {} failed: {e}", self.n_ticks)
            }

            // missed ticks are not made up, a slow strip just delays the next one
            deadline += self.tick_interval;
            let now = Instant::now();
            if deadline > now {
                thread::sleep( deadline - now);
            } else {
                deadline = now;
            }
        }

        debug!("render loop terminated after {} ticks", self.n_ticks);
    }

    /// run on the blocking thread pool of the current tokio runtime, so that neither the strip
    /// transmission nor the frame store lock can stall async update tasks
    pub fn spawn (self, cancel: CancellationToken)->JoinHandle<()> {
        task::spawn_blocking( move || self.run( cancel))
    }
}
