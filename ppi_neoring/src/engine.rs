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

//! the update entry point. The host calls [`NeoRingEngine::update`] with the current aircraft list each
//! time the feed refreshes it. The render loop runs independently and only shares the frame store

use std::sync::Arc;
use chrono::{DateTime,Utc};
use rand::{SeedableRng, rngs::StdRng};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use ppi_common::datetime::utc_now;
use crate::{
    Color, aircraft::Aircraft, config::NeoRingConfig,
    drivers::{CharDisplay, LedStrip, MapProjection, ReferenceData},
    frame_store::FrameStore, geometry::{RingGeometry, RingLayout},
    render::RenderLoop, status::{rank_by_range, RangedAircraft, StatusLines},
    errors::Result
};

pub struct NeoRingEngine {
    config: NeoRingConfig,
    geometry: Arc<RingGeometry>,
    frames: Arc<FrameStore>,
    reference: Box<dyn ReferenceData + Send>,
    projection: Box<dyn MapProjection + Send>,
    display: Box<dyn CharDisplay + Send>,
    status: StatusLines,
}

impl NeoRingEngine {
    /// set up geometry and frame store and show the banner. Any failure here is fatal for the host
    pub fn new (
        config: NeoRingConfig,
        reference: Box<dyn ReferenceData + Send>,
        projection: Box<dyn MapProjection + Send>,
        mut display: Box<dyn CharDisplay + Send>
    )->Result<Self> {
        config.validate()?;
        let layout = Arc::new( RingLayout::new( &config.ring_led_counts)?);
        info!("{} leds in total on {} rings", layout.total_leds(), layout.ring_count());

        let geometry = Arc::new( RingGeometry::new( layout.clone(), config.ring_spacing, reference.home()));
        let frames = Arc::new( FrameStore::new( layout));

        display.display_line( 1, &config.status.title)?;
        let blank = " ".repeat( config.status.width);
        for line in 2..=config.status.lines {
            display.display_line( line, &blank)?;
        }

        let status = StatusLines::new( config.status.clone());
        Ok( NeoRingEngine { config, geometry, frames, reference, projection, display, status } )
    }

    pub fn config (&self)->&NeoRingConfig { &self.config }
    pub fn geometry (&self)->&Arc<RingGeometry> { &self.geometry }
    pub fn frames (&self)->&Arc<FrameStore> { &self.frames }
    pub fn status (&self)->&StatusLines { &self.status }

    /// the render loop for this engine, to be driven by the caller
    pub fn render_loop (&self, strip: Box<dyn LedStrip + Send>, rng: StdRng)->Result<RenderLoop> {
        RenderLoop::new( &self.config, self.frames.clone(), strip, rng)
    }

    /// start the render loop as a tokio task that runs until `cancel` is triggered
    pub fn spawn_render_loop (&self, strip: Box<dyn LedStrip + Send>, cancel: CancellationToken)->Result<JoinHandle<()>> {
        let render_loop = self.render_loop( strip, StdRng::from_os_rng())?;
        Ok( render_loop.spawn( cancel))
    }

    pub fn update<'a,I> (&mut self, aircraft: I)->Result<Vec<String>> where I: IntoIterator<Item=&'a Aircraft> {
        self.update_at( aircraft, utc_now())
    }

    /// one update pass: range all aircraft, paint and present a new frame, then refresh the status lines.
    /// Returns the status lines that were sent to the display
    pub fn update_at<'a,I> (&mut self, aircraft: I, now: DateTime<Utc>)->Result<Vec<String>> where I: IntoIterator<Item=&'a Aircraft> {
        let mut n_total = 0;
        let mut ranged: Vec<RangedAircraft<'a>> = Vec::new();

        for ac in aircraft.into_iter().take( self.config.max_aircraft) {
            n_total += 1;
            if let Some(r) = self.range_aircraft( ac) {
                ranged.push( r);
            }
        }

        {
            let mut back = self.frames.back_buffer()?;
            back.clear();
            for r in &ranged {
                back.set_led( r.target.ring, r.target.led, self.aircraft_color( r.aircraft, &now))?;
            }
            back.present();
        }

        rank_by_range( &mut ranged);
        let lines = self.status.format_lines( &ranged, n_total);
        self.status.advance();

        for (i,line) in lines.iter().enumerate() {
            if let Err(e) = self.display.display_line( i+1, line) {
                warn!("failed to update display line {}: {e}", i+1);
            }
        }

        debug!("update pass with {} aircraft, {} with position", n_total, ranged.len());
        Ok(lines)
    }

    /// range and LED target of an aircraft, `None` without position fix
    pub fn range_aircraft<'a> (&self, ac: &'a Aircraft)->Option<RangedAircraft<'a>> {
        if !ac.has_fix() {
            return None
        }

        let pos = self.projection.to_map( ac.lat, ac.lon, ac.altitude_meters());
        let range = self.geometry.range_miles( &pos);
        if range <= 0.0 {
            return None
        }

        let target = self.geometry.nearest_led( range, pos.x, pos.y);
        let airline = ac.airline_code()
            .and_then( |code| self.reference.airline_name( code))
            .map( str::to_string);

        Some( RangedAircraft { aircraft: ac, range, target, airline } )
    }

    /// ages are compared in whole seconds, an aircraft is stale only once it is a full second overdue
    pub fn aircraft_color (&self, ac: &Aircraft, now: &DateTime<Utc>)->Color {
        if ac.age( now).as_secs() > self.config.stale_after.as_secs() {
            self.config.colors.stale
        } else {
            self.config.colors.fresh
        }
    }
}
