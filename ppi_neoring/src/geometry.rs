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

//! the geometric model of the concentric LED rings. Rings are numbered in strip order (outermost ring
//! first, the single center LED last). Within a ring LEDs are evenly spaced clockwise, starting at north.
//! All planar coordinates are map units (meters) of the projection used by [`crate::drivers::MapProjection`]

use std::{fmt, sync::Arc};
use serde::{Serialize,Deserialize};
use ppi_common::{angle::bearing_from_north, planar_distance, sin, cos, TWO_PI, METERS_TO_MILES};
use crate::errors::{NeoRingError,Result};

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct MapPoint {
    pub x: f64, // easting
    pub y: f64, // northing
}

impl MapPoint {
    pub fn new (x: f64, y: f64)->Self { MapPoint{x,y} }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "({:.1},{:.1})", self.x, self.y)
    }
}

/// the static per-ring LED counts and the derived flat strip offsets
#[derive(Debug,Clone,PartialEq)]
pub struct RingLayout {
    counts: Vec<usize>,
    start_offsets: Vec<usize>,
    total: usize,
}

impl RingLayout {
    pub fn new (counts: &[usize])->Result<Self> {
        if counts.is_empty() {
            return Err( NeoRingError::InvalidLayout("no rings".to_string()))
        }
        if let Some(ring) = counts.iter().position(|c| *c == 0) {
            return Err( NeoRingError::InvalidLayout( format!("ring {ring} has no LEDs")))
        }

        let mut start_offsets = Vec::with_capacity( counts.len());
        let mut total = 0;
        for c in counts {
            start_offsets.push( total);
            total += c;
        }

        Ok( RingLayout { counts: counts.to_vec(), start_offsets, total } )
    }

    pub fn ring_count (&self)->usize { self.counts.len() }
    pub fn total_leds (&self)->usize { self.total }
    pub fn led_counts (&self)->&[usize] { self.counts.as_slice() }

    pub fn led_count (&self, ring: usize)->Option<usize> { self.counts.get(ring).copied() }

    /// number of LEDs in all rings before `ring`
    pub fn ring_start_offset (&self, ring: usize)->Option<usize> { self.start_offsets.get(ring).copied() }

    /// index into the physical strip. Out of range values are errors, never clamped
    pub fn flat_index (&self, ring: usize, led: usize)->Result<usize> {
        let count = self.led_count( ring).ok_or( NeoRingError::RingOutOfRange{ring})?;
        if led >= count {
            return Err( NeoRingError::LedOutOfRange{ring,led})
        }
        Ok( self.start_offsets[ring] + led )
    }

    /// position of `ring` counted from the center, which is what determines its radius
    pub fn radial_index (&self, ring: usize)->Option<usize> {
        if ring < self.counts.len() { Some( self.counts.len() - 1 - ring) } else { None }
    }

    /// the inverse of `flat_index`
    pub fn ring_led (&self, idx: usize)->Option<(usize,usize)> {
        if idx >= self.total { return None }
        let ring = self.start_offsets.partition_point( |start| *start <= idx) - 1;
        Some( (ring, idx - self.start_offsets[ring]) )
    }
}

/// where a ranged target ends up on the rings
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct LedTarget {
    pub ring: usize,
    pub led: usize,
    pub bearing: f64, // radians clockwise from north, [0,2π)
}

/// layout plus station position, with the map coordinates of all LEDs computed upfront
#[derive(Debug)]
pub struct RingGeometry {
    layout: Arc<RingLayout>,
    ring_spacing: f64, // miles
    home: MapPoint,
    led_coords: Vec<Vec<MapPoint>>,
}

impl RingGeometry {
    pub fn new (layout: Arc<RingLayout>, ring_spacing: f64, home: MapPoint)->Self {
        let last = layout.ring_count() - 1;
        let led_coords = layout.led_counts().iter().enumerate().map( |(ring,count)| {
            let radius = (ring_spacing * (last - ring) as f64) / METERS_TO_MILES;
            (0..*count).map( |i| {
                let angle = (i as f64 * TWO_PI) / *count as f64;
                MapPoint::new( home.x + sin(angle) * radius, home.y + cos(angle) * radius)
            }).collect()
        }).collect();

        RingGeometry { layout, ring_spacing, home, led_coords }
    }

    pub fn layout (&self)->&Arc<RingLayout> { &self.layout }
    pub fn home (&self)->MapPoint { self.home }
    pub fn ring_spacing (&self)->f64 { self.ring_spacing }

    /// angular distance between two neighboring LEDs of `ring`
    pub fn led_spacing (&self, ring: usize)->Option<f64> {
        self.layout.led_count( ring).map( |n| TWO_PI / n as f64)
    }

    /// planar position of a LED on a circle of radius `ring_spacing * radial_index` around home
    pub fn map_coordinate_of_led (&self, ring: usize, led: usize)->Option<MapPoint> {
        self.led_coords.get(ring).and_then( |coords| coords.get(led)).copied()
    }

    /// distance of a map position from home in miles
    pub fn range_miles (&self, p: &MapPoint)->f64 {
        planar_distance( self.home.x, self.home.y, p.x, p.y) * METERS_TO_MILES
    }

    /// bucket a range into a ring. The closest bucket (below 2 ring spacings) is the last ring in the
    /// strip (the center LED), everything beyond `ring_count` spacings ends up on the first (outermost) ring
    pub fn ring_for_range (&self, range_miles: f64)->usize {
        let last = self.layout.ring_count() - 1;
        let bucket = ((range_miles / self.ring_spacing) as i64 - 1).clamp( 0, last as i64) as usize;
        last - bucket
    }

    /// the LED closest to the given map position. Targets exactly between two LEDs go to the clockwise one
    pub fn nearest_led (&self, range_miles: f64, map_x: f64, map_y: f64)->LedTarget {
        let ring = self.ring_for_range( range_miles);
        let bearing = bearing_from_north( map_x - self.home.x, map_y - self.home.y);

        let n_leds = self.layout.led_counts()[ring];
        let led = if n_leds > 1 {
            let spacing = TWO_PI / n_leds as f64;
            ((bearing + spacing / 2.0) / spacing) as usize % n_leds
        } else {
            0
        };

        LedTarget { ring, led, bearing }
    }
}
