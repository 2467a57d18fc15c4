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

//! double buffered LED colors shared between the update pass (producer) and the render loop (consumer).
//! One mutex guards both buffers and the index of the back buffer, hence the render loop can never see a
//! partially written frame or a half-done swap. The front buffer is never mutated while it is front

use std::sync::{Arc, Mutex, MutexGuard};
use crate::{Color, OFF, geometry::RingLayout, errors::{poisoned_lock, Result}};

struct Frames {
    buffers: [Vec<Color>; 2],
    back: usize,
}

impl Frames {
    fn front (&self)->&[Color] { self.buffers[1 - self.back].as_slice() }
    fn back_mut (&mut self)->&mut [Color] { self.buffers[self.back].as_mut_slice() }
    fn swap (&mut self) { self.back = 1 - self.back; }
}

pub struct FrameStore {
    layout: Arc<RingLayout>,
    frames: Mutex<Frames>,
}

impl FrameStore {
    pub fn new (layout: Arc<RingLayout>)->Self {
        let n = layout.total_leds();
        let frames = Frames { buffers: [vec![OFF; n], vec![OFF; n]], back: 0 };
        FrameStore { layout, frames: Mutex::new(frames) }
    }

    pub fn layout (&self)->&Arc<RingLayout> { &self.layout }

    /// lock the store for an update pass
    pub fn back_buffer (&self)->Result<BackBuffer<'_>> {
        let guard = self.frames.lock().map_err( poisoned_lock)?;
        Ok( BackBuffer { layout: &self.layout, guard } )
    }

    /// lock the store for reading the visible frame
    pub fn front_buffer (&self)->Result<FrontBuffer<'_>> {
        let guard = self.frames.lock().map_err( poisoned_lock)?;
        Ok( FrontBuffer { guard } )
    }

    /// exchange front and back roles
    pub fn present (&self)->Result<()> {
        self.frames.lock().map_err( poisoned_lock)?.swap();
        Ok(())
    }

    /// copy of the currently visible frame
    pub fn front_colors (&self)->Result<Vec<Color>> {
        Ok( self.front_buffer()?.colors().to_vec() )
    }
}

/// exclusive write access to the back buffer for the duration of an update pass
pub struct BackBuffer<'a> {
    layout: &'a RingLayout,
    guard: MutexGuard<'a,Frames>,
}

impl<'a> BackBuffer<'a> {
    pub fn clear (&mut self) {
        self.guard.back_mut().fill( OFF);
    }

    pub fn set_led (&mut self, ring: usize, led: usize, color: Color)->Result<()> {
        let idx = self.layout.flat_index( ring, led)?;
        self.guard.back_mut()[idx] = color;
        Ok(())
    }

    pub fn colors (&self)->&[Color] { self.guard.buffers[self.guard.back].as_slice() }

    /// make this buffer visible and release the store
    pub fn present (mut self) {
        self.guard.swap();
    }
}

/// read access to the visible frame, which blocks swaps while held
pub struct FrontBuffer<'a> {
    guard: MutexGuard<'a,Frames>,
}

impl<'a> FrontBuffer<'a> {
    pub fn colors (&self)->&[Color] { self.guard.front() }
}
