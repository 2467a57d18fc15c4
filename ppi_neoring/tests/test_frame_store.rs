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

use std::{sync::{Arc, atomic::{AtomicBool, Ordering}}, thread};
use ppi_neoring::{Color, OFF, frame_store::FrameStore, geometry::RingLayout, errors::NeoRingError};

// run with "cargo test --test test_frame_store -- --nocapture"

const RED: Color = Color { r: 64, g: 0, b: 0 };
const BLUE: Color = Color { r: 0, g: 0, b: 32 };

fn store ()->FrameStore {
    FrameStore::new( Arc::new( RingLayout::new( &[60, 48, 40, 32, 24, 16, 12, 8, 1]).unwrap()))
}

#[test]
fn test_clear_present () {
    let store = store();
    {
        let mut back = store.back_buffer().unwrap();
        back.set_led( 0, 0, RED).unwrap();
        back.present();
    }
    assert_eq!( store.front_colors().unwrap()[0], RED);

    {
        let mut back = store.back_buffer().unwrap();
        back.clear();
        back.present();
    }
    assert!( store.front_colors().unwrap().iter().all( |c| *c == OFF));
}

#[test]
fn test_writes_invisible_until_present () {
    let store = store();
    let mut back = store.back_buffer().unwrap();
    back.clear();
    back.set_led( 6, 3, RED).unwrap();
    back.set_led( 8, 0, BLUE).unwrap();
    assert_eq!( back.colors()[223], RED);
    drop(back); // released without present

    assert!( store.front_colors().unwrap().iter().all( |c| *c == OFF));

    store.present().unwrap();
    let front = store.front_colors().unwrap();
    assert_eq!( front[223], RED);
    assert_eq!( front[240], BLUE);
    assert_eq!( front.iter().filter( |c| **c != OFF).count(), 2);
}

#[test]
fn test_double_present () {
    let store = store();
    {
        let mut back = store.back_buffer().unwrap();
        back.clear();
        back.set_led( 2, 5, RED).unwrap();
        back.present();
    }
    let visible = store.front_colors().unwrap();

    store.present().unwrap();
    assert_ne!( store.front_colors().unwrap(), visible);
    store.present().unwrap();
    assert_eq!( store.front_colors().unwrap(), visible);
}

#[test]
fn test_out_of_range_rejected () {
    let store = store();
    let mut back = store.back_buffer().unwrap();
    back.clear();
    assert!( matches!( back.set_led( 9, 0, RED), Err(NeoRingError::RingOutOfRange{..})));
    assert!( matches!( back.set_led( 7, 8, RED), Err(NeoRingError::LedOutOfRange{..})));

    // nothing else got written
    assert!( back.colors().iter().all( |c| *c == OFF));
}

#[test]
fn test_no_torn_frames () {
    let store = Arc::new( store());
    let n_leds = store.layout().total_leds();
    let done = Arc::new( AtomicBool::new(false));

    // the producer alternates between two complete frames, painting one LED at a time
    let producer = {
        let store = store.clone();
        let done = done.clone();
        thread::spawn( move || {
            for i in 0..2000 {
                let color = if i % 2 == 0 { RED } else { BLUE };
                let mut back = store.back_buffer().unwrap();
                back.clear();
                for ring in 0..9 {
                    for led in 0..store.layout().led_count(ring).unwrap() {
                        back.set_led( ring, led, color).unwrap();
                    }
                }
                back.present();
            }
            done.store( true, Ordering::Relaxed);
        })
    };

    let mut n_reads = 0;
    while !done.load( Ordering::Relaxed) {
        let front = store.front_buffer().unwrap();
        let colors = front.colors();
        let first = colors[0];
        assert!( colors.iter().all( |c| *c == first), "torn frame observed");
        n_reads += 1;
    }
    producer.join().unwrap();
    println!("{n_reads} consistent reads");
}
