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

use ppi_common::{angle::*, PI, HALF_PI, TWO_PI};

// run with "cargo test --test test_angle -- --nocapture"

fn approx (a: f64, b: f64)->bool { (a - b).abs() < 1e-9 }

/// the smaller of the two arcs between two angles
fn angular_distance (a: f64, b: f64)->f64 {
    let d = normalize_two_pi( a - b);
    if d > TWO_PI - d { TWO_PI - d } else { d }
}

#[test]
fn test_normalize () {
    assert!( approx( normalize_two_pi(-HALF_PI), 3.0 * HALF_PI));
    assert!( approx( normalize_two_pi(TWO_PI + 0.5), 0.5));
    assert!( normalize_two_pi(-1e-20) < TWO_PI);
}

#[test]
fn test_bearing_from_north () {
    println!("--- bearings of the cardinal directions");
    assert!( approx( bearing_from_north( 0.0, 1.0), 0.0));       // north
    assert!( approx( bearing_from_north( 1.0, 0.0), HALF_PI));   // east
    assert!( approx( bearing_from_north( 0.0, -1.0), PI));       // south
    assert!( approx( bearing_from_north( -1.0, 0.0), 3.0 * HALF_PI)); // west

    for i in 0..360 {
        let a = (i as f64).to_radians();
        let b = bearing_from_north( a.sin(), a.cos());
        assert!( b >= 0.0 && b < TWO_PI);
        assert!( angular_distance( a, b) < 1e-9, "{i}deg -> {b}");
    }
}
