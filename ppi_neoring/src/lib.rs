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

//! radar style display of tracked aircraft on a set of concentric LED rings, with a status line
//! character display for the nearest aircraft.
//!
//! The host feeds aircraft lists into [`engine::NeoRingEngine::update`], which paints a new frame into the
//! back buffer of the [`frame_store::FrameStore`] and presents it. The [`render::RenderLoop`] runs
//! concurrently at a fixed cadence, merges the presented frame with the [`sweep`] animation and hands it
//! to the LED strip driver.

pub mod errors;
pub mod config;
pub mod geometry;
pub mod frame_store;
pub mod sweep;
pub mod render;
pub mod aircraft;
pub mod status;
pub mod drivers;
pub mod data_files;
pub mod engine;

pub use rgb::RGB8;

pub type Color = RGB8;

/// the color of a LED that is switched off
pub const OFF: Color = RGB8 { r: 0, g: 0, b: 0 };
