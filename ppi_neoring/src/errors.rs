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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,NeoRingError>;

#[derive(Error,Debug)]
pub enum NeoRingError {
    #[error("common error {0}")]
    CommonError( #[from] ppi_common::errors::PpiCommonError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("CSV error {0}")]
    CsvError( #[from] csv::Error),

    #[error("ring {ring} out of range")]
    RingOutOfRange { ring: usize },

    #[error("led {led} out of range for ring {ring}")]
    LedOutOfRange { ring: usize, led: usize },

    #[error("invalid config: {0}")]
    ConfigError(String),

    #[error("invalid ring layout: {0}")]
    InvalidLayout(String),

    #[error("data file error: {0}")]
    DataFileError(String),

    #[error("driver error: {0}")]
    DriverError(String),

    #[error("frame store lock poisoned")]
    Poisoned,
}

macro_rules! data_file_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        NeoRingError::DataFileError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use data_file_error;

pub fn poisoned_lock<T> (_e: T)->NeoRingError { NeoRingError::Poisoned }
