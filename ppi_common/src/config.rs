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

//! config loading. Configs are RON files that are looked up in the filesystem first. If there is no such
//! file we fall back to the default RON text the config crate has compiled in

use std::path::Path;
use serde::Deserialize;
use crate::errors::{PpiCommonError,Result};

/// load config from `path` if that file exists, otherwise parse the provided embedded default
pub fn load_config<C> (path: Option<&Path>, embedded: Option<&str>) -> Result<C>
    where C: for <'a> Deserialize<'a>
{
    if let Some(path) = path {
        if path.is_file() {
            return load_config_file( path)
        }
    }

    if let Some(src) = embedded {
        return config_from_str( src)
    }

    Err( PpiCommonError::ConfigNotFound("no config file and no embedded default".to_string()) )
}

pub fn load_config_file<C> (path: &Path) -> Result<C> where C: for <'a> Deserialize<'a> {
    let data = std::fs::read( path)?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

pub fn config_from_str<C> (src: &str) -> Result<C> where C: for <'a> Deserialize<'a> {
    Ok( ron::de::from_str( src)? )
}
