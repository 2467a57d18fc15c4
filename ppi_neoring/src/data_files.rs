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

//! loader for the '|' delimited reference data files
//!
//! `poi.txt`: `name|lat|lon` - the first record is the receiving station
//! `airlines.txt`: `code|name|country`

use std::{collections::HashMap, path::Path};
use csv::{ReaderBuilder, StringRecord};
use tracing::info;
use crate::{drivers::{MapProjection, ReferenceData}, geometry::MapPoint, errors::{data_file_error, NeoRingError, Result}};

pub const POI_FILENAME: &str = "poi.txt";
pub const AIRLINES_FILENAME: &str = "airlines.txt";

#[derive(Debug,Clone,PartialEq)]
pub struct PointOfInterest {
    pub name: String,
    pub pos: MapPoint,
}

#[derive(Debug,Clone,PartialEq)]
pub struct Airline {
    pub name: String,
    pub country: String,
}

#[derive(Debug)]
pub struct PpiDataFiles {
    pois: Vec<PointOfInterest>,
    airlines: HashMap<String,Airline>,
}

impl PpiDataFiles {
    /// load both files from `dir`. Each of them has to contain at least one record
    pub fn load (dir: &Path, projection: &dyn MapProjection)->Result<Self> {
        let pois = load_pois( &dir.join( POI_FILENAME), projection)?;
        let airlines = load_airlines( &dir.join( AIRLINES_FILENAME))?;
        info!("loaded {} points of interest and {} airlines from {:?}", pois.len(), airlines.len(), dir);

        Ok( PpiDataFiles { pois, airlines } )
    }

    pub fn pois (&self)->&[PointOfInterest] { self.pois.as_slice() }
    pub fn airline (&self, code: &str)->Option<&Airline> { self.airlines.get(code) }
}

impl ReferenceData for PpiDataFiles {
    fn home (&self)->MapPoint {
        self.pois[0].pos // load guarantees there is one
    }

    fn airline_name (&self, code: &str)->Option<&str> {
        self.airlines.get(code).map( |a| a.name.as_str()).filter( |name| !name.is_empty())
    }
}

fn for_each_record<F> (path: &Path, mut f: F)->Result<()> where F: FnMut(&StringRecord)->Result<()> {
    let mut reader = ReaderBuilder::new()
        .delimiter( b'|')
        .has_headers( false)
        .flexible( true)
        .quoting( false)
        .from_path( path)?;

    for record in reader.records() {
        f( &record?)?;
    }
    Ok(())
}

fn field<'a> (rec: &'a StringRecord, i: usize)->&'a str {
    rec.get(i).unwrap_or("").trim()
}

fn parse_degrees (rec: &StringRecord, i: usize, path: &Path)->Result<f64> {
    let s = field( rec, i);
    s.parse::<f64>().map_err( |_| data_file_error!("invalid coordinate '{}' in {:?}", s, path))
}

pub fn load_pois (path: &Path, projection: &dyn MapProjection)->Result<Vec<PointOfInterest>> {
    let mut pois = Vec::new();
    for_each_record( path, |rec| {
        let lat = parse_degrees( rec, 1, path)?;
        let lon = parse_degrees( rec, 2, path)?;
        let pos = projection.to_map( lat, lon, 0.0);
        pois.push( PointOfInterest { name: field( rec, 0).to_string(), pos });
        Ok(())
    })?;

    if pois.is_empty() {
        return Err( data_file_error!("{:?} should contain at least one point", path))
    }
    Ok(pois)
}

pub fn load_airlines (path: &Path)->Result<HashMap<String,Airline>> {
    let mut airlines = HashMap::new();
    for_each_record( path, |rec| {
        let code = field( rec, 0);
        if !code.is_empty() {
            let airline = Airline { name: field( rec, 1).to_string(), country: field( rec, 2).to_string() };
            airlines.insert( code.to_string(), airline);
        }
        Ok(())
    })?;

    if airlines.is_empty() {
        return Err( data_file_error!("failed to read any airline data from {:?}", path))
    }
    Ok(airlines)
}
