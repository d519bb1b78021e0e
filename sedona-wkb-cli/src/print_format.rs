// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Output formats for decoded geometries

use clap::ValueEnum;
use sedona_wkb::{wkb_size, Geometry};

use crate::CliError;

/// How a decoded geometry is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    Json,
    PrettyJson,
    Summary,
}

impl PrintFormat {
    pub fn format(&self, geometry: &Geometry) -> Result<String, CliError> {
        let out = match self {
            Self::Json => serde_json::to_string(geometry)?,
            Self::PrettyJson => serde_json::to_string_pretty(geometry)?,
            Self::Summary => format!(
                "{}: {} parts, {} points, {} bytes",
                geometry.geometry_type(),
                num_parts(geometry),
                point_count(geometry),
                wkb_size(geometry)
            ),
        };

        Ok(out)
    }
}

fn num_parts(geometry: &Geometry) -> usize {
    match geometry {
        Geometry::Point(_) | Geometry::LineString(_) => 1,
        Geometry::Polygon(polygon) => polygon.rings.len(),
        Geometry::MultiPoint(multi) => multi.parts.len(),
        Geometry::MultiLineString(multi) => multi.parts.len(),
        Geometry::MultiPolygon(multi) => multi.parts.len(),
        Geometry::GeometryCollection(collection) => collection.parts.len(),
    }
}

/// Total number of coordinates, including those of nested geometries
fn point_count(geometry: &Geometry) -> usize {
    match geometry {
        Geometry::Point(_) => 1,
        Geometry::LineString(linestring) => linestring.points.len(),
        Geometry::Polygon(polygon) => polygon.rings.iter().map(Vec::len).sum(),
        Geometry::MultiPoint(multi) => multi.parts.len(),
        Geometry::MultiLineString(multi) => multi.parts.iter().map(|ls| ls.points.len()).sum(),
        Geometry::MultiPolygon(multi) => multi
            .parts
            .iter()
            .flat_map(|polygon| polygon.rings.iter())
            .map(Vec::len)
            .sum(),
        Geometry::GeometryCollection(collection) => collection.parts.iter().map(point_count).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sedona_wkb::{GeometryCollection, LineString, Point, Polygon};

    #[test]
    fn summary() {
        let geometry: Geometry = GeometryCollection::new(vec![
            Point::new(1.0, 2.0).into(),
            LineString::new(vec![(0.0, 0.0), (1.0, 1.0)]).into(),
            Polygon::new(vec![vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]]).into(),
        ])
        .into();

        assert_eq!(
            PrintFormat::Summary.format(&geometry).unwrap(),
            "GeometryCollection: 3 parts, 7 points, 148 bytes"
        );
    }

    #[test]
    fn json() {
        let geometry: Geometry = Point::new(1.0, 2.0).into();
        assert_eq!(
            PrintFormat::Json.format(&geometry).unwrap(),
            r#"{"Point":{"x":1.0,"y":2.0}}"#
        );
    }
}
