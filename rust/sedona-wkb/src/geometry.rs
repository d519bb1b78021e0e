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
//! In-memory geometry values produced by the reader and consumed by the writer
//!
//! All values are two-dimensional; coordinates are `(x, y)` pairs.

use serde::{Deserialize, Serialize};

use crate::types::GeometryTypeId;

/// An `(x, y)` coordinate pair
pub type Coord = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self::new(value.0, value.1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    pub points: Vec<Coord>,
}

impl LineString {
    pub fn new(points: Vec<Coord>) -> Self {
        Self { points }
    }
}

/// A polygon made of rings; the first ring is the exterior and any
/// remaining rings are holes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub rings: Vec<Vec<Coord>>,
}

impl Polygon {
    pub fn new(rings: Vec<Vec<Coord>>) -> Self {
        Self { rings }
    }

    /// The exterior ring, or `None` for an empty polygon
    pub fn exterior(&self) -> Option<&[Coord]> {
        self.rings.first().map(|ring| ring.as_slice())
    }

    pub fn interiors(&self) -> &[Vec<Coord>] {
        self.rings.get(1..).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    pub parts: Vec<Point>,
}

impl MultiPoint {
    pub fn new(parts: Vec<Point>) -> Self {
        Self { parts }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString {
    pub parts: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(parts: Vec<LineString>) -> Self {
        Self { parts }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    pub parts: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(parts: Vec<Polygon>) -> Self {
        Self { parts }
    }
}

/// A heterogeneous collection that may nest any geometry, including
/// other collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    pub parts: Vec<Geometry>,
}

impl GeometryCollection {
    pub fn new(parts: Vec<Geometry>) -> Self {
        Self { parts }
    }
}

/// Any of the seven WKB geometry kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The [GeometryTypeId] written into this geometry's WKB header
    pub fn geometry_type(&self) -> GeometryTypeId {
        match self {
            Self::Point(_) => GeometryTypeId::Point,
            Self::LineString(_) => GeometryTypeId::LineString,
            Self::Polygon(_) => GeometryTypeId::Polygon,
            Self::MultiPoint(_) => GeometryTypeId::MultiPoint,
            Self::MultiLineString(_) => GeometryTypeId::MultiLineString,
            Self::MultiPolygon(_) => GeometryTypeId::MultiPolygon,
            Self::GeometryCollection(_) => GeometryTypeId::GeometryCollection,
        }
    }
}

macro_rules! impl_into_geometry {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_into_geometry!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);
