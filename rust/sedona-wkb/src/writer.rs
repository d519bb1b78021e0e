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
//! Encoding of [Geometry] values into WKB

use crate::cursor::ByteCursorMut;
use crate::error::SedonaWkbError;
use crate::geometry::{Coord, Geometry, LineString, Point, Polygon};
use crate::primitive::{write_f64, write_u32, write_u8, ByteOrder};
use crate::types::GeometryTypeId;

const HEADER_SIZE: usize = 1 + 4;
const COUNT_SIZE: usize = 4;
const COORD_SIZE: usize = 8 + 8;

/// Exact number of bytes needed to encode `geometry` as WKB
pub fn wkb_size(geometry: &Geometry) -> usize {
    match geometry {
        Geometry::Point(_) => point_size(),
        Geometry::LineString(linestring) => linestring_size(linestring),
        Geometry::Polygon(polygon) => polygon_size(polygon),
        Geometry::MultiPoint(multi) => HEADER_SIZE + COUNT_SIZE + multi.parts.len() * point_size(),
        Geometry::MultiLineString(multi) => {
            HEADER_SIZE + COUNT_SIZE + multi.parts.iter().map(linestring_size).sum::<usize>()
        }
        Geometry::MultiPolygon(multi) => {
            HEADER_SIZE + COUNT_SIZE + multi.parts.iter().map(polygon_size).sum::<usize>()
        }
        Geometry::GeometryCollection(collection) => {
            HEADER_SIZE + COUNT_SIZE + collection.parts.iter().map(wkb_size).sum::<usize>()
        }
    }
}

fn point_size() -> usize {
    HEADER_SIZE + COORD_SIZE
}

fn linestring_size(linestring: &LineString) -> usize {
    HEADER_SIZE + COUNT_SIZE + linestring.points.len() * COORD_SIZE
}

fn polygon_size(polygon: &Polygon) -> usize {
    HEADER_SIZE
        + COUNT_SIZE
        + polygon
            .rings
            .iter()
            .map(|ring| COUNT_SIZE + ring.len() * COORD_SIZE)
            .sum::<usize>()
}

/// Writes geometries using one byte order for every header
pub(crate) struct WkbWriter<'a> {
    cursor: ByteCursorMut<'a>,
    order: ByteOrder,
}

impl<'a> WkbWriter<'a> {
    pub(crate) fn new(buf: &'a mut [u8], order: ByteOrder) -> Self {
        Self {
            cursor: ByteCursorMut::new(buf),
            order,
        }
    }

    /// Bytes written so far
    pub(crate) fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub(crate) fn write_geometry(&mut self, geometry: &Geometry) -> Result<(), SedonaWkbError> {
        match geometry {
            Geometry::Point(point) => self.write_point(point),
            Geometry::LineString(linestring) => self.write_linestring(linestring),
            Geometry::Polygon(polygon) => self.write_polygon(polygon),
            Geometry::MultiPoint(multi) => {
                self.write_header(GeometryTypeId::MultiPoint)?;
                self.write_count(multi.parts.len())?;
                for point in &multi.parts {
                    self.write_point(point)?;
                }
                Ok(())
            }
            Geometry::MultiLineString(multi) => {
                self.write_header(GeometryTypeId::MultiLineString)?;
                self.write_count(multi.parts.len())?;
                for linestring in &multi.parts {
                    self.write_linestring(linestring)?;
                }
                Ok(())
            }
            Geometry::MultiPolygon(multi) => {
                self.write_header(GeometryTypeId::MultiPolygon)?;
                self.write_count(multi.parts.len())?;
                for polygon in &multi.parts {
                    self.write_polygon(polygon)?;
                }
                Ok(())
            }
            Geometry::GeometryCollection(collection) => {
                self.write_header(GeometryTypeId::GeometryCollection)?;
                self.write_count(collection.parts.len())?;
                for part in &collection.parts {
                    self.write_geometry(part)?;
                }
                Ok(())
            }
        }
    }

    fn write_header(&mut self, geometry_type: GeometryTypeId) -> Result<(), SedonaWkbError> {
        write_u8(&mut self.cursor, self.order.wkb_byte())?;
        write_u32(&mut self.cursor, geometry_type.wkb_id(), self.order)
    }

    fn write_point(&mut self, point: &Point) -> Result<(), SedonaWkbError> {
        self.write_header(GeometryTypeId::Point)?;
        self.write_coord(point.coord())
    }

    fn write_linestring(&mut self, linestring: &LineString) -> Result<(), SedonaWkbError> {
        self.write_header(GeometryTypeId::LineString)?;
        self.write_coords(&linestring.points)
    }

    fn write_polygon(&mut self, polygon: &Polygon) -> Result<(), SedonaWkbError> {
        self.write_header(GeometryTypeId::Polygon)?;
        self.write_count(polygon.rings.len())?;
        for ring in &polygon.rings {
            self.write_coords(ring)?;
        }
        Ok(())
    }

    fn write_coords(&mut self, coords: &[Coord]) -> Result<(), SedonaWkbError> {
        self.write_count(coords.len())?;
        for coord in coords {
            self.write_coord(*coord)?;
        }
        Ok(())
    }

    fn write_coord(&mut self, coord: Coord) -> Result<(), SedonaWkbError> {
        write_f64(&mut self.cursor, coord.0, self.order)?;
        write_f64(&mut self.cursor, coord.1, self.order)
    }

    fn write_count(&mut self, count: usize) -> Result<(), SedonaWkbError> {
        write_u32(&mut self.cursor, count_to_u32(count)?, self.order)
    }
}

fn count_to_u32(count: usize) -> Result<u32, SedonaWkbError> {
    count
        .try_into()
        .map_err(|_| SedonaWkbError::TooManyElements { count })
}
