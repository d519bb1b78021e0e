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
//! Recursive descent over the WKB grammar

use crate::cursor::ByteCursor;
use crate::error::SedonaWkbError;
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use crate::primitive::{read_f64, read_u32, read_u8, ByteOrder};
use crate::types::GeometryTypeId;

// Smallest possible encodings, used to cap up-front allocations
const COORD_SIZE: usize = 16;
const RING_MIN_SIZE: usize = 4;
const POINT_SIZE: usize = 5 + COORD_SIZE;
const GEOMETRY_MIN_SIZE: usize = 5 + 4;

/// The fields every geometry starts with
#[derive(Debug, Clone, Copy)]
struct WkbHeader {
    order: ByteOrder,
    geometry_type: GeometryTypeId,
    offset: usize,
}

/// Decodes one geometry from the front of a buffer
///
/// Byte order is re-read from every header, so nested geometries may use
/// a different order than their parent.
pub(crate) struct WkbReader<'a> {
    cursor: ByteCursor<'a>,
    max_depth: usize,
}

impl<'a> WkbReader<'a> {
    pub(crate) fn new(buf: &'a [u8], max_depth: usize) -> Self {
        Self {
            cursor: ByteCursor::new(buf),
            max_depth,
        }
    }

    /// Bytes consumed so far
    pub(crate) fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub(crate) fn read_geometry(&mut self) -> Result<Geometry, SedonaWkbError> {
        self.read_nested(0)
    }

    fn read_nested(&mut self, depth: usize) -> Result<Geometry, SedonaWkbError> {
        let header = self.read_header(depth)?;
        self.read_body(header, depth)
    }

    fn read_header(&mut self, depth: usize) -> Result<WkbHeader, SedonaWkbError> {
        let offset = self.cursor.offset();
        if depth > self.max_depth {
            return Err(SedonaWkbError::NestingTooDeep {
                max_depth: self.max_depth,
                offset,
            });
        }

        let value = read_u8(&mut self.cursor)?;
        let order = ByteOrder::try_from_wkb_byte(value)
            .ok_or(SedonaWkbError::InvalidByteOrder { value, offset })?;

        let code_offset = self.cursor.offset();
        let code = read_u32(&mut self.cursor, order)?;
        let geometry_type =
            GeometryTypeId::try_from_wkb_id(code).ok_or(SedonaWkbError::UnknownGeometryType {
                code,
                offset: code_offset,
            })?;

        log::trace!("WKB header {geometry_type} ({order:?}) at offset {offset}, depth {depth}");

        Ok(WkbHeader {
            order,
            geometry_type,
            offset,
        })
    }

    fn read_body(&mut self, header: WkbHeader, depth: usize) -> Result<Geometry, SedonaWkbError> {
        let order = header.order;
        let geometry: Geometry = match header.geometry_type {
            GeometryTypeId::Point => self.read_point(order)?.into(),
            GeometryTypeId::LineString => self.read_linestring(order)?.into(),
            GeometryTypeId::Polygon => self.read_polygon(order)?.into(),
            GeometryTypeId::MultiPoint => {
                let parts = self.read_members(
                    header,
                    depth,
                    GeometryTypeId::Point,
                    POINT_SIZE,
                    |reader, member| reader.read_point(member.order),
                )?;
                MultiPoint::new(parts).into()
            }
            GeometryTypeId::MultiLineString => {
                let parts = self.read_members(
                    header,
                    depth,
                    GeometryTypeId::LineString,
                    GEOMETRY_MIN_SIZE,
                    |reader, member| reader.read_linestring(member.order),
                )?;
                MultiLineString::new(parts).into()
            }
            GeometryTypeId::MultiPolygon => {
                let parts = self.read_members(
                    header,
                    depth,
                    GeometryTypeId::Polygon,
                    GEOMETRY_MIN_SIZE,
                    |reader, member| reader.read_polygon(member.order),
                )?;
                MultiPolygon::new(parts).into()
            }
            GeometryTypeId::GeometryCollection => {
                let count = self.read_count(order, GEOMETRY_MIN_SIZE)?;
                let mut parts = Vec::with_capacity(count.capacity);
                for _ in 0..count.len {
                    parts.push(self.read_nested(depth + 1)?);
                }
                GeometryCollection::new(parts).into()
            }
        };

        Ok(geometry)
    }

    /// Read the members of a MultiPoint, MultiLineString, or MultiPolygon,
    /// each of which carries its own header naming the member type
    fn read_members<T>(
        &mut self,
        header: WkbHeader,
        depth: usize,
        expected: GeometryTypeId,
        member_min_size: usize,
        mut read_member: impl FnMut(&mut Self, WkbHeader) -> Result<T, SedonaWkbError>,
    ) -> Result<Vec<T>, SedonaWkbError> {
        let count = self.read_count(header.order, member_min_size)?;
        let mut parts = Vec::with_capacity(count.capacity);
        for _ in 0..count.len {
            let member = self.read_header(depth + 1)?;
            if member.geometry_type != expected {
                return Err(SedonaWkbError::UnexpectedGeometryType {
                    expected,
                    found: member.geometry_type,
                    offset: member.offset,
                });
            }

            parts.push(read_member(self, member)?);
        }

        Ok(parts)
    }

    fn read_point(&mut self, order: ByteOrder) -> Result<Point, SedonaWkbError> {
        let (x, y) = self.read_coord(order)?;
        Ok(Point::new(x, y))
    }

    fn read_linestring(&mut self, order: ByteOrder) -> Result<LineString, SedonaWkbError> {
        Ok(LineString::new(self.read_coords(order)?))
    }

    fn read_polygon(&mut self, order: ByteOrder) -> Result<Polygon, SedonaWkbError> {
        let count = self.read_count(order, RING_MIN_SIZE)?;
        let mut rings = Vec::with_capacity(count.capacity);
        for _ in 0..count.len {
            rings.push(self.read_coords(order)?);
        }

        Ok(Polygon::new(rings))
    }

    fn read_coords(&mut self, order: ByteOrder) -> Result<Vec<Coord>, SedonaWkbError> {
        let count = self.read_count(order, COORD_SIZE)?;
        let mut coords = Vec::with_capacity(count.capacity);
        for _ in 0..count.len {
            coords.push(self.read_coord(order)?);
        }

        Ok(coords)
    }

    fn read_coord(&mut self, order: ByteOrder) -> Result<Coord, SedonaWkbError> {
        let x = read_f64(&mut self.cursor, order)?;
        let y = read_f64(&mut self.cursor, order)?;
        Ok((x, y))
    }

    fn read_count(
        &mut self,
        order: ByteOrder,
        element_min_size: usize,
    ) -> Result<ElementCount, SedonaWkbError> {
        let len = read_u32(&mut self.cursor, order)? as usize;
        let capacity = len.min(self.cursor.peek_remaining() / element_min_size);
        Ok(ElementCount { len, capacity })
    }
}

/// A decoded element count and how much space to reserve for it
struct ElementCount {
    len: usize,
    capacity: usize,
}
