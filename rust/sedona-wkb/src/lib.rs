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
//! Well-Known Binary (WKB) codec for two-dimensional geometries
//!
//! [read] decodes raw WKB bytes or Base64 encoded WKB text into a
//! [Geometry]; [write] encodes a [Geometry] back into WKB using a single
//! byte order.
pub mod codec;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod primitive;
mod reader;
pub mod types;
mod writer;

pub use codec::{
    decode_base64, read, read_wkb_prefix, read_with_options, write, write_into,
    write_with_options, ReadOptions, WkbInput, WriteOptions, DEFAULT_MAX_DEPTH,
};
pub use error::SedonaWkbError;
pub use geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
pub use primitive::ByteOrder;
pub use types::GeometryTypeId;
pub use writer::wkb_size;
