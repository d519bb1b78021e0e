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
use thiserror::Error;

use crate::types::GeometryTypeId;

#[derive(Error, Debug)]
pub enum SedonaWkbError {
    #[error("{0}")]
    Invalid(String),
    #[error("Invalid WKB: buffer too small. At offset: {offset}. Need {requested} bytes, {remaining} remaining.")]
    OutOfRange {
        offset: usize,
        requested: usize,
        remaining: usize,
    },
    #[error("Bad geometry type: {code} @{offset}")]
    UnknownGeometryType { code: u32, offset: usize },
    #[error("Unexpected byte order: {value} @{offset}")]
    InvalidByteOrder { value: u8, offset: usize },
    #[error("Expected {expected} but found {found} @{offset}")]
    UnexpectedGeometryType {
        expected: GeometryTypeId,
        found: GeometryTypeId,
        offset: usize,
    },
    #[error("Geometry nesting exceeds maximum depth of {max_depth} @{offset}")]
    NestingTooDeep { max_depth: usize, offset: usize },
    #[error("Collection contains too many elements for WKB format: {count}")]
    TooManyElements { count: usize },
    #[error("{0}")]
    Base64(#[from] base64::DecodeError),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors() {
        let invalid = SedonaWkbError::Invalid("foofy".to_string());
        assert_eq!(invalid.to_string(), "foofy");

        let out_of_range = SedonaWkbError::OutOfRange {
            offset: 5,
            requested: 8,
            remaining: 3,
        };
        assert_eq!(
            out_of_range.to_string(),
            "Invalid WKB: buffer too small. At offset: 5. Need 8 bytes, 3 remaining."
        );

        let unknown = SedonaWkbError::UnknownGeometryType {
            code: 99,
            offset: 1,
        };
        assert_eq!(unknown.to_string(), "Bad geometry type: 99 @1");

        let unexpected = SedonaWkbError::UnexpectedGeometryType {
            expected: GeometryTypeId::Point,
            found: GeometryTypeId::LineString,
            offset: 9,
        };
        assert_eq!(
            unexpected.to_string(),
            "Expected Point but found LineString @9"
        );

        let base64_err: SedonaWkbError = base64::DecodeError::InvalidByte(0, b'*').into();
        assert!(matches!(base64_err, SedonaWkbError::Base64(_)));
    }
}
