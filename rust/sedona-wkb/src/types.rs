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
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SedonaWkbError;

/// Geometry types
///
/// An enumerator for the seven geometry kinds a WKB header can name.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Hash, Clone, Copy)]
pub enum GeometryTypeId {
    /// Point geometry type
    Point,
    /// LineString geometry type
    LineString,
    /// Polygon geometry type
    Polygon,
    /// MultiPoint geometry type
    MultiPoint,
    /// MultiLineString geometry type
    MultiLineString,
    /// MultiPolygon geometry type
    MultiPolygon,
    /// GeometryCollection geometry type
    GeometryCollection,
}

impl GeometryTypeId {
    /// Construct a geometry type from a WKB type integer
    ///
    /// Returns `None` for any code outside 1 (Point)...7 (GeometryCollection).
    pub fn try_from_wkb_id(wkb_id: u32) -> Option<Self> {
        match wkb_id {
            1 => Some(Self::Point),
            2 => Some(Self::LineString),
            3 => Some(Self::Polygon),
            4 => Some(Self::MultiPoint),
            5 => Some(Self::MultiLineString),
            6 => Some(Self::MultiPolygon),
            7 => Some(Self::GeometryCollection),
            _ => None,
        }
    }

    /// WKB integer identifier (e.g., 1 for Point...7 for GeometryCollection)
    pub fn wkb_id(&self) -> u32 {
        match self {
            Self::Point => 1,
            Self::LineString => 2,
            Self::Polygon => 3,
            Self::MultiPoint => 4,
            Self::MultiLineString => 5,
            Self::MultiPolygon => 6,
            Self::GeometryCollection => 7,
        }
    }

    /// GeoJSON string identifier
    ///
    /// Use [FromStr] to parse such a string back into a GeometryTypeId.
    pub fn geojson_id(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }
}

impl Display for GeometryTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.geojson_id())
    }
}

impl FromStr for GeometryTypeId {
    type Err = SedonaWkbError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value_lower = value.to_ascii_lowercase();
        match value_lower.as_str() {
            "point" => Ok(Self::Point),
            "linestring" => Ok(Self::LineString),
            "polygon" => Ok(Self::Polygon),
            "multipoint" => Ok(Self::MultiPoint),
            "multilinestring" => Ok(Self::MultiLineString),
            "multipolygon" => Ok(Self::MultiPolygon),
            "geometrycollection" => Ok(Self::GeometryCollection),
            _ => Err(SedonaWkbError::Invalid(format!(
                "Invalid geometry type string: '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;
    use GeometryTypeId::*;

    #[rstest]
    fn geometry_type_wkb_id_roundtrip(
        #[values(
            (Point, 1),
            (LineString, 2),
            (Polygon, 3),
            (MultiPoint, 4),
            (MultiLineString, 5),
            (MultiPolygon, 6),
            (GeometryCollection, 7)
        )]
        geometry_type_and_id: (GeometryTypeId, u32),
    ) {
        let (geometry_type, wkb_id) = geometry_type_and_id;
        assert_eq!(geometry_type.wkb_id(), wkb_id);
        assert_eq!(GeometryTypeId::try_from_wkb_id(wkb_id), Some(geometry_type));
    }

    #[rstest]
    fn geometry_type_str_roundtrip(
        #[values(
            (Point, "Point"),
            (LineString, "LineString"),
            (Polygon, "Polygon"),
            (MultiPoint, "MultiPoint"),
            (MultiLineString, "MultiLineString"),
            (MultiPolygon, "MultiPolygon"),
            (GeometryCollection, "GeometryCollection")
        )]
        geometry_type_and_str: (GeometryTypeId, &str),
    ) {
        let (geometry_type, string) = geometry_type_and_str;
        assert_eq!(geometry_type.geojson_id(), string);
        assert_eq!(geometry_type.to_string(), string);
        assert_eq!(GeometryTypeId::from_str(string).unwrap(), geometry_type);
        assert_eq!(
            GeometryTypeId::from_str(&string.to_uppercase()).unwrap(),
            geometry_type
        );
    }

    #[test]
    fn geometry_type_invalid() {
        assert_eq!(GeometryTypeId::try_from_wkb_id(0), None);
        assert_eq!(GeometryTypeId::try_from_wkb_id(8), None);
        assert_eq!(GeometryTypeId::try_from_wkb_id(99), None);

        let err = GeometryTypeId::from_str("gazornenplat").unwrap_err();
        assert!(matches!(err, SedonaWkbError::Invalid(_)));
        assert_eq!(
            err.to_string(),
            "Invalid geometry type string: 'gazornenplat'"
        );
    }
}
