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
//! Public read/write entry points
//!
//! Every call builds its own cursor and byte order state, so calls are
//! independent of one another and may run concurrently.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

use crate::error::SedonaWkbError;
use crate::geometry::Geometry;
use crate::primitive::ByteOrder;
use crate::reader::WkbReader;
use crate::writer::{wkb_size, WkbWriter};

/// Default limit on how deeply geometries may nest inside collections
pub const DEFAULT_MAX_DEPTH: usize = 128;

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Options for decoding WKB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Maximum nesting depth; the top-level geometry has depth 0
    pub max_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Options for encoding WKB
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Byte order used for every header and field of the output
    pub byte_order: ByteOrder,
}

/// Input accepted by [read]: raw WKB bytes or Base64 encoded WKB text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WkbInput<'a> {
    Bytes(&'a [u8]),
    Base64(&'a str),
}

impl<'a> WkbInput<'a> {
    /// Guess whether a buffer holds raw WKB or Base64 text
    ///
    /// Raw WKB always starts with a byte order flag (0 or 1), which can never
    /// begin Base64 text. Anything else made only of Base64 characters and
    /// ASCII whitespace is treated as text; all other input is raw WKB.
    pub fn detect(bytes: &'a [u8]) -> Self {
        match bytes.first() {
            None | Some(0) | Some(1) => Self::Bytes(bytes),
            Some(_) if bytes.iter().all(|b| is_base64_text_byte(*b)) => {
                match std::str::from_utf8(bytes) {
                    Ok(text) => Self::Base64(text),
                    Err(_) => Self::Bytes(bytes),
                }
            }
            Some(_) => Self::Bytes(bytes),
        }
    }
}

fn is_base64_text_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=') || b.is_ascii_whitespace()
}

impl<'a> From<&'a [u8]> for WkbInput<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for WkbInput<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for WkbInput<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a str> for WkbInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Base64(value)
    }
}

impl<'a> From<&'a String> for WkbInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Base64(value)
    }
}

/// Decode a geometry from WKB bytes or Base64 encoded WKB text
pub fn read<'a>(input: impl Into<WkbInput<'a>>) -> Result<Geometry, SedonaWkbError> {
    read_with_options(input, &ReadOptions::default())
}

/// Decode a geometry with explicit [ReadOptions]
///
/// Bytes following the first complete geometry are ignored.
pub fn read_with_options<'a>(
    input: impl Into<WkbInput<'a>>,
    options: &ReadOptions,
) -> Result<Geometry, SedonaWkbError> {
    let input: WkbInput<'a> = input.into();
    match input {
        WkbInput::Bytes(bytes) => read_wkb(bytes, options),
        WkbInput::Base64(text) => read_wkb(&decode_base64(text)?, options),
    }
}

/// Decode the geometry at the start of `buf` and return it together with
/// the number of bytes it occupied
pub fn read_wkb_prefix(
    buf: &[u8],
    options: &ReadOptions,
) -> Result<(Geometry, usize), SedonaWkbError> {
    let mut reader = WkbReader::new(buf, options.max_depth);
    let geometry = reader.read_geometry()?;
    Ok((geometry, reader.offset()))
}

fn read_wkb(buf: &[u8], options: &ReadOptions) -> Result<Geometry, SedonaWkbError> {
    let (geometry, consumed) = read_wkb_prefix(buf, options)?;

    log::debug!(
        "Decoded {} from {consumed} WKB bytes",
        geometry.geometry_type()
    );
    if consumed < buf.len() {
        log::debug!(
            "Ignoring {} trailing bytes after WKB geometry",
            buf.len() - consumed
        );
    }

    Ok(geometry)
}

/// Decode Base64 text into bytes
///
/// ASCII whitespace is ignored and trailing padding is optional.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, SedonaWkbError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(BASE64_ENGINE.decode(compact)?)
}

/// Encode a geometry as WKB using `order` for every header and field
pub fn write(geometry: &Geometry, order: ByteOrder) -> Result<Vec<u8>, SedonaWkbError> {
    write_with_options(geometry, &WriteOptions { byte_order: order })
}

/// Encode a geometry as WKB with explicit [WriteOptions]
pub fn write_with_options(
    geometry: &Geometry,
    options: &WriteOptions,
) -> Result<Vec<u8>, SedonaWkbError> {
    let mut out_wkb = vec![0u8; wkb_size(geometry)];
    write_into(geometry, options, &mut out_wkb)?;
    Ok(out_wkb)
}

/// Encode a geometry into a caller-provided buffer
///
/// Returns the number of bytes written. Fails with
/// [SedonaWkbError::OutOfRange] if `buf` is smaller than [wkb_size].
pub fn write_into(
    geometry: &Geometry,
    options: &WriteOptions,
    buf: &mut [u8],
) -> Result<usize, SedonaWkbError> {
    let mut writer = WkbWriter::new(buf, options.byte_order);
    writer.write_geometry(geometry)?;

    log::debug!(
        "Encoded {} as {} WKB bytes ({:?})",
        geometry.geometry_type(),
        writer.offset(),
        options.byte_order
    );

    Ok(writer.offset())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{LineString, Point};

    // Big endian POINT (1 1)
    const POINT_BE: [u8; 21] = [
        0x00, 0x00, 0x00, 0x00, 0x01, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xF0,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn read_write_point() {
        let point = Geometry::Point(Point::new(1.0, 1.0));
        assert_eq!(read(&POINT_BE).unwrap(), point);
        assert_eq!(write(&point, ByteOrder::BigEndian).unwrap(), POINT_BE);
    }

    #[test]
    fn read_base64() {
        // Base64 of POINT_BE
        let text = "AAAAAAE/8AAAAAAAAD/wAAAAAAAA";
        assert_eq!(read(text).unwrap(), Geometry::Point(Point::new(1.0, 1.0)));
        assert_eq!(read(&text.to_string()).unwrap(), read(&POINT_BE).unwrap());

        // Whitespace and missing padding are tolerated
        assert_eq!(
            read("AAAAAAE/8AAA\nAAAAAD/wAAAAAAAA").unwrap(),
            Geometry::Point(Point::new(1.0, 1.0))
        );
        let linestring = Geometry::LineString(LineString::new(vec![(1.0, 2.0)]));
        assert_eq!(read("AQIAAAABAAAAAAAAAAAA8D8AAAAAAAAAQA==").unwrap(), linestring);
        assert_eq!(read("AQIAAAABAAAAAAAAAAAA8D8AAAAAAAAAQA").unwrap(), linestring);

        let err = read("not*base64").unwrap_err();
        assert!(matches!(err, SedonaWkbError::Base64(_)));
    }

    #[test]
    fn detect_input() {
        assert_eq!(WkbInput::detect(&POINT_BE), WkbInput::Bytes(&POINT_BE));
        assert_eq!(WkbInput::detect(b""), WkbInput::Bytes(b""));
        assert_eq!(
            WkbInput::detect(b"AAAAAAE/8AAAAAAAAD/wAAAAAAAA"),
            WkbInput::Base64("AAAAAAE/8AAAAAAAAD/wAAAAAAAA")
        );
        assert_eq!(WkbInput::detect(&[0xFF, 0xFE]), WkbInput::Bytes(&[0xFF, 0xFE]));
        assert_eq!(
            WkbInput::detect(b"AAAAAAE/8AAA\nAAAAAD/wAAAAAAAA\n"),
            WkbInput::Base64("AAAAAAE/8AAA\nAAAAAD/wAAAAAAAA\n")
        );
    }

    #[test]
    fn detect_bad_byte_order_as_bytes() {
        // Valid UTF-8 with control bytes is raw WKB, so the order flag is
        // what gets reported
        let buf = [0x02, 0x01, 0x00, 0x00, 0x00];
        assert_eq!(WkbInput::detect(&buf), WkbInput::Bytes(&buf));

        let err = read(WkbInput::detect(&buf)).unwrap_err();
        assert!(matches!(
            err,
            SedonaWkbError::InvalidByteOrder {
                value: 2,
                offset: 0
            }
        ));
    }

    #[test]
    fn read_prefix() {
        let mut buf = POINT_BE.to_vec();
        buf.extend(write(&Point::new(2.0, 3.0).into(), ByteOrder::LittleEndian).unwrap());

        let (first, consumed) = read_wkb_prefix(&buf, &ReadOptions::default()).unwrap();
        assert_eq!(first, Geometry::Point(Point::new(1.0, 1.0)));
        assert_eq!(consumed, 21);

        // Trailing bytes are ignored by read()
        assert_eq!(read(&buf).unwrap(), first);

        let (second, consumed) =
            read_wkb_prefix(&buf[consumed..], &ReadOptions::default()).unwrap();
        assert_eq!(second, Geometry::Point(Point::new(2.0, 3.0)));
        assert_eq!(consumed, 21);
    }

    #[test]
    fn write_into_buffer() {
        let geometry: Geometry = LineString::new(vec![(0.0, 0.0), (1.0, 1.0)]).into();
        let options = WriteOptions::default();

        let mut buf = [0u8; 64];
        let written = write_into(&geometry, &options, &mut buf).unwrap();
        assert_eq!(written, 41);
        assert_eq!(&buf[..written], write_with_options(&geometry, &options).unwrap());

        let mut small = [0u8; 8];
        let err = write_into(&geometry, &options, &mut small).unwrap_err();
        assert!(matches!(err, SedonaWkbError::OutOfRange { offset: 5, .. }));
    }

    #[test]
    fn default_options() {
        assert_eq!(ReadOptions::default().max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(WriteOptions::default().byte_order, ByteOrder::LittleEndian);
    }
}
