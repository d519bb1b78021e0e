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

//! Execution functions

use base64::{engine::general_purpose::STANDARD, Engine};
use clap::ValueEnum;
use sedona_wkb::{read_with_options, write, ByteOrder, Geometry, ReadOptions, WkbInput};

use crate::print_format::PrintFormat;
use crate::CliError;

/// Byte order requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ByteOrderArg {
    Big,
    Little,
}

impl From<ByteOrderArg> for ByteOrder {
    fn from(value: ByteOrderArg) -> Self {
        match value {
            ByteOrderArg::Big => ByteOrder::BigEndian,
            ByteOrderArg::Little => ByteOrder::LittleEndian,
        }
    }
}

/// Encoding of the bytes produced by `encode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputEncoding {
    Base64,
    Raw,
}

/// Decode raw WKB or Base64 text and render it with `format`
pub fn exec_decode(
    input: &[u8],
    options: &ReadOptions,
    format: PrintFormat,
) -> Result<String, CliError> {
    let input = WkbInput::detect(input);
    if let WkbInput::Base64(_) = input {
        log::debug!("Input detected as Base64 text");
    }

    let geometry = read_with_options(input, options)?;
    format.format(&geometry)
}

/// Encode a JSON geometry as WKB
pub fn exec_encode(
    json: &str,
    order: ByteOrder,
    encoding: OutputEncoding,
) -> Result<Vec<u8>, CliError> {
    let geometry: Geometry = serde_json::from_str(json)?;
    let wkb = write(&geometry, order)?;

    let out = match encoding {
        OutputEncoding::Base64 => STANDARD.encode(&wkb).into_bytes(),
        OutputEncoding::Raw => wkb,
    };

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const POINT_JSON: &str = r#"{"Point":{"x":1.0,"y":1.0}}"#;

    #[test]
    fn encode_base64() {
        let out = exec_encode(POINT_JSON, ByteOrder::BigEndian, OutputEncoding::Base64).unwrap();
        assert_eq!(out, b"AAAAAAE/8AAAAAAAAD/wAAAAAAAA");
    }

    #[rstest]
    fn encode_decode(#[values(ByteOrderArg::Big, ByteOrderArg::Little)] order: ByteOrderArg) {
        for encoding in [OutputEncoding::Base64, OutputEncoding::Raw] {
            let out = exec_encode(POINT_JSON, order.into(), encoding).unwrap();
            let decoded = exec_decode(&out, &ReadOptions::default(), PrintFormat::Json).unwrap();
            assert_eq!(decoded, POINT_JSON);
        }
    }

    #[test]
    fn decode_errors() {
        let err = exec_decode(b"", &ReadOptions::default(), PrintFormat::Json).unwrap_err();
        assert!(matches!(err, CliError::Wkb(_)));

        let err = exec_encode("{}", ByteOrder::LittleEndian, OutputEncoding::Raw).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
