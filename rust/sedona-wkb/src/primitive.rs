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
use serde::{Deserialize, Serialize};

use crate::cursor::{ByteCursor, ByteCursorMut};
use crate::error::SedonaWkbError;

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
const EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;
const EXPONENT_SHIFT: u32 = 52;
const EXPONENT_SPECIAL: u64 = 0x7FF;

/// Byte order of the multi-byte fields following a WKB order flag
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Order flag 0 (XDR)
    BigEndian,
    /// Order flag 1 (NDR)
    #[default]
    LittleEndian,
}

impl ByteOrder {
    /// Parse a WKB order flag byte
    pub fn try_from_wkb_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::BigEndian),
            1 => Some(Self::LittleEndian),
            _ => None,
        }
    }

    /// The WKB order flag byte for this byte order
    pub fn wkb_byte(&self) -> u8 {
        match self {
            Self::BigEndian => 0,
            Self::LittleEndian => 1,
        }
    }

    /// Rearrange bytes read from (or about to be written to) the stream so
    /// that index 0 holds the most significant byte
    fn reorder<const N: usize>(&self, mut bytes: [u8; N]) -> [u8; N] {
        if *self == Self::LittleEndian {
            bytes.reverse();
        }
        bytes
    }
}

pub fn read_u8(cursor: &mut ByteCursor) -> Result<u8, SedonaWkbError> {
    let [value] = cursor.advance_array::<1>()?;
    Ok(value)
}

pub fn read_u32(cursor: &mut ByteCursor, order: ByteOrder) -> Result<u32, SedonaWkbError> {
    let bytes = cursor.advance_array::<4>()?;
    Ok(u32::from_be_bytes(order.reorder(bytes)))
}

/// Read an IEEE-754 binary64 value
///
/// A zero exponent field decodes as `0.0` and an all-ones exponent field
/// decodes as an infinity with the stored sign; NaN payloads are not
/// reproduced.
pub fn read_f64(cursor: &mut ByteCursor, order: ByteOrder) -> Result<f64, SedonaWkbError> {
    let bytes = cursor.advance_array::<8>()?;
    Ok(decode_f64_bits(u64::from_be_bytes(order.reorder(bytes))))
}

pub fn write_u8(cursor: &mut ByteCursorMut, value: u8) -> Result<(), SedonaWkbError> {
    cursor.advance(&[value])
}

pub fn write_u32(
    cursor: &mut ByteCursorMut,
    value: u32,
    order: ByteOrder,
) -> Result<(), SedonaWkbError> {
    cursor.advance(&order.reorder(value.to_be_bytes()))
}

pub fn write_f64(
    cursor: &mut ByteCursorMut,
    value: f64,
    order: ByteOrder,
) -> Result<(), SedonaWkbError> {
    cursor.advance(&order.reorder(value.to_bits().to_be_bytes()))
}

fn decode_f64_bits(bits: u64) -> f64 {
    let negative = bits & SIGN_MASK != 0;
    let exponent = (bits & EXPONENT_MASK) >> EXPONENT_SHIFT;

    match exponent {
        0 => 0.0,
        EXPONENT_SPECIAL if negative => f64::NEG_INFINITY,
        EXPONENT_SPECIAL => f64::INFINITY,
        // (-1)^sign * 1.mantissa * 2^(exponent - 1023) is exactly the
        // normal binary64 interpretation of these bits
        _ => f64::from_bits(bits),
    }
}
