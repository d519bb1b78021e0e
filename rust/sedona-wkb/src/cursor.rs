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
//! Byte cursors used by the WKB reader and writer
//!
//! A cursor only ever moves forward. Each call to `advance` either consumes
//! exactly the requested number of bytes or fails without moving.

use crate::error::SedonaWkbError;

/// Read cursor over a borrowed byte buffer
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Zero-based position of the next byte to be read
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes not yet consumed
    pub fn peek_remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Consume `n` bytes and return them
    pub fn advance(&mut self, n: usize) -> Result<&'a [u8], SedonaWkbError> {
        let remaining = self.peek_remaining();
        if n > remaining {
            return Err(SedonaWkbError::OutOfRange {
                offset: self.offset,
                requested: n,
                remaining,
            });
        }

        let buf: &'a [u8] = self.buf;
        let out = &buf[self.offset..self.offset + n];
        self.offset += n;
        Ok(out)
    }

    /// Consume exactly `N` bytes into an array
    pub fn advance_array<const N: usize>(&mut self) -> Result<[u8; N], SedonaWkbError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.advance(N)?);
        Ok(out)
    }
}

/// Write cursor over a borrowed, fixed-size byte buffer
#[derive(Debug)]
pub struct ByteCursorMut<'a> {
    buf: &'a mut [u8],
    offset: usize,
}

impl<'a> ByteCursorMut<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Number of bytes written so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes that can still be written
    pub fn peek_remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Write all of `bytes` at the current position
    pub fn advance(&mut self, bytes: &[u8]) -> Result<(), SedonaWkbError> {
        let remaining = self.peek_remaining();
        if bytes.len() > remaining {
            return Err(SedonaWkbError::OutOfRange {
                offset: self.offset,
                requested: bytes.len(),
                remaining,
            });
        }

        self.buf[self.offset..self.offset + bytes.len()].copy_from_slice(bytes);
        self.offset += bytes.len();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_cursor() {
        let buf = [1u8, 2, 3, 4, 5];
        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(cursor.peek_remaining(), 5);

        assert_eq!(cursor.advance(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.advance_array::<2>().unwrap(), [3, 4]);
        assert_eq!(cursor.peek_remaining(), 1);

        // A failed advance does not move the cursor
        let err = cursor.advance(2).unwrap_err();
        assert!(matches!(
            err,
            SedonaWkbError::OutOfRange {
                offset: 4,
                requested: 2,
                remaining: 1
            }
        ));
        assert_eq!(cursor.offset(), 4);

        assert_eq!(cursor.advance(1).unwrap(), &[5]);
        assert_eq!(cursor.advance(0).unwrap(), &[] as &[u8]);
        assert!(cursor.advance(1).is_err());
    }

    #[test]
    fn write_cursor() {
        let mut buf = [0u8; 4];
        let mut cursor = ByteCursorMut::new(&mut buf);
        cursor.advance(&[9, 8, 7]).unwrap();
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.peek_remaining(), 1);

        let err = cursor.advance(&[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            SedonaWkbError::OutOfRange {
                offset: 3,
                requested: 2,
                remaining: 1
            }
        ));
        assert_eq!(cursor.offset(), 3);

        cursor.advance(&[6]).unwrap();
        assert_eq!(buf, [9, 8, 7, 6]);
    }
}
