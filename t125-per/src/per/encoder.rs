//! PER encoder for T.125 MCS primitive values
//!
//! # Usage Example
//!
//! ```rust
//! use t125_per::per::PerEncoder;
//!
//! let mut encoder = PerEncoder::new();
//! encoder.encode_integer(1000)?;
//! encoder.encode_octet_stream(b"Duca", 4)?;
//! assert_eq!(encoder.as_bytes(), &[0x02, 0x03, 0xE8, 0x00, b'D', b'u', b'c', b'a']);
//! # Ok::<(), t125_core::McsError>(())
//! ```

use crate::per::types::{IntegerWidth, PerLength};
use bytes::Bytes;
use std::io::Write;
use t125_core::{McsResult, ObjectIdentifier};

/// PER encoder writing into any byte sink
///
/// The encoder holds no state besides its sink, so independent encoders can
/// run on different threads freely. With the default `Vec<u8>` sink the
/// encoded bytes are collected in memory.
#[derive(Debug, Default)]
pub struct PerEncoder<W = Vec<u8>> {
    writer: W,
}

impl PerEncoder<Vec<u8>> {
    /// Create a new encoder over an in-memory buffer
    pub fn new() -> Self {
        Self { writer: Vec::new() }
    }

    /// Create a new encoder with initial buffer capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            writer: Vec::with_capacity(capacity),
        }
    }

    /// Get the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer
    }

    /// Get the encoded bytes as a shared `Bytes` handle
    pub fn freeze(self) -> Bytes {
        Bytes::from(self.writer)
    }

    /// Get a reference to the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.writer
    }

    /// Clear the encoder buffer
    pub fn clear(&mut self) {
        self.writer.clear();
    }
}

impl<W: Write> PerEncoder<W> {
    /// Create an encoder over a caller-owned sink
    pub fn from_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the underlying sink
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the encoder, returning the sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_u8(&mut self, value: u8) -> McsResult<()> {
        self.writer.write_all(&[value])?;
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> McsResult<()> {
        self.writer.write_all(bytes)?;
        Ok(())
    }

    /// Encode a length field
    ///
    /// Values up to 0x7F take one byte, larger values two bytes with the top
    /// bit set. Values above 0x7FFF are rejected.
    pub fn encode_length(&mut self, length: usize) -> McsResult<()> {
        let length = PerLength::new(length)?;
        self.write_bytes(&length.encode())
    }

    /// Encode a constrained integer
    ///
    /// # Encoding Format
    /// Length (1, 2 or 4) followed by the value, big-endian, in the
    /// narrowest width class that holds it.
    pub fn encode_integer(&mut self, value: u32) -> McsResult<()> {
        let width = IntegerWidth::for_value(value);
        self.encode_length(width.bytes())?;
        match width {
            IntegerWidth::One => self.write_u8(value as u8),
            IntegerWidth::Two => self.write_bytes(&(value as u16).to_be_bytes()),
            IntegerWidth::Four => self.write_bytes(&value.to_be_bytes()),
        }
    }

    /// Encode a raw 16-bit integer (big-endian, no length prefix)
    pub fn encode_integer16(&mut self, value: u16) -> McsResult<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Encode a CHOICE index
    pub fn encode_choice(&mut self, choice: u8) -> McsResult<()> {
        self.write_u8(choice)
    }

    /// Encode a selection bitmap byte
    pub fn encode_selection(&mut self, selection: u8) -> McsResult<()> {
        self.write_u8(selection)
    }

    /// Encode an ENUMERATED value
    pub fn encode_enumerated(&mut self, value: u8) -> McsResult<()> {
        self.write_u8(value)
    }

    /// Encode a SET OF element count
    pub fn encode_number_of_set(&mut self, count: u8) -> McsResult<()> {
        self.write_u8(count)
    }

    /// Write `count` zero bytes
    pub fn encode_padding(&mut self, count: usize) -> McsResult<()> {
        for _ in 0..count {
            self.write_u8(0)?;
        }
        Ok(())
    }

    /// Encode an OBJECT IDENTIFIER
    ///
    /// # Encoding Format
    /// - Length: always 5
    /// - First byte: `(oid[0] << 4) & (oid[1] & 0x0F)`
    /// - Remaining four components as raw bytes
    ///
    /// The first byte combines the nibbles with AND rather than OR. Deployed
    /// peers produce and accept exactly this byte, so it is kept as is.
    pub fn encode_object_identifier(&mut self, oid: &ObjectIdentifier) -> McsResult<()> {
        let oid = oid.as_bytes();
        self.write_u8(5)?;
        self.write_u8((oid[0] << 4) & (oid[1] & 0x0F))?;
        self.write_bytes(&oid[2..])
    }

    /// Encode a NumericString
    ///
    /// # Arguments
    /// * `value` - ASCII decimal digits
    /// * `min_length` - Lower bound of the string size constraint
    ///
    /// # Encoding Format
    /// Length of the excess over `min_length`, then the digits packed two
    /// per byte (high nibble first). An odd trailing digit is paired with '0'.
    pub fn encode_numeric_string(&mut self, value: &str, min_length: usize) -> McsResult<()> {
        let packed: Vec<u8> = value
            .as_bytes()
            .chunks(2)
            .map(|pair| {
                let high = fold_digit(pair[0]);
                let low = fold_digit(pair.get(1).copied().unwrap_or(b'0'));
                ((high << 4) | low) as u8
            })
            .collect();

        self.encode_length(delta_length(value.len(), min_length))?;
        self.write_bytes(&packed)
    }

    /// Encode an OCTET STRING with a size constraint
    ///
    /// # Encoding Format
    /// Length of the excess over `min_length`, then every byte of `value`
    /// unchanged. Only the declared length is reduced; both ends know the
    /// minimum, so the full string still goes on the wire.
    pub fn encode_octet_stream(&mut self, value: &[u8], min_length: usize) -> McsResult<()> {
        self.encode_length(delta_length(value.len(), min_length))?;
        self.write_bytes(value)
    }
}

/// Length field for a size-constrained string
///
/// A string shorter than its minimum declares the minimum itself rather
/// than zero. Existing peers emit the same value, so it is not corrected.
fn delta_length(length: usize, min_length: usize) -> usize {
    if length >= min_length {
        length - min_length
    } else {
        min_length
    }
}

/// Reduce an ASCII character to a decimal digit, wrapping like `(c - '0') % 10`
fn fold_digit(c: u8) -> i32 {
    (c as i32 - b'0' as i32) % 10
}
