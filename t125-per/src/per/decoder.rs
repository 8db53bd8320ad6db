//! PER decoder for T.125 MCS primitive values
//!
//! # Usage Example
//!
//! ```rust
//! use t125_per::per::PerDecoder;
//!
//! let data = [0x02, 0x03, 0xE8, 0x00, b'D', b'u', b'c', b'a'];
//! let mut decoder = PerDecoder::new(&data[..]);
//! assert_eq!(decoder.decode_integer(), 1000);
//! assert!(decoder.match_octet_stream(b"Duca", 4));
//! ```
//!
//! # Failure Handling
//!
//! Decoding operations report problems in three distinct ways, and callers
//! depend on the difference:
//! - **Lenient**: `decode_length`, `decode_integer`, `decode_choice` and
//!   `decode_number_of_set` return zero on short input or an unexpected
//!   width, tracing the anomaly to the diagnostic sink.
//! - **Recoverable**: string, padding, enumeration and selection decoders
//!   return `Err` and leave the decision to the caller.
//! - **Fatal**: `read_and_expect_byte` and the `expect_*` assertions return
//!   errors for which [`McsError::is_fatal`] is true; the enclosing message
//!   must be abandoned.

use bytes::{Buf, Bytes};
use std::io::{ErrorKind, Read};
use std::sync::Arc;
use t125_core::{DiagnosticSink, McsError, McsResult, NoopSink, ObjectIdentifier};

use crate::per::types::{IntegerWidth, PerLength};

/// PER decoder reading from any byte source
///
/// The decoder keeps no state besides the source and the diagnostic sink.
/// Each decoder owns its source, so decoders for independent streams can
/// run concurrently.
pub struct PerDecoder<R> {
    reader: R,
    sink: Arc<dyn DiagnosticSink>,
}

impl PerDecoder<bytes::buf::Reader<Bytes>> {
    /// Create a decoder over a shared `Bytes` buffer
    pub fn from_bytes(bytes: Bytes) -> Self {
        Self::new(bytes.reader())
    }
}

impl<R: Read> PerDecoder<R> {
    /// Create a new decoder with a no-op diagnostic sink
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            sink: Arc::new(NoopSink),
        }
    }

    /// Replace the diagnostic sink
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Get a reference to the underlying source
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Get a mutable reference to the underlying source
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Unwrap the decoder, returning the source
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_u8(&mut self) -> std::io::Result<u8> {
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_array<const N: usize>(&mut self) -> std::io::Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Read exactly `count` bytes, mapping a short read to `TruncatedStream`
    fn read_field(&mut self, count: usize, field: &'static str) -> McsResult<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.reader.read_exact(&mut buf).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => McsError::TruncatedStream {
                field,
                expected: count,
            },
            _ => McsError::Io(e),
        })?;
        Ok(buf)
    }

    /// Decode a length field
    ///
    /// Never fails: if the first byte cannot be read the length is zero,
    /// and a missing second byte of the long form contributes zero. Peers
    /// depend on this; truncation surfaces in the fields that follow.
    pub fn decode_length(&mut self) -> u16 {
        let first_byte = match self.read_u8() {
            Ok(byte) => byte,
            Err(e) => {
                self.sink
                    .trace(format_args!("decode_length: no length byte ({})", e));
                return 0;
            }
        };

        let second_byte = if PerLength::is_long_form_byte(first_byte) {
            self.read_u8().ok()
        } else {
            None
        };
        PerLength::from_bytes(first_byte, second_byte).value()
    }

    /// Decode a constrained integer
    ///
    /// # Returns
    /// The value zero-extended to `u32`. A length other than 1, 2 or 4 is
    /// traced and yields 0, as does a value cut short by the stream.
    pub fn decode_integer(&mut self) -> u32 {
        let length = self.decode_length();
        let Some(width) = IntegerWidth::from_length(length) else {
            self.sink
                .trace(format_args!("decode_integer: unexpected length {}", length));
            return 0;
        };

        let value = match width {
            IntegerWidth::One => self.read_u8().map(u32::from),
            IntegerWidth::Two => self.read_array::<2>().map(|b| u16::from_be_bytes(b) as u32),
            IntegerWidth::Four => self.read_array::<4>().map(u32::from_be_bytes),
        };

        value.unwrap_or_else(|e| {
            self.sink.trace(format_args!(
                "decode_integer: truncated {}-byte value ({})",
                width.bytes(),
                e
            ));
            0
        })
    }

    /// Decode a raw 16-bit integer (big-endian, no length prefix)
    pub fn decode_integer16(&mut self) -> McsResult<u16> {
        let bytes = self.read_field(2, "integer16")?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Decode a CHOICE index, 0 if the stream is exhausted
    pub fn decode_choice(&mut self) -> u8 {
        self.read_u8().unwrap_or(0)
    }

    /// Decode a selection bitmap byte
    pub fn decode_selection(&mut self) -> McsResult<u8> {
        Ok(self.read_field(1, "selection")?[0])
    }

    /// Decode an ENUMERATED value
    pub fn decode_enumerated(&mut self) -> McsResult<u8> {
        Ok(self.read_field(1, "enumerated")?[0])
    }

    /// Decode one padding byte
    pub fn decode_padding(&mut self) -> McsResult<u8> {
        Ok(self.read_field(1, "padding")?[0])
    }

    /// Decode a SET OF element count, 0 if the stream is exhausted
    pub fn decode_number_of_set(&mut self) -> u8 {
        self.read_u8().unwrap_or(0)
    }

    /// Decode a NumericString
    ///
    /// # Arguments
    /// * `min_length` - Lower bound of the string size constraint
    ///
    /// # Returns
    /// `min_length + length` digits are declared, packed two per byte. Every
    /// byte read yields two digits, high nibble first, so a string encoded
    /// with an odd number of digits comes back with its padding '0' attached.
    pub fn decode_numeric_string(&mut self, min_length: usize) -> McsResult<String> {
        let digits = min_length + self.decode_length() as usize;
        let bytes = self.read_field(digits.div_ceil(2), "numeric string")?;

        let mut value = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            value.push((b'0' + (byte >> 4)) as char);
            value.push((b'0' + (byte & 0x0F)) as char);
        }
        Ok(value)
    }

    /// Decode an OCTET STRING with a size constraint
    ///
    /// The declared length counts only the bytes beyond `min_length`, so
    /// `min_length + length` bytes are read and returned.
    ///
    /// # Error Handling
    /// A short read is `TruncatedStream`, never an empty success.
    pub fn decode_octet_stream(&mut self, min_length: usize) -> McsResult<Vec<u8>> {
        let length = self.decode_length() as usize;
        self.read_field(min_length + length, "octet stream")
    }

    /// Check the next OBJECT IDENTIFIER against `expected`
    ///
    /// Returns false when the length is not 5 (only the length is consumed
    /// then), when the stream runs out inside the field, or when any of the
    /// six components differs. Never reads past the field.
    pub fn match_object_identifier(&mut self, expected: &ObjectIdentifier) -> bool {
        if self.decode_length() != 5 {
            return false;
        }

        let Ok(bytes) = self.read_array::<5>() else {
            return false;
        };
        let actual = [bytes[0] >> 4, bytes[0] & 0x0F, bytes[1], bytes[2], bytes[3], bytes[4]];

        actual
            .iter()
            .zip(expected.as_bytes())
            .all(|(actual, expected)| actual == expected)
    }

    /// Like [`match_object_identifier`](Self::match_object_identifier), but a
    /// mismatch is a fatal protocol violation
    pub fn expect_object_identifier(&mut self, expected: &ObjectIdentifier) -> McsResult<()> {
        if self.match_object_identifier(expected) {
            Ok(())
        } else {
            Err(McsError::ObjectIdentifierMismatch {
                expected: expected.to_string(),
            })
        }
    }

    /// Check the next OCTET STRING against `expected`
    ///
    /// The declared length plus `min_length` must equal `expected.len()`.
    /// Bytes are compared as they are read; reading stops at the first
    /// difference.
    pub fn match_octet_stream(&mut self, expected: &[u8], min_length: usize) -> bool {
        let size = self.decode_length() as usize + min_length;
        if size != expected.len() {
            return false;
        }

        for &expected_byte in expected {
            match self.read_u8() {
                Ok(byte) if byte == expected_byte => {}
                _ => return false,
            }
        }
        true
    }

    /// Like [`match_octet_stream`](Self::match_octet_stream), but a mismatch
    /// is a fatal protocol violation
    pub fn expect_octet_stream(&mut self, expected: &[u8], min_length: usize) -> McsResult<()> {
        if self.match_octet_stream(expected, min_length) {
            Ok(())
        } else {
            Err(McsError::OctetStreamMismatch {
                expected_len: expected.len(),
            })
        }
    }

    /// Read one byte that must equal `expected`
    ///
    /// # Error Handling
    /// Any other byte, or an exhausted stream, is a fatal protocol violation.
    pub fn read_and_expect_byte(&mut self, expected: u8) -> McsResult<()> {
        let actual = self
            .read_u8()
            .map_err(|_| McsError::MissingByte { expected })?;
        if actual != expected {
            return Err(McsError::UnexpectedByte { expected, actual });
        }
        Ok(())
    }
}
