//! PER encoding types (Length, integer width classes)

use t125_core::{McsError, McsResult};

/// Largest value a PER length field can carry (15 bits)
pub const MAX_LENGTH: usize = 0x7FFF;

/// Flag bit marking the two-byte length form
const LONG_FORM_FLAG: u16 = 0x8000;

/// PER Length
///
/// Length fields come in two forms:
/// - **Short form** (1 byte): values 0-127, bit 7 clear
/// - **Long form** (2 bytes): values 128-32767, bit 7 of the first byte set,
///   the remaining 15 bits hold the value (big-endian)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerLength {
    /// Short form: length 0-127
    Short(u8),
    /// Long form: length 128-32767
    Long(u16),
}

impl PerLength {
    /// Create a new PER length
    ///
    /// Chooses the short or long form from the value. Values above
    /// [`MAX_LENGTH`] do not fit the 15-bit field and are rejected.
    pub fn new(length: usize) -> McsResult<Self> {
        if length <= 0x7F {
            Ok(PerLength::Short(length as u8))
        } else if length <= MAX_LENGTH {
            Ok(PerLength::Long(length as u16))
        } else {
            Err(McsError::LengthOutOfRange(length))
        }
    }

    /// Get the length value
    pub fn value(&self) -> u16 {
        match self {
            PerLength::Short(l) => *l as u16,
            PerLength::Long(l) => *l,
        }
    }

    /// Check if this length uses the two-byte form
    pub fn is_long_form(&self) -> bool {
        matches!(self, PerLength::Long(_))
    }

    /// Number of bytes the encoded length occupies
    pub fn encoded_len(&self) -> usize {
        match self {
            PerLength::Short(_) => 1,
            PerLength::Long(_) => 2,
        }
    }

    /// Encode length to bytes
    pub fn encode(&self) -> Vec<u8> {
        match self {
            PerLength::Short(length) => vec![*length],
            PerLength::Long(length) => (*length | LONG_FORM_FLAG).to_be_bytes().to_vec(),
        }
    }

    /// Decode length from bytes
    ///
    /// # Returns
    /// Returns `(PerLength, bytes_consumed)`.
    ///
    /// # Short Input
    /// Decoding never fails. An empty buffer yields a zero length with
    /// nothing consumed, and a long form missing its second byte keeps only
    /// the high part. Peers rely on this leniency; truncation is caught by
    /// the fields that follow.
    pub fn decode(data: &[u8]) -> (Self, usize) {
        let Some(&first_byte) = data.first() else {
            return (PerLength::Short(0), 0);
        };

        if !Self::is_long_form_byte(first_byte) {
            return (PerLength::Short(first_byte), 1);
        }

        let second_byte = data.get(1).copied();
        let consumed = if second_byte.is_some() { 2 } else { 1 };
        (Self::from_bytes(first_byte, second_byte), consumed)
    }

    /// Whether a first length byte announces the two-byte form
    pub fn is_long_form_byte(first_byte: u8) -> bool {
        (first_byte & 0x80) != 0
    }

    /// Build a length from its first byte and, for the long form, the second
    ///
    /// The second byte is ignored for the short form. A long form missing
    /// its second byte keeps only the high part.
    pub fn from_bytes(first_byte: u8, second_byte: Option<u8>) -> Self {
        if !Self::is_long_form_byte(first_byte) {
            return PerLength::Short(first_byte);
        }

        let high = ((first_byte & 0x7F) as u16) << 8;
        PerLength::Long(high + second_byte.unwrap_or(0) as u16)
    }
}

/// Width class of a constrained integer
///
/// The encoder always picks the narrowest class that holds the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerWidth {
    /// 1 byte, values up to 0xFF
    One = 1,
    /// 2 bytes, values up to 0xFFFF
    Two = 2,
    /// 4 bytes, everything else
    Four = 4,
}

impl IntegerWidth {
    /// Select the narrowest width class for `value`
    pub fn for_value(value: u32) -> Self {
        if value <= 0xFF {
            IntegerWidth::One
        } else if value <= 0xFFFF {
            IntegerWidth::Two
        } else {
            IntegerWidth::Four
        }
    }

    /// Map a decoded length onto a width class
    ///
    /// Returns `None` for anything other than 1, 2 or 4.
    pub fn from_length(length: u16) -> Option<Self> {
        match length {
            1 => Some(IntegerWidth::One),
            2 => Some(IntegerWidth::Two),
            4 => Some(IntegerWidth::Four),
            _ => None,
        }
    }

    /// Number of value bytes
    pub fn bytes(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_length_short_boundary() {
        let length = PerLength::new(0x7F).unwrap();
        assert!(!length.is_long_form());
        assert_eq!(length.encode(), vec![0x7F]);
    }

    #[test]
    fn test_per_length_long_boundary() {
        let length = PerLength::new(0x80).unwrap();
        assert!(length.is_long_form());
        assert_eq!(length.encoded_len(), 2);
        assert_eq!(length.encode(), vec![0x80, 0x80]);
    }

    #[test]
    fn test_per_length_max() {
        let length = PerLength::new(MAX_LENGTH).unwrap();
        assert_eq!(length.encode(), vec![0xFF, 0xFF]);
        assert!(matches!(
            PerLength::new(MAX_LENGTH + 1),
            Err(McsError::LengthOutOfRange(0x8000))
        ));
    }

    #[test]
    fn test_per_length_decode() {
        assert_eq!(PerLength::decode(&[0x05, 0xAA]), (PerLength::Short(5), 1));
        assert_eq!(PerLength::decode(&[0x81, 0x2C]), (PerLength::Long(300), 2));
    }

    #[test]
    fn test_per_length_decode_short_input_is_lenient() {
        assert_eq!(PerLength::decode(&[]), (PerLength::Short(0), 0));
        assert_eq!(PerLength::decode(&[0x81]), (PerLength::Long(0x100), 1));
    }

    #[test]
    fn test_per_length_from_bytes() {
        assert_eq!(PerLength::from_bytes(0x05, Some(0xAA)), PerLength::Short(5));
        assert_eq!(PerLength::from_bytes(0xFF, Some(0xFF)).value(), 0x7FFF);
        assert_eq!(PerLength::from_bytes(0x81, None).value(), 0x100);
        assert!(PerLength::is_long_form_byte(0x80));
        assert!(!PerLength::is_long_form_byte(0x7F));
    }

    #[test]
    fn test_integer_width_selection() {
        assert_eq!(IntegerWidth::for_value(0xFF), IntegerWidth::One);
        assert_eq!(IntegerWidth::for_value(0x100), IntegerWidth::Two);
        assert_eq!(IntegerWidth::for_value(0xFFFF), IntegerWidth::Two);
        assert_eq!(IntegerWidth::for_value(0x10000), IntegerWidth::Four);
        assert_eq!(IntegerWidth::from_length(3), None);
        assert_eq!(IntegerWidth::Four.bytes(), 4);
    }
}
