//! Well-known values used by the T.124 / T.125 connect sequence

use t125_core::ObjectIdentifier;

/// Minimum size of a SimpleNumericString
pub const MIN_SIMPLE_NUMERIC_STRING_LEN: usize = 1;

/// Minimum size of an H.221 non-standard identifier
pub const MIN_H221_NON_STANDARD_IDENTIFIER_LEN: usize = 4;

/// T.124 (02/98) object identifier: itu-t recommendation t 124 version 0 1
pub const T124_02_98_OID: ObjectIdentifier = ObjectIdentifier::new([0, 0, 20, 124, 0, 1]);

/// H.221 key carried in client-to-server user data
pub const H221_CS_KEY: &[u8; 4] = b"Duca";

/// H.221 key carried in server-to-client user data
pub const H221_SC_KEY: &[u8; 4] = b"McDn";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::per::{PerDecoder, PerEncoder};

    #[test]
    fn test_h221_keys_fit_their_minimum() {
        let mut encoder = PerEncoder::new();
        encoder
            .encode_octet_stream(H221_SC_KEY, MIN_H221_NON_STANDARD_IDENTIFIER_LEN)
            .unwrap();
        // Excess over the minimum is zero
        assert_eq!(encoder.as_bytes(), &[0x00, b'M', b'c', b'D', b'n']);

        let encoded = encoder.into_bytes();
        let mut decoder = PerDecoder::new(&encoded[..]);
        assert!(decoder.match_octet_stream(H221_SC_KEY, MIN_H221_NON_STANDARD_IDENTIFIER_LEN));

        let mut decoder = PerDecoder::new(&encoded[..]);
        assert!(!decoder.match_octet_stream(H221_CS_KEY, MIN_H221_NON_STANDARD_IDENTIFIER_LEN));
    }

    #[test]
    fn test_simple_numeric_string_minimum() {
        let mut encoder = PerEncoder::new();
        encoder
            .encode_numeric_string("1", MIN_SIMPLE_NUMERIC_STRING_LEN)
            .unwrap();
        assert_eq!(encoder.as_bytes(), &[0x00, 0x10]);
    }

    #[test]
    fn test_t124_oid_survives_and_packing() {
        // Both leading components are zero, so the AND packing is lossless
        let mut encoder = PerEncoder::new();
        encoder.encode_object_identifier(&T124_02_98_OID).unwrap();
        let encoded = encoder.into_bytes();

        let mut decoder = PerDecoder::new(&encoded[..]);
        decoder.expect_object_identifier(&T124_02_98_OID).unwrap();
    }
}
