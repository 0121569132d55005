use thiserror::Error;

/// Classifies UTF-8 decoding failures for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Leading byte matches none of the four UTF-8 length classes
    InvalidLeadByte(u8),
    /// Leading byte declares more bytes than remain in the input
    Truncated { expected: usize, available: usize },
}

/// Dictionary trie error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("Decode error at byte {offset}: {}", describe_decode(.kind))]
    Decode { kind: DecodeErrorKind, offset: usize },

    #[error("Encode error: codepoint U+{codepoint:X} at index {index} is not representable")]
    Encode { codepoint: u32, index: usize },

    #[error("Codepoint U+{codepoint:X} at index {index} is not a Unicode scalar value")]
    NotScalar { codepoint: u32, index: usize },
}

impl TrieError {
    /// Returns true for malformed UTF-8 input.
    pub fn is_decode(&self) -> bool {
        matches!(self, TrieError::Decode { .. })
    }

    /// Returns true for a codepoint beyond the four-byte UTF-8 layout.
    pub fn is_encode(&self) -> bool {
        matches!(self, TrieError::Encode { .. })
    }

    /// Returns true for a surrogate or a value above U+10FFFF that could not
    /// become a `char`.
    pub fn is_not_scalar(&self) -> bool {
        matches!(self, TrieError::NotScalar { .. })
    }
}

fn describe_decode(kind: &DecodeErrorKind) -> String {
    match kind {
        DecodeErrorKind::InvalidLeadByte(b) => format!("invalid leading byte 0x{b:02X}"),
        DecodeErrorKind::Truncated {
            expected,
            available,
        } => format!("sequence needs {expected} bytes, only {available} remain"),
    }
}

pub type Result<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_kind_is_matchable() {
        let err = TrieError::Decode {
            kind: DecodeErrorKind::Truncated {
                expected: 3,
                available: 1,
            },
            offset: 0,
        };
        match &err {
            TrieError::Decode { kind, offset } => {
                assert!(matches!(kind, DecodeErrorKind::Truncated { expected: 3, .. }));
                assert_eq!(*offset, 0);
            }
            _ => panic!("expected Decode"),
        }
        assert!(err.is_decode());
        assert!(!err.is_encode());
    }

    #[test]
    fn test_decode_error_display_includes_lead_byte() {
        let err = TrieError::Decode {
            kind: DecodeErrorKind::InvalidLeadByte(0xFF),
            offset: 4,
        };
        let display = format!("{}", err);
        assert!(display.contains("0xFF"), "got: {}", display);
        assert!(display.contains("byte 4"), "got: {}", display);
    }

    #[test]
    fn test_encode_error_display_includes_codepoint() {
        let err = TrieError::Encode {
            codepoint: 0x200000,
            index: 2,
        };
        assert!(err.is_encode());
        let display = format!("{}", err);
        assert!(display.contains("U+200000"), "got: {}", display);
    }

    #[test]
    fn test_not_scalar_is_distinct_from_encode() {
        let err = TrieError::NotScalar {
            codepoint: 0xD800,
            index: 0,
        };
        assert!(err.is_not_scalar());
        assert!(!err.is_encode());
        let display = format!("{}", err);
        assert!(display.contains("U+D800"), "got: {}", display);
    }
}
