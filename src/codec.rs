//! UTF-8 ⇄ codepoint transcoding.
//!
//! Decoding classifies each leading byte by its high bits (RFC 3629 layout)
//! and folds six bits per continuation byte into the codepoint. Decoding is
//! permissive: continuation markers, overlong forms and
//! surrogates are not rejected, so any byte string whose leading bytes are
//! well-formed and complete decodes. Both directions are all-or-nothing.

use crate::error::{DecodeErrorKind, Result, TrieError};
use crate::types::{Codepoint, Codepoints};

/// Largest codepoint that fits the four-byte layout.
pub const MAX_ENCODABLE: Codepoint = 0x1F_FFFF;

/// Sequence length declared by a leading byte, or `None` if it matches no class.
#[inline]
fn sequence_len(lead: u8) -> Option<usize> {
    if lead & 0x80 == 0x00 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

/// Decode the first codepoint of `bytes`.
///
/// Returns the codepoint and the number of bytes it occupies.
pub fn decode_rune(bytes: &[u8]) -> std::result::Result<(Codepoint, usize), DecodeErrorKind> {
    let Some(&lead) = bytes.first() else {
        return Err(DecodeErrorKind::Truncated {
            expected: 1,
            available: 0,
        });
    };
    let len = sequence_len(lead).ok_or(DecodeErrorKind::InvalidLeadByte(lead))?;
    if bytes.len() < len {
        return Err(DecodeErrorKind::Truncated {
            expected: len,
            available: bytes.len(),
        });
    }

    // Payload bits of the leading byte: 7, 5, 4 or 3.
    let mask: u8 = match len {
        1 => 0x7F,
        2 => 0x1F,
        3 => 0x0F,
        _ => 0x07,
    };
    let cp = bytes[1..len]
        .iter()
        .fold(Codepoint::from(lead & mask), |acc, &b| {
            (acc << 6) | Codepoint::from(b & 0x3F)
        });
    Ok((cp, len))
}

/// Decode a whole UTF-8 byte sequence into codepoints.
///
/// Fails on the first unrecognized leading byte or truncated sequence; no
/// partial output is returned.
pub fn decode(bytes: impl AsRef<[u8]>) -> Result<Codepoints> {
    let bytes = bytes.as_ref();
    let mut out = Codepoints::with_capacity(bytes.len() / 2);
    let mut pos = 0;
    while pos < bytes.len() {
        let (cp, len) =
            decode_rune(&bytes[pos..]).map_err(|kind| TrieError::Decode { kind, offset: pos })?;
        out.push(cp);
        pos += len;
    }
    Ok(out)
}

/// Append the UTF-8 bytes of one codepoint to `out`.
///
/// Returns the number of bytes written, or `None` if `cp` exceeds [`MAX_ENCODABLE`].
pub fn encode_rune(cp: Codepoint, out: &mut Vec<u8>) -> Option<usize> {
    match cp {
        0..=0x7F => {
            out.push(cp as u8);
            Some(1)
        }
        0x80..=0x7FF => {
            out.push(0xC0 | ((cp >> 6) & 0x1F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
            Some(2)
        }
        0x800..=0xFFFF => {
            out.push(0xE0 | ((cp >> 12) & 0x0F) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
            Some(3)
        }
        0x1_0000..=MAX_ENCODABLE => {
            out.push(0xF0 | ((cp >> 18) & 0x07) as u8);
            out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
            Some(4)
        }
        _ => None,
    }
}

/// Encode codepoints into UTF-8 bytes.
///
/// NUL codepoints are encoded like any other; a codepoint above
/// [`MAX_ENCODABLE`] aborts the whole call.
pub fn encode(codepoints: &[Codepoint]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(codepoints.len() * 3);
    for (index, &codepoint) in codepoints.iter().enumerate() {
        if encode_rune(codepoint, &mut out).is_none() {
            return Err(TrieError::Encode { codepoint, index });
        }
    }
    Ok(out)
}

/// Encode codepoints into a `String`.
///
/// Stricter than [`encode`]: surrogates and values above U+10FFFF are
/// byte-encodable but are not `char`s. Those fail with
/// [`TrieError::NotScalar`]; values above [`MAX_ENCODABLE`] still fail with
/// [`TrieError::Encode`].
pub fn encode_to_string(codepoints: &[Codepoint]) -> Result<String> {
    codepoints
        .iter()
        .enumerate()
        .map(|(index, &codepoint)| {
            if codepoint > MAX_ENCODABLE {
                return Err(TrieError::Encode { codepoint, index });
            }
            char::from_u32(codepoint).ok_or(TrieError::NotScalar { codepoint, index })
        })
        .collect()
}

/// True iff `text` is exactly one UTF-8 character.
pub fn is_single_codepoint(text: impl AsRef<[u8]>) -> bool {
    let bytes = text.as_ref();
    matches!(decode_rune(bytes), Ok((_, len)) if len == bytes.len())
}
