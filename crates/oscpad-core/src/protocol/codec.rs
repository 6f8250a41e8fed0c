//! Codec for single OSC 1.0 messages, one message per datagram.
//!
//! Wire format:
//! ```text
//! [address: padded string][",<tags>": padded string][arg0][arg1]...
//! ```
//! Strings are NUL-terminated and padded with NULs to a multiple of 4 bytes.
//! `f` and `i` arguments are 4 bytes, big-endian.  `s` arguments are padded
//! strings.  Bundles (`#bundle`) and exotic type tags are out of scope; the
//! control surface sends plain messages with `f`, `i`, and `s` arguments.
//!
//! A message with no arguments may omit the type-tag string entirely — some
//! senders do — in which case the argument list decodes as empty.

use crate::protocol::message::{OscArg, OscMessage};
use thiserror::Error;

/// Errors that can occur during message encoding or decoding.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// The datagram is shorter than the structure it declares.
    #[error("insufficient data: need at least {needed} bytes, got {available}")]
    InsufficientData { needed: usize, available: usize },

    /// The address string does not start with `/`.
    #[error("address must start with '/': {0:?}")]
    BadAddress(String),

    /// A type tag other than `f`, `i`, or `s` was encountered.
    #[error("unsupported type tag: '{0}'")]
    UnsupportedTypeTag(char),

    /// A padded string is not NUL-terminated or not valid UTF-8.
    #[error("malformed packet: {0}")]
    Malformed(String),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decodes one [`OscMessage`] from a datagram.
///
/// Trailing bytes beyond the declared arguments are ignored: OSC senders are
/// allowed to pad datagrams, and dropping the excess is safer than rejecting
/// an otherwise well-formed message.
///
/// # Errors
///
/// Returns [`DecodeError`] if the bytes are malformed.
///
/// # Examples
///
/// ```rust
/// use oscpad_core::protocol::codec::{decode_message, encode_message};
/// use oscpad_core::protocol::message::{OscArg, OscMessage};
///
/// let msg = OscMessage::new("/pad/mouse/pos/xy", vec![OscArg::Float(0.5), OscArg::Float(0.5)]);
/// let bytes = encode_message(&msg);
/// let decoded = decode_message(&bytes).unwrap();
/// assert_eq!(decoded, msg);
/// ```
pub fn decode_message(bytes: &[u8]) -> Result<OscMessage, DecodeError> {
    let (address, offset) = read_padded_string(bytes, 0)?;
    if !address.starts_with('/') {
        return Err(DecodeError::BadAddress(address));
    }

    // No type-tag string: a bare address with zero arguments.
    if offset >= bytes.len() {
        return Ok(OscMessage::new(address, Vec::new()));
    }

    let (tags, mut offset) = read_padded_string(bytes, offset)?;
    let tags = match tags.strip_prefix(',') {
        Some(t) => t.to_string(),
        // A non-comma string where the tag string belongs is tolerated as
        // "no arguments" for compatibility with pre-1.0 senders.
        None => return Ok(OscMessage::new(address, Vec::new())),
    };

    let mut args = Vec::with_capacity(tags.len());
    for tag in tags.chars() {
        match tag {
            'f' => {
                let raw = read_u32(bytes, offset)?;
                args.push(OscArg::Float(f32::from_bits(raw)));
                offset += 4;
            }
            'i' => {
                let raw = read_u32(bytes, offset)?;
                args.push(OscArg::Int(raw as i32));
                offset += 4;
            }
            's' => {
                let (s, next) = read_padded_string(bytes, offset)?;
                args.push(OscArg::Str(s));
                offset = next;
            }
            other => return Err(DecodeError::UnsupportedTypeTag(other)),
        }
    }

    Ok(OscMessage::new(address, args))
}

/// Encodes an [`OscMessage`] into datagram bytes, including the type-tag
/// string (present even for zero arguments, per OSC 1.0).
pub fn encode_message(msg: &OscMessage) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64);
    write_padded_string(&mut buf, &msg.address);

    let mut tags = String::with_capacity(msg.args.len() + 1);
    tags.push(',');
    for arg in &msg.args {
        tags.push(arg.type_tag());
    }
    write_padded_string(&mut buf, &tags);

    for arg in &msg.args {
        match arg {
            OscArg::Float(f) => buf.extend_from_slice(&f.to_bits().to_be_bytes()),
            OscArg::Int(i) => buf.extend_from_slice(&i.to_be_bytes()),
            OscArg::Str(s) => write_padded_string(&mut buf, s),
        }
    }
    buf
}

// ── Utility helpers ───────────────────────────────────────────────────────────

/// Reads a NUL-terminated, 4-byte-padded string starting at `offset`.
/// Returns the string and the offset of the byte after the padding.
fn read_padded_string(buf: &[u8], offset: usize) -> Result<(String, usize), DecodeError> {
    if offset >= buf.len() {
        return Err(DecodeError::InsufficientData {
            needed: offset + 1,
            available: buf.len(),
        });
    }
    let nul = buf[offset..]
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| DecodeError::Malformed(format!("string at offset {offset} is not NUL-terminated")))?;
    let s = std::str::from_utf8(&buf[offset..offset + nul])
        .map_err(|e| DecodeError::Malformed(format!("invalid UTF-8: {e}")))?
        .to_string();
    // Length including the NUL, rounded up to the next multiple of 4.
    let consumed = (nul + 4) & !3;
    Ok((s, offset + consumed))
}

/// Writes `s` followed by a NUL and enough padding NULs to reach a multiple
/// of 4 bytes.
fn write_padded_string(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(s.as_bytes());
    let pad = 4 - (s.len() % 4);
    buf.extend(std::iter::repeat(0u8).take(pad));
}

fn read_u32(buf: &[u8], offset: usize) -> Result<u32, DecodeError> {
    if buf.len() < offset + 4 {
        return Err(DecodeError::InsufficientData {
            needed: offset + 4,
            available: buf.len(),
        });
    }
    Ok(u32::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ]))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(msg: &OscMessage) -> OscMessage {
        let encoded = encode_message(msg);
        decode_message(&encoded).expect("decode failed")
    }

    // ── Round trips ───────────────────────────────────────────────────────────

    #[test]
    fn test_position_message_round_trip() {
        let msg = OscMessage::new(
            "/pad/mouse/pos/xy",
            vec![OscArg::Float(0.25), OscArg::Float(0.75)],
        );
        assert_eq!(round_trip(&msg), msg);
    }

    #[test]
    fn test_no_argument_message_round_trip() {
        let msg = OscMessage::new("/pad/mouse/click/left/1", vec![]);
        assert_eq!(round_trip(&msg), msg);
    }

    #[test]
    fn test_mixed_argument_message_round_trip() {
        let msg = OscMessage::new(
            "/session/cmd/arrange",
            vec![
                OscArg::Int(-7),
                OscArg::Str("clip name".to_string()),
                OscArg::Float(1.0),
            ],
        );
        assert_eq!(round_trip(&msg), msg);
    }

    #[test]
    fn test_empty_string_argument_round_trip() {
        let msg = OscMessage::new("/x", vec![OscArg::Str(String::new())]);
        assert_eq!(round_trip(&msg), msg);
    }

    #[test]
    fn test_address_length_on_padding_boundary_round_trips() {
        // "/abc" is exactly 4 bytes; the NUL terminator forces a full extra
        // padding word.  This is the classic off-by-one in OSC codecs.
        let msg = OscMessage::new("/abc", vec![OscArg::Int(1)]);
        assert_eq!(round_trip(&msg), msg);
    }

    // ── Wire layout ───────────────────────────────────────────────────────────

    #[test]
    fn test_encoded_address_is_nul_padded_to_four_bytes() {
        let bytes = encode_message(&OscMessage::new("/ab", vec![]));
        // "/ab" + 1 NUL = 4 bytes, then ",\0\0\0" for the empty tag string.
        assert_eq!(&bytes[..4], b"/ab\0");
        assert_eq!(&bytes[4..8], b",\0\0\0");
    }

    #[test]
    fn test_float_argument_is_big_endian() {
        let bytes = encode_message(&OscMessage::new("/x", vec![OscArg::Float(1.0)]));
        // address "/x\0\0" + tags ",f\0\0" + 0x3F800000
        assert_eq!(&bytes[8..12], &[0x3F, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_decode_bare_address_without_tag_string() {
        // 4 bytes: address only, no type-tag string at all.
        let decoded = decode_message(b"/ab\0").unwrap();
        assert_eq!(decoded.address, "/ab");
        assert!(decoded.args.is_empty());
    }

    #[test]
    fn test_decode_ignores_trailing_garbage() {
        let mut bytes = encode_message(&OscMessage::new("/x", vec![OscArg::Int(3)]));
        bytes.extend_from_slice(&[0xDE, 0xAD]);
        let decoded = decode_message(&bytes).unwrap();
        assert_eq!(decoded.args, vec![OscArg::Int(3)]);
    }

    // ── Error conditions ──────────────────────────────────────────────────────

    #[test]
    fn test_decode_empty_datagram_is_insufficient_data() {
        let result = decode_message(&[]);
        assert!(matches!(result, Err(DecodeError::InsufficientData { .. })));
    }

    #[test]
    fn test_decode_address_without_leading_slash_is_rejected() {
        let result = decode_message(b"pad\0,f\0\0\x3F\x80\x00\x00");
        assert!(matches!(result, Err(DecodeError::BadAddress(_))));
    }

    #[test]
    fn test_decode_unterminated_string_is_rejected() {
        let result = decode_message(b"/pad");
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_unknown_type_tag_is_rejected() {
        // tag string ",b" declares a blob, which the bridge does not accept.
        let result = decode_message(b"/x\0\0,b\0\0\x00\x00\x00\x00");
        assert_eq!(result, Err(DecodeError::UnsupportedTypeTag('b')));
    }

    #[test]
    fn test_decode_truncated_float_argument_is_rejected() {
        // Declares one float but provides only two payload bytes.
        let result = decode_message(b"/x\0\0,f\0\0\x3F\x80");
        assert!(matches!(result, Err(DecodeError::InsufficientData { .. })));
    }

    #[test]
    fn test_decode_non_utf8_address_is_rejected() {
        let result = decode_message(&[b'/', 0xFF, 0xFE, 0x00]);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }
}
