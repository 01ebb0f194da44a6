//! UUIDv8 field layout encoder.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           custom_a                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          custom_a             |  ver  |       custom_b        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                       custom_c                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           custom_c                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use crate::Uuid;

/// Assembles a UUIDv8 from optional field spans.
///
/// Each supplied span is copied verbatim into its byte range: `custom_a` into bytes 0-5,
/// `custom_b` into bytes 6-7, and `custom_c` into bytes 8-15. Fields without a span keep the
/// corresponding bytes of `entropy`, which the caller is expected to have filled with random
/// data beforehand. The version and variant bits are stamped last, overwriting the top nibble
/// of byte 6 and the top two bits of byte 8.
///
/// # Examples
///
/// ```rust
/// use uuid8::layout;
///
/// let e = layout::encode(Some(&[0xff; 6]), None, Some(&[0xff; 8]), [0; 16]);
/// assert_eq!(
///     e.as_bytes(),
///     &[
///         0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x80, 0x00,
///         0xbf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
///     ]
/// );
/// ```
pub fn encode(
    custom_a: Option<&[u8; 6]>,
    custom_b: Option<&[u8; 2]>,
    custom_c: Option<&[u8; 8]>,
    entropy: [u8; 16],
) -> Uuid {
    let mut bytes = entropy;
    if let Some(a) = custom_a {
        bytes[0..6].copy_from_slice(a);
    }
    if let Some(b) = custom_b {
        bytes[6..8].copy_from_slice(b);
    }
    if let Some(c) = custom_c {
        bytes[8..16].copy_from_slice(c);
    }
    bytes[6] = 0x80 | (bytes[6] & 0x0f);
    bytes[8] = 0x80 | (bytes[8] & 0x3f);
    Uuid::from(bytes)
}
