//! The length octets.
//!
//! This is a private module. The [`Length`] defined herein is not
//! publicly exposed.

use crate::decode::{DecodeError, ErrorKind, Source};


//------------ Length -------------------------------------------------------

/// The length octets of an encoded value.
///
/// # BER Encoding
///
/// The length can be encoded in one of two basic ways. Which one is used is
/// determined by the most significant bit of the first octet. If it is not
/// set, the length octets is one octet long and the remaining bits of this
/// first octet provide the length. Thus, if the first octet is less than
/// 128, it provides the length already.
///
/// If the most significant bit is set, the remaining bits of the first
/// octet specify the number of octets that follow to encode the actual
/// length. These octets give the big-endian encoding of the length. BER
/// doesn’t require the shortest encoding, so leading zero octets are fine.
///
/// If the first octet is 0x80, i.e., zero octets follow, the length is
/// indefinite and the content is terminated by an end-of-contents marker.
/// This is not supported here. A first octet of 0xFF is treated like any
/// other long form and announces 127 length octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Length {
    /// The definite length.
    length: usize,

    /// The number of length octets this was encoded in.
    encoded_len: usize,
}

impl Length {
    /// Returns the length.
    pub fn definite(self) -> usize {
        self.length
    }

    /// Returns the number of octets the length was encoded in.
    pub fn encoded_len(self) -> usize {
        self.encoded_len
    }

    /// Parses a length from the beginning of a source.
    pub fn take_from(source: &mut Source) -> Result<Self, DecodeError> {
        let start = source.pos();
        let count = match source.take_u8()? {
            // Bit 7 clear: short form.
            n if (n & 0x80) == 0 => {
                return Ok(Length { length: n.into(), encoded_len: 1 })
            }

            // 0x80: indefinite.
            0x80 => {
                return xerr!(Err(DecodeError::new(
                    ErrorKind::UnsupportedLengthForm, start
                )))
            }

            // Anything else: clear left bit, number of octets.
            n => usize::from(n & 0x7F)
        };
        let octets = source.take_bytes(count)?;
        let length = octets.iter().try_fold(0usize, |res, &octet| {
            res.checked_mul(0x100).map(|res| res | usize::from(octet))
        });
        match length {
            Some(length) => Ok(Length { length, encoded_len: count + 1 }),
            None => {
                xerr!(Err(DecodeError::new(ErrorKind::LengthOverflow, start)))
            }
        }
    }
}


//============ Tests =========================================================
