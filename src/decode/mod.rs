//! Decoding BER-TLV encoded data.
//!
//! The easiest way to decode data is the [`decode`] function which decodes
//! all elements contained in its input and returns them in a vec. If you
//! are interested in the elements before an error or want to stop early,
//! use a [`Document`] instead. Both use the default [`Options`]. Decoding
//! with other options is available via methods on `Options`.
//!
//! Single elements can be decoded from a [`Source`] via
//! [`Element::take_from`] and [`Element::take_opt_from`].
//!
//! [`Element::take_from`]: crate::Element::take_from
//! [`Element::take_opt_from`]: crate::Element::take_opt_from

pub use self::document::Document;
pub use self::error::{DecodeError, ErrorKind};
pub use self::options::Options;
pub use self::source::{Pos, Source};

use bytes::Bytes;
use crate::element::Element;

mod document;
mod element;
mod error;
mod options;
mod source;
mod test;


//------------ Functions -----------------------------------------------------

/// Decodes all elements contained in `data` using the default options.
///
/// ```
/// let elements = bertlv::decode::decode(
///     vec![0x00, 0x91, 0x01, 0x05]
/// ).unwrap();
/// assert_eq!(elements.len(), 1);
/// assert_eq!(elements[0].tag().to_hex(), "91");
/// assert_eq!(elements[0].value().unwrap().as_ref(), b"\x05");
/// ```
pub fn decode(data: impl Into<Bytes>) -> Result<Vec<Element>, DecodeError> {
    Options::default().decode(data)
}

/// Decodes all elements contained in a slice using the default options.
///
/// The slice is copied first so that the elements can own their values.
pub fn decode_slice(data: &[u8]) -> Result<Vec<Element>, DecodeError> {
    decode(Bytes::copy_from_slice(data))
}
