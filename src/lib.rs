//! Decoding of BER-TLV encoded data.
//!
//! BER-TLV is the tag-length-value encoding defined by the Basic Encoding
//! Rules of ITU Recommendation X.690 when used without an ASN.1 module.
//! It is the encoding used for the data objects of EMV payment cards and
//! for many smart card protocols based on ISO 7816.
//!
//! Each encoded value, called an _element_ here, consists of a tag that
//! identifies it, the length of its content, and the content itself. The
//! content is either a sequence of raw octets for a primitive element or a
//! sequence of nested elements for a constructed element.
//!
//! This crate decodes a buffer of such data into a tree of [`Element`]s:
//!
//! ```
//! let data = hex::decode(
//!     "6F0E8407A0000000041010A503500141"
//! ).unwrap();
//! let elements = bertlv::decode::decode(data).unwrap();
//! let fci = &elements[0];
//! assert!(fci.is_constructed());
//!
//! let aid = fci.find(&bertlv::Tag::from_slice(b"\x84").unwrap()).unwrap();
//! assert_eq!(aid.value().unwrap().as_ref(), b"\xA0\x00\x00\x00\x04\x10\x10");
//! ```
//!
//! The content of a constructed element is strictly limited to the length
//! given in its length octets. Padding octets 0x00 and 0xFF between elements
//! are skipped. Only definite lengths are supported. Details of decoding can
//! be changed through [`decode::Options`].

#[macro_use] pub mod debug;

pub use self::element::{Content, Element};
pub use self::mode::Mode;
pub use self::tag::{Class, Ident, Tag};

pub mod decode;

mod element;
mod length;
mod mode;
mod tag;
