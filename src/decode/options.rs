//! Decoding options.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use bytes::Bytes;
use crate::element::Element;
use crate::mode::Mode;
use super::document::Document;
use super::error::DecodeError;


//------------ Options -------------------------------------------------------

/// The options for decoding data.
///
/// The default options are what you want for most data: strict limits for
/// the content of constructed values, at most 32 levels of nested
/// constructed values, and tags of up to four octets.
///
/// Options are built starting from the default and replacing individual
/// settings:
///
/// ```
/// use bertlv::Mode;
/// use bertlv::decode::Options;
///
/// let options = Options::default().with_max_depth(8);
/// let elements = options.decode(&b"\x70\x03\x5a\x01\x42"[..]).unwrap();
/// assert_eq!(elements.len(), 1);
///
/// let legacy = Options::default().with_mode(Mode::Unbounded);
/// assert!(!legacy.mode().is_strict());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Options {
    /// How the content of constructed values is limited.
    mode: Mode,

    /// The maximum nesting depth of constructed values.
    max_depth: usize,

    /// The maximum number of identifier octets.
    max_tag_len: usize,
}

impl Options {
    /// The default maximum nesting depth.
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    /// The default maximum number of identifier octets.
    pub const DEFAULT_MAX_TAG_LEN: usize = 4;

    /// Creates the default options.
    pub const fn new() -> Self {
        Options {
            mode: Mode::Strict,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_tag_len: Self::DEFAULT_MAX_TAG_LEN,
        }
    }

    /// Returns the options with the mode replaced.
    pub const fn with_mode(self, mode: Mode) -> Self {
        Options { mode, ..self }
    }

    /// Returns the options with the maximum nesting depth replaced.
    ///
    /// The depth counts the constructed values enclosing a value. Top-level
    /// values have depth zero, so a maximum depth of zero rejects all
    /// constructed values that contain anything at all.
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Options { max_depth, ..self }
    }

    /// Returns the options with the maximum tag length replaced.
    ///
    /// The length is given in octets including the first octet. Values
    /// less than one are treated as one.
    pub const fn with_max_tag_len(self, max_tag_len: usize) -> Self {
        let max_tag_len = if max_tag_len == 0 { 1 } else { max_tag_len };
        Options { max_tag_len, ..self }
    }

    /// Returns the mode.
    pub const fn mode(self) -> Mode {
        self.mode
    }

    /// Returns the maximum nesting depth.
    pub const fn max_depth(self) -> usize {
        self.max_depth
    }

    /// Returns the maximum number of identifier octets.
    pub const fn max_tag_len(self) -> usize {
        self.max_tag_len
    }

    /// Decodes all values contained in `data`.
    pub fn decode(
        self, data: impl Into<Bytes>
    ) -> Result<Vec<Element>, DecodeError> {
        self.document(data).decode_all()
    }

    /// Returns a document for decoding `data` value by value.
    pub fn document(self, data: impl Into<Bytes>) -> Document {
        Document::with_options(data, self)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}


//============ Tests =========================================================
