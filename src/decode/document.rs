//! Decoding a sequence of top-level elements.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::iter::FusedIterator;
use bytes::Bytes;
use crate::element::Element;
use super::error::DecodeError;
use super::options::Options;
use super::source::{Pos, Source};


//------------ Document ------------------------------------------------------

/// Encoded data containing a sequence of elements.
///
/// A document owns its input and hands out the top-level elements it
/// contains one by one, either through [`next_element`][Self::next_element]
/// or by being used as an iterator. Padding octets between the elements are
/// skipped.
///
/// Decoding stops at the first error. All elements returned before it
/// remain valid, so a caller interested in whatever could be decoded can
/// collect elements until the first error:
///
/// ```
/// use bertlv::decode::Document;
///
/// let mut doc = Document::new(&b"\x5A\x01\x42\x00\x91\x05\x01"[..]);
/// let first = doc.next().unwrap().unwrap();
/// assert_eq!(first.tag().to_hex(), "5A");
/// assert!(doc.next().unwrap().is_err());
/// assert!(doc.next().is_none());
/// ```
///
/// If you only care about the complete result, use
/// [`decode_all`][Self::decode_all] or the [`decode`][super::decode]
/// function.
#[derive(Clone, Debug)]
pub struct Document {
    /// The remaining input.
    source: Source,

    /// The options to decode with.
    options: Options,

    /// The error that stopped decoding if there was one.
    error: Option<DecodeError>,
}

impl Document {
    /// Creates a new document with default options.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self::with_options(data, Options::default())
    }

    /// Creates a new document with the given options.
    pub fn with_options(data: impl Into<Bytes>, options: Options) -> Self {
        Document {
            source: Source::new(data),
            options,
            error: None,
        }
    }

    /// Returns the options used by the document.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns the number of octets consumed so far.
    ///
    /// After an error, this is the position reported by the error.
    pub fn pos(&self) -> Pos {
        match self.error {
            Some(err) => err.pos(),
            None => self.source.pos(),
        }
    }

    /// Returns whether the document has been decoded completely.
    ///
    /// This is `false` if decoding has stopped because of an error.
    pub fn is_exhausted(&self) -> bool {
        self.error.is_none() && self.source.is_exhausted()
    }

    /// Decodes the next top-level element.
    ///
    /// Returns `Ok(None)` if the end of the input has been reached cleanly,
    /// i.e., with nothing but padding left. If the input ends in the middle
    /// of an element, returns an error.
    ///
    /// Once an error has occurred, it will be returned again for every
    /// further call.
    pub fn next_element(&mut self) -> Result<Option<Element>, DecodeError> {
        if let Some(err) = self.error {
            return Err(err)
        }
        match Element::take_opt_from(&mut self.source, self.options) {
            Ok(res) => Ok(res),
            Err(err) => {
                self.error = Some(err);
                Err(err)
            }
        }
    }

    /// Decodes all remaining top-level elements.
    ///
    /// Returns the elements in the order they appear in the input or the
    /// first error encountered.
    pub fn decode_all(mut self) -> Result<Vec<Element>, DecodeError> {
        let mut res = Vec::new();
        while let Some(element) = self.next_element()? {
            res.push(element);
        }
        log::debug!(
            "decoded {} elements from {} octets", res.len(), self.pos()
        );
        Ok(res)
    }
}


//--- Iterator

impl Iterator for Document {
    type Item = Result<Element, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None
        }
        self.next_element().transpose()
    }
}

impl FusedIterator for Document { }


//============ Tests =========================================================
