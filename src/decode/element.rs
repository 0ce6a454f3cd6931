//! Decoding a single element.
//!
//! This is a private module. It only adds methods to [`Element`].

use crate::element::{Content, Element};
use crate::length::Length;
use crate::tag::{Ident, Tag};
use super::error::{DecodeError, ErrorKind};
use super::options::Options;
use super::source::{Pos, Source};


//------------ Element -------------------------------------------------------

impl Element {
    /// Takes the next element from the beginning of a source.
    ///
    /// Padding octets before the element are skipped. If the source is
    /// exhausted before an element starts, returns `Ok(None)`. Otherwise
    /// the complete element has to be available in the source.
    ///
    /// The element is treated as a top-level element when checking the
    /// nesting depth.
    pub fn take_opt_from(
        source: &mut Source, options: Options
    ) -> Result<Option<Self>, DecodeError> {
        take_opt_element(source, options, 0)
    }

    /// Takes the next element from the beginning of a source.
    ///
    /// This is like [`take_opt_from`][Self::take_opt_from] but returns an
    /// error if the source contains only padding or nothing at all.
    pub fn take_from(
        source: &mut Source, options: Options
    ) -> Result<Self, DecodeError> {
        match take_opt_element(source, options, 0)? {
            Some(element) => Ok(element),
            None => xerr!(Err(source.err(ErrorKind::UnexpectedEndOfInput))),
        }
    }
}


//------------ Decoding ------------------------------------------------------

/// Takes an optional element at the given nesting depth.
fn take_opt_element(
    source: &mut Source, options: Options, depth: usize,
) -> Result<Option<Element>, DecodeError> {
    loop {
        if source.is_exhausted() {
            return Ok(None)
        }
        let start = source.pos();
        match Ident::take_from(source, options.max_tag_len())? {
            Ident::Padding(octet) => {
                log::trace!("skipping padding {:#04x} at {}", octet, start);
            }
            Ident::Tag(tag) => {
                if depth > options.max_depth() {
                    return xerr!(Err(DecodeError::new(
                        ErrorKind::NestingTooDeep, start
                    )))
                }
                return take_element(source, options, depth, tag, start)
                    .map(Some)
            }
        }
    }
}

/// Takes the length and content octets of an element.
///
/// The identifier octets have already been taken and started at `start`.
fn take_element(
    source: &mut Source, options: Options, depth: usize,
    tag: Tag, start: Pos,
) -> Result<Element, DecodeError> {
    let length_pos = source.pos();
    let length = Length::take_from(source)?;
    let header_len = tag.encoded_len() + length.encoded_len();
    let length = length.definite();

    if !tag.is_constructed() {
        if length > source.remaining() {
            return xerr!(Err(DecodeError::new(
                ErrorKind::LengthExceedsBuffer, length_pos
            )))
        }
        let value = source.take_bytes(length)?;
        return Ok(Element::new(
            tag, length, Content::Primitive(value), header_len + length
        ))
    }

    let mut content = if options.mode().is_strict() {
        if length > source.remaining() {
            return xerr!(Err(DecodeError::new(
                ErrorKind::LengthExceedsBuffer, length_pos
            )))
        }
        source.split_to(length)?
    }
    else {
        source.split_all()
    };
    log::trace!(
        "constructed {} at {}, {} content octets", tag, start,
        content.remaining()
    );
    let content_len = content.remaining();
    let mut children = Vec::new();
    while let Some(child) = take_opt_element(
        &mut content, options, depth + 1
    )? {
        children.push(child);
    }
    Ok(Element::new(
        tag, length, Content::Constructed(children),
        header_len + content_len
    ))
}


//============ Tests =========================================================
