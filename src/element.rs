//! Decoded values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use bytes::Bytes;
use crate::tag::Tag;


//------------ Element -------------------------------------------------------

/// A decoded BER-TLV value.
///
/// An element consists of its tag, the length given by its length octets,
/// and its content. The content is either the raw content octets of a
/// primitive value or the sequence of nested elements of a constructed
/// value. Which one it is follows from the tag: the content is
/// constructed if and only if [`Tag::is_constructed`] is `true`.
///
/// Elements are produced by the decoder and can’t be changed afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    /// The tag of the element.
    tag: Tag,

    /// The length as given by the length octets.
    length: usize,

    /// The content of the element.
    content: Content,

    /// The number of octets of the encoded element.
    encoded_len: usize,
}

impl Element {
    /// Creates a new element from its parts.
    ///
    /// This is only used by the decoder which makes sure the parts fit
    /// together.
    pub(crate) fn new(
        tag: Tag, length: usize, content: Content, encoded_len: usize
    ) -> Self {
        debug_assert_eq!(tag.is_constructed(), content.is_constructed());
        Element { tag, length, content, encoded_len }
    }

    /// Returns the tag of the element.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the length given in the element’s length octets.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the content of the element.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Converts the element into its content.
    pub fn into_content(self) -> Content {
        self.content
    }

    /// Returns the number of octets the element occupied in its input.
    ///
    /// This includes the identifier, length, and content octets as well as
    /// any padding between nested elements.
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    /// Returns whether the element is primitive.
    pub fn is_primitive(&self) -> bool {
        !self.content.is_constructed()
    }

    /// Returns whether the element is constructed.
    pub fn is_constructed(&self) -> bool {
        self.content.is_constructed()
    }

    /// Returns the content octets of a primitive element.
    ///
    /// Returns `None` if the element is constructed.
    pub fn value(&self) -> Option<&Bytes> {
        match self.content {
            Content::Primitive(ref value) => Some(value),
            Content::Constructed(_) => None,
        }
    }

    /// Returns the nested elements of a constructed element.
    ///
    /// Returns `None` if the element is primitive.
    pub fn children(&self) -> Option<&[Element]> {
        match self.content {
            Content::Primitive(_) => None,
            Content::Constructed(ref children) => Some(children),
        }
    }

    /// Returns the first nested element with the given tag.
    ///
    /// Only looks at the immediate children of a constructed element. For
    /// a primitive element, always returns `None`.
    pub fn find(&self, tag: &Tag) -> Option<&Element> {
        self.children()?.iter().find(|child| child.tag() == tag)
    }

    /// Returns the first element with the given tag anywhere below.
    ///
    /// The search is depth-first and in the order of the encoded data. The
    /// element itself is not considered.
    pub fn find_recursive(&self, tag: &Tag) -> Option<&Element> {
        self.children()?.iter().find_map(|child| {
            if child.tag() == tag {
                Some(child)
            }
            else {
                child.find_recursive(tag)
            }
        })
    }

    /// Writes the element as an indented tree.
    fn fmt_indented(
        &self, f: &mut fmt::Formatter, depth: usize
    ) -> fmt::Result {
        write!(f, "{:width$}{} ({})", "", self.tag, self.length,
            width = depth * 2
        )?;
        match self.content {
            Content::Primitive(ref value) => {
                writeln!(f, ": {}", hex::encode_upper(value))
            }
            Content::Constructed(ref children) => {
                writeln!(f)?;
                for child in children {
                    child.fmt_indented(f, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}


//--- Display

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}


//------------ Content -------------------------------------------------------

/// The content of an element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Content {
    /// The content octets of a primitive element.
    Primitive(Bytes),

    /// The nested elements of a constructed element.
    Constructed(Vec<Element>),
}

impl Content {
    /// Returns whether this is the content of a constructed element.
    pub fn is_constructed(&self) -> bool {
        matches!(*self, Content::Constructed(_))
    }
}


//============ Tests =========================================================
