//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::{error, fmt};
use super::source::Pos;


//------------ ErrorKind -----------------------------------------------------

/// The reason why decoding failed.
///
/// All of these are fatal for the decoding run that produced them. Since
/// malformed input doesn’t get any better by trying again, there is no
/// notion of a temporary error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Fewer octets are available than a tag, length, or value requires.
    UnexpectedEndOfInput,

    /// The length octets use the indefinite form or a reserved encoding.
    UnsupportedLengthForm,

    /// The length octets encode a value too large to be represented.
    LengthOverflow,

    /// The length exceeds the octets remaining in the enclosing scope.
    LengthExceedsBuffer,

    /// Constructed values are nested too deep or a tag is too long.
    NestingTooDeep,
}

impl ErrorKind {
    /// Returns a short description of the error kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UnexpectedEndOfInput => "unexpected end of data",
            ErrorKind::UnsupportedLengthForm => "unsupported length form",
            ErrorKind::LengthOverflow => "excessive length",
            ErrorKind::LengthExceedsBuffer => {
                "length exceeds enclosing value"
            }
            ErrorKind::NestingTooDeep => "nesting too deep",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding data.
///
/// The error carries the kind of problem as well as the position in the
/// input where the offending field started. Since decoding stops at the
/// first error, the position also is the number of octets that have been
/// consumed successfully.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecodeError {
    /// What went wrong.
    kind: ErrorKind,

    /// Where it went wrong.
    pos: Pos,
}

impl DecodeError {
    /// Creates a new error from a kind and a position.
    pub fn new(kind: ErrorKind, pos: Pos) -> Self {
        DecodeError { kind, pos }
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the position in the input where the error happened.
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (at position {})", self.kind, self.pos)
    }
}

impl error::Error for DecodeError { }


//============ Tests =========================================================
