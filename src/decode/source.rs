//! The source of octets to decode.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::fmt;
use bytes::{Buf, Bytes};
use super::error::{DecodeError, ErrorKind};


//------------ Source --------------------------------------------------------

/// A cursor over a finite sequence of octets.
///
/// The source owns the octets it still has to provide as a [`Bytes`] value
/// and keeps track of the position of the first of these octets relative
/// to the start of the original input. All reading methods consume octets
/// from the front.
///
/// The content of a constructed value is read through a new source split
/// off the front of its parent via [`split_to`][Self::split_to]. Because
/// the split-off source only contains the content octets, whatever decodes
/// the content can never read into the octets that follow it in the parent.
#[derive(Clone, Debug, Default)]
pub struct Source {
    /// The octets not yet consumed.
    data: Bytes,

    /// The position of the first octet of `data`.
    pos: Pos,
}

impl Source {
    /// Creates a new source for the given octets.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Source { data: data.into(), pos: Pos::default() }
    }

    /// Returns the current position.
    ///
    /// For a source created via [`new`][Self::new], this is the number of
    /// octets consumed so far.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Returns the number of octets left.
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    /// Returns whether all octets have been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a slice of the octets left.
    pub fn slice(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Returns the next octet without consuming it.
    pub fn peek_u8(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// Takes a single octet from the source.
    ///
    /// If there aren’t any more octets available from the source, returns
    /// an unexpected-end-of-input error.
    pub fn take_u8(&mut self) -> Result<u8, DecodeError> {
        if self.data.is_empty() {
            return xerr!(Err(self.err(ErrorKind::UnexpectedEndOfInput)))
        }
        let res = self.data.get_u8();
        self.pos.advance(1);
        Ok(res)
    }

    /// Takes exactly `len` octets from the source.
    ///
    /// The octets are returned without copying. If fewer than `len` octets
    /// are left, returns an unexpected-end-of-input error and leaves the
    /// source untouched.
    pub fn take_bytes(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        if len > self.data.len() {
            return xerr!(Err(self.err(ErrorKind::UnexpectedEndOfInput)))
        }
        let res = self.data.split_to(len);
        self.pos.advance(len);
        Ok(res)
    }

    /// Splits off a new source for the next `len` octets.
    ///
    /// The new source starts at the current position and contains exactly
    /// `len` octets. This source continues after them.
    pub fn split_to(&mut self, len: usize) -> Result<Source, DecodeError> {
        let pos = self.pos;
        let data = self.take_bytes(len)?;
        Ok(Source { data, pos })
    }

    /// Splits off a new source containing everything that’s left.
    pub fn split_all(&mut self) -> Source {
        let pos = self.pos;
        self.pos.advance(self.data.len());
        Source { data: std::mem::take(&mut self.data), pos }
    }

    /// Returns an error of the given kind at the current position.
    pub fn err(&self, kind: ErrorKind) -> DecodeError {
        DecodeError::new(kind, self.pos)
    }
}


//------------ Pos -----------------------------------------------------------

/// The logical position within the input.
///
/// Positions count octets from the start of the data handed to the
/// decoder. They are used for diagnostics and to report how much of the
/// input was consumed successfully.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pos(usize);

impl Pos {
    /// Returns the position as a plain octet count.
    pub fn to_usize(self) -> usize {
        self.0
    }

    /// Moves the position forward by `len` octets.
    fn advance(&mut self, len: usize) {
        self.0 += len
    }
}

impl From<usize> for Pos {
    fn from(pos: usize) -> Pos {
        Pos(pos)
    }
}

impl From<Pos> for usize {
    fn from(pos: Pos) -> usize {
        pos.0
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}


//============ Tests =========================================================
