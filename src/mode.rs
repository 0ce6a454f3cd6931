//! The bounding mode.
//!
//! This is a private module. Its public items are re-exported by the parent.


//------------ Mode ----------------------------------------------------------

/// How far the content of a constructed value may extend.
///
/// The content of a constructed value is a sequence of nested values.
/// Normally, this sequence is limited by the length octets of the
/// constructed value: exactly that many octets have to be consumed by the
/// nested values, no more and no less.
///
/// Some older TLV parsers ignore the length of constructed values and
/// simply keep reading nested values until the end of whatever encloses
/// the constructed value. Data produced for or checked against these
/// parsers can only be read in the same way. The [`Mode::Unbounded`] mode
/// exists for this case. It should never be used for anything else since
/// a single constructed value with a wrong length will swallow all values
/// that follow it.
///
/// Primitive values are always limited by their length octets.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Nested values are limited to the length of the constructed value.
    #[default]
    Strict,

    /// Nested values extend to the end of the enclosing value.
    Unbounded,
}

impl Mode {
    /// Returns whether this is the strict mode.
    pub fn is_strict(self) -> bool {
        matches!(self, Mode::Strict)
    }
}
