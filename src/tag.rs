//! The identifier octets of a BER-TLV encoded value.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use smallvec::SmallVec;
use crate::decode::{DecodeError, ErrorKind, Source};


//------------ Tag -----------------------------------------------------------

/// The tag of a BER-TLV encoded value.
///
/// Each encoded value starts with a sequence of one or more octets called
/// the _identifier octets_ which identify the value and tell whether the
/// value is primitive or constructed. Since TLV data used in EMV and
/// similar specifications identifies data objects by the raw identifier
/// octets (tag `9F02` rather than “application 2, constructed”), the `Tag`
/// type keeps the octets as they were encoded, including the constructed
/// bit.
///
/// # Encoding
///
/// Bits 8 and 7 of the first octet give the class of the tag and bit 6 is
/// set if the value is constructed. If bits 5 to 1 are not all set, they
/// are the tag number and the tag is a single octet. Otherwise, subsequent
/// octets follow, each providing seven bits of the tag number. All but the
/// last of them have bit 8 set.
///
/// # Limitations
///
/// Tags can be of any length but the decoder limits them to the maximum
/// tag length given in its [`Options`][crate::decode::Options], four octets
/// by default. Tag numbers are only available via [`Tag::number`] if they
/// fit into a `u32`.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tag(SmallVec<[u8; 4]>);

impl Tag {
    /// The mask for checking the class.
    const CLASS_MASK: u8 = 0xc0;

    /// The mask for checking whether the value is constructed.
    ///
    /// A value of 0 indicates primitive.
    const CONSTRUCTED_MASK: u8 = 0x20;

    /// The mask for the tag number in the first octet.
    ///
    /// If all these bits are set, more octets follow.
    const SINGLEBYTE_DATA_MASK: u8 = 0x1f;

    /// The mask for the tag number data in subsequent octets.
    const MULTIBYTE_DATA_MASK: u8 = 0x7f;

    /// The mask for the last octet with identifier data.
    ///
    /// (1 bit – 0b1000_0000, it is cleared in the last octet).
    const LAST_OCTET_MASK: u8 = 0x80;

    /// Creates a tag from its identifier octets.
    ///
    /// Returns `None` if `octets` isn’t exactly one correctly encoded tag.
    /// Since a first octet of 0x00 or 0xFF is padding, such octets are
    /// never a tag either.
    pub fn from_slice(octets: &[u8]) -> Option<Self> {
        let (&first, rest) = octets.split_first()?;
        if first == 0x00 || first == 0xFF {
            return None
        }
        if first & Self::SINGLEBYTE_DATA_MASK != Self::SINGLEBYTE_DATA_MASK {
            return rest.is_empty().then(|| Tag(octets.into()))
        }
        let (&last, middle) = rest.split_last()?;
        if last & Self::LAST_OCTET_MASK != 0 {
            return None
        }
        if middle.iter().any(|&octet| octet & Self::LAST_OCTET_MASK == 0) {
            return None
        }
        Some(Tag(octets.into()))
    }

    /// Returns the identifier octets.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Returns the number of identifier octets.
    pub fn encoded_len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the value is constructed.
    pub fn is_constructed(&self) -> bool {
        self.first() & Self::CONSTRUCTED_MASK != 0
    }

    /// Returns whether the tag consists of a single octet.
    pub fn is_single_octet(&self) -> bool {
        self.0.len() == 1
    }

    /// Returns the class of the tag.
    pub fn class(&self) -> Class {
        match self.first() & Self::CLASS_MASK {
            0x00 => Class::Universal,
            0x40 => Class::Application,
            0x80 => Class::Context,
            _ => Class::Private,
        }
    }

    /// Returns the number of the tag.
    ///
    /// Returns `None` if the number doesn’t fit into a `u32`.
    pub fn number(&self) -> Option<u32> {
        let (&first, rest) = self.0.split_first()?;
        if rest.is_empty() {
            return Some(u32::from(first & Self::SINGLEBYTE_DATA_MASK))
        }
        rest.iter().try_fold(0u32, |res, &octet| {
            res.checked_mul(0x80).map(|res| {
                res | u32::from(octet & Self::MULTIBYTE_DATA_MASK)
            })
        })
    }

    /// Returns the identifier octets as an upper-case hex string.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.as_slice())
    }

    /// Returns the first octet.
    fn first(&self) -> u8 {
        // Tags are never empty.
        self.0.first().copied().unwrap_or_default()
    }
}


//--- Display and Debug

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for octet in self.as_slice() {
            write!(f, "{:02X}", octet)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({})", self)
    }
}


//------------ Ident ---------------------------------------------------------

/// What was found where a tag was expected.
///
/// BER allows octets with the value 0x00 or 0xFF before, between, and after
/// encoded values. These _padding_ octets are not part of any value and
/// are reported separately so that they can be skipped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Ident {
    /// The identifier octets of a value.
    Tag(Tag),

    /// A single padding octet.
    Padding(u8),
}

impl Ident {
    /// Takes the identifier octets from the beginning of a source.
    ///
    /// Reads at most `max_len` octets. If the tag has not ended by then, an
    /// error is returned since there is no point in reading on for a tag
    /// that can’t be used anyway. A source that ends within the tag results
    /// in an unexpected-end-of-input error.
    pub fn take_from(
        source: &mut Source, max_len: usize
    ) -> Result<Self, DecodeError> {
        let start = source.pos();
        let first = source.take_u8()?;
        if first == 0x00 || first == 0xFF {
            return Ok(Ident::Padding(first))
        }
        let mut octets = SmallVec::<[u8; 4]>::new();
        octets.push(first);
        if first & Tag::SINGLEBYTE_DATA_MASK != Tag::SINGLEBYTE_DATA_MASK {
            return Ok(Ident::Tag(Tag(octets)))
        }
        while octets.len() < max_len {
            let octet = source.take_u8()?;
            octets.push(octet);
            if octet & Tag::LAST_OCTET_MASK == 0 {
                return Ok(Ident::Tag(Tag(octets)))
            }
        }
        xerr!(Err(DecodeError::new(ErrorKind::NestingTooDeep, start)))
    }
}


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Class {
    /// Universal class.
    ///
    /// Tags in this class are defined by ITU Recommendation X.680.
    Universal,

    /// Application class.
    Application,

    /// Context-specific class.
    Context,

    /// Private class.
    Private,
}


//============ Tests =========================================================
