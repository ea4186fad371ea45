//! The eight integral representations an enumeration can be stored in, and
//! overflow-checked conversion of any integral input into one of them.
//!
//! Every supported width fits losslessly in an `i128`, so conversion widens the
//! input first and then narrows it into the target domain. Narrowing fails
//! instead of truncating or wrapping.

// used to print out readable forms of a representation
use std::fmt;
// used to indicate that underlying values need to be hashable
use std::hash::Hash;
// used for flags-style combination of constants
use std::ops::{BitAnd, BitOr};

use thiserror::Error;

use crate::error::DnumError;
use crate::metadata::Enumeration;

// ------------- Representation -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Representation {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
}

impl Representation {
    /// Classifies the underlying representation of an enumeration type.
    pub fn of<E: Enumeration>() -> Self {
        <E::Underlying as Integral>::REPRESENTATION
    }
    pub fn bits(&self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
        }
    }
    pub fn bytes(&self) -> usize {
        (self.bits() / 8) as usize
    }
    pub fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }
    pub fn min_value(&self) -> i128 {
        match self {
            Self::I8 => i8::MIN.into(),
            Self::I16 => i16::MIN.into(),
            Self::I32 => i32::MIN.into(),
            Self::I64 => i64::MIN.into(),
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => 0,
        }
    }
    pub fn max_value(&self) -> i128 {
        match self {
            Self::I8 => i8::MAX.into(),
            Self::U8 => u8::MAX.into(),
            Self::I16 => i16::MAX.into(),
            Self::U16 => u16::MAX.into(),
            Self::I32 => i32::MAX.into(),
            Self::U32 => u32::MAX.into(),
            Self::I64 => i64::MAX.into(),
            Self::U64 => u64::MAX.into(),
        }
    }
    pub fn contains(&self, value: i128) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }
    /// Checks that `input` lies within this domain, whatever width and
    /// signedness the input itself has.
    pub fn convert<I: Integral>(&self, input: I) -> Result<i128, Overflow> {
        let wide = input.widen();
        if self.contains(wide) {
            Ok(wide)
        } else {
            Err(Overflow::new(*self, wide))
        }
    }
    /// Typed form of [`Representation::convert`], landing directly in `U`.
    pub fn narrow<U: Integral, I: Integral>(input: I) -> Result<U, Overflow> {
        let wide = input.widen();
        U::narrow(wide).ok_or_else(|| Overflow::new(U::REPRESENTATION, wide))
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
        };
        f.write_str(name)
    }
}

// ------------- Overflow -------------
/// A value that cannot be represented in a domain without truncation or sign change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value} is outside the {representation} domain")]
pub struct Overflow {
    pub representation: Representation,
    pub value: String,
}

impl Overflow {
    pub fn new(representation: Representation, value: impl fmt::Display) -> Self {
        Self {
            representation,
            value: value.to_string(),
        }
    }
    pub fn within(self, enumeration: &'static str) -> DnumError {
        DnumError::Overflow {
            enumeration,
            representation: self.representation,
            value: self.value,
        }
    }
}

// ------------- Integral -------------
/// One of the eight classical integral types.
///
/// This is both the bound on value arguments (any width is accepted and
/// normalized) and the bound on an enumeration's underlying type.
pub trait Integral:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + fmt::UpperHex
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + Send
    + Sync
    + 'static
{
    const REPRESENTATION: Representation;
    const ZERO: Self;
    fn widen(self) -> i128;
    fn narrow(value: i128) -> Option<Self>;
    /// The two's-complement bit pattern in this type's own width.
    fn to_bits(self) -> u64;
}

macro_rules! integral_impl {
    ($t:ty, $unsigned:ty, $representation:ident) => {
        impl Integral for $t {
            const REPRESENTATION: Representation = Representation::$representation;
            const ZERO: Self = 0;
            #[inline(always)]
            fn widen(self) -> i128 {
                i128::from(self)
            }
            #[inline(always)]
            fn narrow(value: i128) -> Option<Self> {
                <$t>::try_from(value).ok()
            }
            #[inline(always)]
            fn to_bits(self) -> u64 {
                u64::from(self as $unsigned)
            }
        }
    };
}

integral_impl!(i8, u8, I8);
integral_impl!(u8, u8, U8);
integral_impl!(i16, u16, I16);
integral_impl!(u16, u16, U16);
integral_impl!(i32, u32, I32);
integral_impl!(u32, u32, U32);
integral_impl!(i64, u64, I64);
integral_impl!(u64, u64, U64);
