//! The boundary to whatever declares an enumeration's constants.
//!
//! An [`Enumeration`] is a transparent wrapper around its underlying integral
//! value, so values that are representable but not declared (such as the
//! result of parsing `"8"` for a type whose largest constant is `4`) are still
//! legal values of the type. The declared constants themselves are handed over
//! once, in declaration order, by [`Enumeration::declarations`]. Most types get
//! their implementation from the [`enumeration!`](crate::enumeration) macro.

use std::fmt;
use std::hash::Hash;

use crate::representation::Integral;

// ------------- Declaration -------------
/// One `(name, value, description?)` triple as declared by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<U: Integral> {
    name: &'static str,
    value: U,
    description: Option<&'static str>,
}

impl<U: Integral> Declaration<U> {
    pub const fn new(name: &'static str, value: U, description: Option<&'static str>) -> Self {
        Self {
            name,
            value,
            description,
        }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn value(&self) -> U {
        self.value
    }
    pub fn description(&self) -> Option<&'static str> {
        self.description
    }
}

// ------------- Enumeration -------------
pub trait Enumeration: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Used in error messages and log fields.
    const NAME: &'static str;
    type Underlying: Integral;
    /// The declared constants in declaration order.
    ///
    /// Called once per process, when the index for this type is first built.
    /// It may read other enumerations through [`Dnum`](crate::Dnum), but must
    /// not call back into [`Dnum`](crate::Dnum) for the same type.
    fn declarations() -> Vec<Declaration<Self::Underlying>>;
    fn from_underlying(value: Self::Underlying) -> Self;
    fn underlying(self) -> Self::Underlying;
}
