//! Dnum – type-safe metadata for enumeration-like integral types.
//!
//! An enumeration here is a closed, named set of integral constants stored in
//! one of eight representations (`i8` through `u64`). Dnum answers the usual
//! questions about such a type without casting to an untyped number at every
//! call site:
//! * which names, values and constants are declared, in declaration order,
//! * whether a value or a name is defined, and which name a value has,
//! * parsing text (an integer literal, or comma-separated names combined as
//!   flags) and formatting values (general, decimal, hex),
//! * human-readable descriptions, including case-insensitive lookup and
//!   several constants sharing one description.
//!
//! Every integral argument is checked against the type's representation
//! first, and a value that does not fit is reported as
//! [`DnumError::Overflow`] instead of being truncated.
//!
//! ## Modules
//! * [`representation`] – The [`Representation`] kinds and the [`Integral`]
//!   trait with overflow-checked conversion.
//! * [`metadata`] – The [`Enumeration`] trait through which a type declares its
//!   constants, usually implemented with [`enumeration!`].
//! * [`lookup`] – The per-type [`LookupIndex`] tables, built once from the
//!   declarations.
//! * [`keeper`] – The process-wide cache that builds each index on first use.
//! * [`format`] – [`FormatMode`] and value rendering.
//! * [`settings`] – Configuration read with the `config` crate.
//!
//! ## Quick Start
//! ```
//! use dnum::{Dnum, DnumError, EnumerationExt, FormatMode};
//!
//! dnum::enumeration! {
//!     pub struct Color: u8 {
//!         None = 0,
//!         #[description = "Ruby"]
//!         Red = 1,
//!         Green = 2,
//!         Blue = 4,
//!     }
//! }
//!
//! assert_eq!(Dnum::<Color>::names(), vec!["None", "Red", "Green", "Blue"]);
//! assert_eq!(Dnum::<Color>::parse("blue", true).unwrap(), Color::Blue);
//! assert_eq!(Dnum::<Color>::parse("Red, Green", false).unwrap().to_string(), "Red, Green");
//! assert_eq!(Dnum::<Color>::format(2, FormatMode::Decimal).unwrap(), "2");
//! assert_eq!(Color::Red.description(), Some("Ruby"));
//! assert!(matches!(Dnum::<Color>::to_constant(256), Err(DnumError::Overflow { .. })));
//! ```
//!
//! ## Lifecycle
//! The lookup tables for a type are built the first time any operation is
//! requested for it and are shared, read-only, for the rest of the process.
//! Concurrent first accesses result in a single build.

mod macros;

pub mod description;
pub mod dnum;
pub mod error;
pub mod format;
pub mod keeper;
pub mod lookup;
pub mod metadata;
pub mod parse;
pub mod representation;
pub mod settings;

pub use crate::dnum::{Dnum, EnumerationExt};
pub use crate::error::{DnumError, Result};
pub use crate::format::FormatMode;
pub use crate::lookup::{LookupIndex, Member};
pub use crate::metadata::{Declaration, Enumeration};
pub use crate::representation::{Integral, Overflow, Representation};
pub use crate::settings::{FormatOverflow, Settings};
