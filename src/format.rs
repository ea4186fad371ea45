use std::fmt;
use std::str::FromStr;

use crate::error::{DnumError, Result};
use crate::lookup::LookupIndex;
use crate::metadata::Enumeration;
use crate::representation::{Integral, Representation};
use crate::settings::{FormatOverflow, Settings};

// ------------- FormatMode -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatMode {
    /// The constant's name, a comma-joined flag list, or the decimal numeral.
    General,
    Decimal,
    /// Zero padded to twice the representation's byte width.
    Hex { uppercase: bool },
}

impl FromStr for FormatMode {
    type Err = DnumError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "g" | "G" => Ok(Self::General),
            "d" | "D" => Ok(Self::Decimal),
            "x" => Ok(Self::Hex { uppercase: false }),
            "X" => Ok(Self::Hex { uppercase: true }),
            _ => Err(DnumError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::General => write!(f, "g"),
            Self::Decimal => write!(f, "d"),
            Self::Hex { uppercase: false } => write!(f, "x"),
            Self::Hex { uppercase: true } => write!(f, "X"),
        }
    }
}

pub const FLAG_SEPARATOR: &str = ", ";

impl<E: Enumeration> LookupIndex<E> {
    /// Formats any integral input.
    ///
    /// Input outside the representation's domain fails with the kind chosen by
    /// `settings.format_overflow`, whatever the mode.
    pub fn format<I: Integral>(
        &self,
        value: I,
        mode: FormatMode,
        settings: &Settings,
    ) -> Result<String> {
        let value = match Representation::narrow::<E::Underlying, I>(value) {
            Ok(value) => value,
            Err(overflow) => {
                return Err(match settings.format_overflow {
                    FormatOverflow::Overflow => overflow.within(E::NAME),
                    FormatOverflow::Invalid => self.invalid(format!(
                        "{} cannot be formatted, it does not fit {}",
                        overflow.value, overflow.representation
                    )),
                });
            }
        };
        Ok(self.format_underlying(value, mode))
    }
    pub fn format_underlying(&self, value: E::Underlying, mode: FormatMode) -> String {
        let width = self.representation().bytes() * 2;
        match mode {
            FormatMode::General => self.render(value),
            FormatMode::Decimal => value.to_string(),
            FormatMode::Hex { uppercase: false } => format!("{:0width$x}", value, width = width),
            FormatMode::Hex { uppercase: true } => format!("{:0width$X}", value, width = width),
        }
    }
    /// General format: a declared name, else a flag combination, else the
    /// decimal numeral.
    pub fn render(&self, value: E::Underlying) -> String {
        if let Some(name) = self.name(value) {
            return name.to_string();
        }
        self.decompose(value)
            .map(|names| names.join(FLAG_SEPARATOR))
            .unwrap_or_else(|| value.to_string())
    }
    // Takes declared values from the largest bit pattern down while their bits
    // are still left over. Only succeeds if nothing is left over at the end.
    fn decompose(&self, value: E::Underlying) -> Option<Vec<&'static str>> {
        let mut remaining = value.to_bits();
        if remaining == 0 {
            return None;
        }
        let mut names = Vec::new();
        for member in self.flags() {
            let bits = member.value().to_bits();
            if remaining & bits == bits {
                remaining &= !bits;
                names.push(member.name());
            }
            if remaining == 0 {
                break;
            }
        }
        if remaining != 0 {
            return None;
        }
        names.reverse();
        Some(names)
    }
}
