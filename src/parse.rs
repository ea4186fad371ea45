use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::error::{DnumError, Result};
use crate::lookup::LookupIndex;
use crate::metadata::Enumeration;
use crate::representation::{Integral, Overflow};

lazy_static! {
    static ref INTEGER_LITERAL: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
}

impl<E: Enumeration> LookupIndex<E> {
    /// Parses either an integer literal or a comma-separated list of constant names.
    ///
    /// A literal may name a value no constant is declared with, as long as it
    /// fits the representation. Names in a list are combined with bitwise or.
    pub fn parse(&self, text: &str, ignore_case: bool) -> Result<E::Underlying> {
        let text = text.trim();
        if text.is_empty() {
            return Err(self.invalid("must name a constant or an integral value".to_string()));
        }
        if INTEGER_LITERAL.is_match(text) {
            return self.parse_literal(text);
        }
        let mut combined = E::Underlying::ZERO;
        for segment in text.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(self.invalid(format!("'{}' contains an empty name", text)));
            }
            match self.member_named(segment, ignore_case) {
                Some(member) => combined = combined | member.value(),
                None => {
                    trace!(enumeration = E::NAME, segment, ignore_case, "no constant named");
                    return Err(self.invalid(format!("'{}' is not a declared constant", segment)));
                }
            }
        }
        Ok(combined)
    }
    fn parse_literal(&self, text: &str) -> Result<E::Underlying> {
        // a literal too long even for i128 is as out of domain as any other
        let overflow = || {
            Overflow::new(self.representation(), text.trim_start_matches('+')).within(E::NAME)
        };
        let wide = text.parse::<i128>().map_err(|_| overflow())?;
        E::Underlying::narrow(wide).ok_or_else(overflow)
    }
    pub(crate) fn invalid(&self, message: String) -> DnumError {
        DnumError::Invalid {
            enumeration: E::NAME,
            message,
        }
    }
}
