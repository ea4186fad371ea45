use tracing::trace;

use crate::error::Result;
use crate::lookup::{fold, LookupIndex, Member};
use crate::metadata::Enumeration;

impl<E: Enumeration> LookupIndex<E> {
    pub fn description(&self, value: E::Underlying) -> Option<&'static str> {
        self.member(value).map(Member::description)
    }
    pub fn descriptions(&self) -> Vec<&'static str> {
        self.members().iter().map(Member::description).collect()
    }
    pub fn has_description(&self, value: E::Underlying) -> bool {
        self.member(value).is_some_and(Member::has_description)
    }
    pub fn has_description_named(&self, name: &str) -> bool {
        self.member_named(name, false)
            .is_some_and(Member::has_description)
    }

    /// Every constant whose description matches `text`, in declaration order.
    ///
    /// Exact-case matching uses the description table directly. Ignoring case
    /// scans all constants instead, so constants whose descriptions differ only
    /// in case come back interleaved in declaration order rather than grouped.
    pub fn parse_description(&self, text: &str, ignore_case: bool) -> Result<Vec<E::Underlying>> {
        let matched: Vec<E::Underlying> = if ignore_case {
            let folded = fold(text);
            self.members()
                .iter()
                .filter(|member| fold(member.description()) == folded)
                .map(Member::value)
                .collect()
        } else {
            self.by_description()
                .lookup(text)
                .iter()
                .map(|&position| self.members()[position].value())
                .collect()
        };
        if matched.is_empty() {
            trace!(enumeration = E::NAME, text, ignore_case, "no constant described");
            return Err(self.invalid(format!("no constant is described as '{}'", text)));
        }
        Ok(matched)
    }
}
