use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::format::FormatMode;
use crate::keeper::indexes;
use crate::lookup::LookupIndex;
use crate::metadata::Enumeration;
use crate::representation::{Integral, Representation};
use crate::settings::Settings;

// ------------- Dnum -------------
/// Metadata operations for the enumeration type `E`.
///
/// Every operation reads the same cached [`LookupIndex`], built on the first
/// call for `E`. Value arguments accept any of the eight integral types and are
/// checked against `E`'s representation first.
pub struct Dnum<E: Enumeration>(PhantomData<E>);

impl<E: Enumeration> Dnum<E> {
    pub fn index() -> Arc<LookupIndex<E>> {
        indexes().keep::<E>()
    }

    /// Constant names in declaration order.
    pub fn names() -> Vec<&'static str> {
        Self::index().names()
    }
    pub fn values() -> Vec<E::Underlying> {
        Self::index().values()
    }
    /// The declared values converted to `I`, failing if any does not fit.
    pub fn values_as<I: Integral>() -> Result<Vec<I>> {
        let index = Self::index();
        index
            .values()
            .into_iter()
            .map(|value| {
                Representation::narrow::<I, _>(value).map_err(|overflow| overflow.within(E::NAME))
            })
            .collect()
    }
    pub fn constants() -> Vec<E> {
        Self::index().constants()
    }
    pub fn underlying_type() -> Representation {
        Representation::of::<E>()
    }

    /// True only if a constant is declared with exactly this value; flag
    /// combinations are not decomposed.
    pub fn is_defined<I: Integral>(value: I) -> Result<bool> {
        let index = Self::index();
        let value = index.convert(value)?;
        Ok(index.contains_value(value))
    }
    /// Exact-case name lookup.
    pub fn is_defined_name(name: &str) -> bool {
        Self::index().contains_name(name)
    }
    /// `Ok(None)` for a value that fits but is not declared.
    pub fn name<I: Integral>(value: I) -> Result<Option<&'static str>> {
        let index = Self::index();
        let value = index.convert(value)?;
        Ok(index.name(value))
    }
    pub fn to_constant<I: Integral>(value: I) -> Result<E> {
        Self::index().convert(value).map(E::from_underlying)
    }

    pub fn parse(text: &str, ignore_case: bool) -> Result<E> {
        Self::index().parse(text, ignore_case).map(E::from_underlying)
    }
    pub fn try_parse(text: &str, ignore_case: bool) -> Option<E> {
        Self::parse(text, ignore_case).ok()
    }

    pub fn format<I: Integral>(value: I, mode: FormatMode) -> Result<String> {
        Self::format_with(value, mode, Settings::global())
    }
    pub fn format_with<I: Integral>(
        value: I,
        mode: FormatMode,
        settings: &Settings,
    ) -> Result<String> {
        Self::index().format(value, mode, settings)
    }

    pub fn description<I: Integral>(value: I) -> Result<Option<&'static str>> {
        let index = Self::index();
        let value = index.convert(value)?;
        Ok(index.description(value))
    }
    pub fn descriptions() -> Vec<&'static str> {
        Self::index().descriptions()
    }
    /// False for an undeclared value, and for a constant whose description is
    /// only its name.
    pub fn has_description<I: Integral>(value: I) -> Result<bool> {
        let index = Self::index();
        let value = index.convert(value)?;
        Ok(index.has_description(value))
    }
    pub fn has_description_name(name: &str) -> bool {
        Self::index().has_description_named(name)
    }
    pub fn parse_description(text: &str, ignore_case: bool) -> Result<Vec<E>> {
        let values = Self::index().parse_description(text, ignore_case)?;
        Ok(values.into_iter().map(E::from_underlying).collect())
    }
    /// `None` where [`Dnum::parse_description`] would fail.
    pub fn try_parse_description(text: &str, ignore_case: bool) -> Option<Vec<E>> {
        Self::parse_description(text, ignore_case).ok()
    }
}

// ------------- EnumerationExt -------------
/// The constant forms of the [`Dnum`] operations. A constant is always within
/// its own representation, so none of these can overflow.
pub trait EnumerationExt: Enumeration {
    fn name(self) -> Option<&'static str> {
        Dnum::<Self>::index().name(self.underlying())
    }
    fn is_defined(self) -> bool {
        Dnum::<Self>::index().contains_value(self.underlying())
    }
    fn description(self) -> Option<&'static str> {
        Dnum::<Self>::index().description(self.underlying())
    }
    fn has_description(self) -> bool {
        Dnum::<Self>::index().has_description(self.underlying())
    }
    fn format(self, mode: FormatMode) -> String {
        Dnum::<Self>::index().format_underlying(self.underlying(), mode)
    }
}

impl<E: Enumeration> EnumerationExt for E {}
