//! Process-wide settings, read with the `config` crate.
//!
//! Sources, later ones overriding earlier ones:
//! * built-in defaults,
//! * an optional `dnum.toml` (or any other format `config` recognizes) in the
//!   working directory,
//! * `DNUM_*` environment variables, e.g. `DNUM_FORMAT_OVERFLOW=overflow`.

use config::{Config, Environment, File, FileFormat};
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::warn;

use crate::error::Result;

/// Which failure formatting reports for a value that does not fit the
/// representation. Every other operation always reports an overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatOverflow {
    #[default]
    Invalid,
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub format_overflow: FormatOverflow,
}

lazy_static! {
    static ref SETTINGS: Settings = Settings::load().unwrap_or_else(|e| {
        warn!(error = %e, "falling back to default settings");
        Settings::default()
    });
}

impl Settings {
    /// Loaded once, on first use.
    pub fn global() -> &'static Settings {
        &SETTINGS
    }
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("dnum").required(false))
            .add_source(Environment::with_prefix("DNUM"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
