// crates/tdsp-cli/src/cmd/mod.rs

use anyhow::{Context, Result};
use clap::ValueEnum;
use tdsp_core::color::{Base, ColorCodec, NameMap, Rgb};

use crate::io::names_file;

pub mod distance;
pub mod fade;
pub mod format;
pub mod hex;
pub mod names;
pub mod parse;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BaseArg {
    Normal,
    Integer,
}

impl From<BaseArg> for Base {
    fn from(b: BaseArg) -> Self {
        match b {
            BaseArg::Normal => Base::Normal,
            BaseArg::Integer => Base::Integer,
        }
    }
}

/// Flags shared by every subcommand.
pub struct Globals {
    pub base: Base,
    pub names: Option<String>,
}

/// The name table a command runs against: built-in, or built-in plus a
/// user rgb.txt.
pub struct Session {
    base: Base,
    custom: Option<NameMap>,
}

impl Session {
    pub fn open(g: &Globals) -> Result<Self> {
        let custom = match g.names.as_deref() {
            Some(path) => Some(names_file::load_names(path)?),
            None => None,
        };
        Ok(Self {
            base: g.base,
            custom,
        })
    }

    pub fn codec(&self) -> ColorCodec<'_> {
        match &self.custom {
            Some(m) => ColorCodec::with_table(self.base, m),
            None => ColorCodec::new(self.base),
        }
    }

    pub fn parse(&self, text: &str) -> Result<Rgb> {
        self.codec()
            .parse(text)
            .with_context(|| format!("parse color {text:?}"))
    }
}
