// crates/tdsp-cli/src/io/names_file.rs

use anyhow::{Context, Result};
use tdsp_core::color::NameMap;

/// Load an X11 rgb.txt file on top of the built-in names.
pub fn load_names(path: &str) -> Result<NameMap> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read names {path}"))?;
    let mut table = NameMap::with_builtin();
    let added = table
        .extend_rgb_txt(&text)
        .with_context(|| format!("parse names {path}"))?;
    log::info!("loaded {added} names from {path}");
    Ok(table)
}
