// crates/tdsp-cli/src/io/mod.rs

pub mod names_file;
