// crates/tdsp-cli/src/cmd/format.rs

use clap::Args;
use tdsp_core::color::Rgb;

use super::{Globals, Session};

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct FormatArgs {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

pub fn run(args: FormatArgs, g: &Globals) -> anyhow::Result<()> {
    let session = Session::open(g)?;
    let c = Rgb::rgb(args.red, args.green, args.blue);
    println!("{}", session.codec().to_text(&c));
    Ok(())
}
