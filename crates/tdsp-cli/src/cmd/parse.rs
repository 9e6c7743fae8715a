// crates/tdsp-cli/src/cmd/parse.rs

use clap::Args;
use tdsp_core::color::hex_from_color;

use super::{Globals, Session};

#[derive(Args)]
pub struct ParseArgs {
    /// Color text: a name, #rrggbb, "gray NN", "r, g, b", with an optional +/- suffix
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Also print the 0xRRGGBB value
    #[arg(long, default_value_t = false)]
    pub hex: bool,
}

pub fn run(args: ParseArgs, g: &Globals) -> anyhow::Result<()> {
    let session = Session::open(g)?;
    let c = session.parse(&args.text)?;

    println!("{} {} {}", c.red, c.green, c.blue);
    if args.hex {
        println!("0x{:06X}", hex_from_color(&c, g.base));
    }
    Ok(())
}
