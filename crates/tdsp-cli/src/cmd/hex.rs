// crates/tdsp-cli/src/cmd/hex.rs

use clap::Args;
use tdsp_core::color::{hex_from_color, is_near_hex};

use super::{Globals, Session};

#[derive(Args)]
pub struct HexArgs {
    #[arg(allow_hyphen_values = true)]
    pub text: String,
}

pub fn run(args: HexArgs, g: &Globals) -> anyhow::Result<()> {
    let session = Session::open(g)?;
    let c = session.parse(&args.text)?;

    let exact = c.rgb_array().iter().all(|&x| is_near_hex(x, g.base));
    if !exact {
        eprintln!("warning: {:?} is not an exact byte color; rounded", args.text);
    }
    println!("0x{:06X}", hex_from_color(&c, g.base));
    Ok(())
}
