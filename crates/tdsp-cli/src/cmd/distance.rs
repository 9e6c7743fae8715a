// crates/tdsp-cli/src/cmd/distance.rs

use clap::Args;
use tdsp_core::color::{distance2, greyness2};

use super::{Globals, Session};

#[derive(Args)]
pub struct DistanceArgs {
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    #[arg(allow_hyphen_values = true)]
    pub b: String,
}

pub fn run(args: DistanceArgs, g: &Globals) -> anyhow::Result<()> {
    let session = Session::open(g)?;
    let a = session.parse(&args.a)?;
    let b = session.parse(&args.b)?;

    println!("distance2    = {}", distance2(&a, &b));
    println!("greyness2(a) = {}", greyness2(&a));
    println!("greyness2(b) = {}", greyness2(&b));
    Ok(())
}
