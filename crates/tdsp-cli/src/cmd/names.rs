// crates/tdsp-cli/src/cmd/names.rs

use clap::Args;
use tdsp_core::color::color_from_hex;

use super::{Globals, Session};

#[derive(Args)]
pub struct NamesArgs {
    /// Print each name's 0xRRGGBB value and channels after it
    #[arg(long, default_value_t = false)]
    pub values: bool,
}

pub fn run(args: NamesArgs, g: &Globals) -> anyhow::Result<()> {
    let session = Session::open(g)?;
    let codec = session.codec();
    let table = codec.table();

    let names = table.names();
    log::info!("{} names", names.len());
    for name in names {
        if !args.values {
            println!("{name}");
            continue;
        }
        if let Some(hex) = table.lookup(name) {
            let c = color_from_hex(hex, g.base);
            println!("{name}\t0x{hex:06X}\t{} {} {}", c.red, c.green, c.blue);
        }
    }
    Ok(())
}
