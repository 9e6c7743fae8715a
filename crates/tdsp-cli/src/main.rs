// crates/tdsp-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

use cmd::{BaseArg, Globals};

#[derive(Parser)]
#[command(name = "tdsp-cli")]
#[command(about = "Color text, fades and distances from the command line", long_about = None)]
pub struct Cli {
    /// Channel convention: normal = 0..1, integer = 0..255
    #[arg(long, global = true, value_enum, default_value_t = BaseArg::Normal)]
    pub base: BaseArg,

    /// X11 rgb.txt file whose names are added to the built-in table
    #[arg(long, global = true)]
    pub names: Option<String>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse color text and print its channels
    Parse(cmd::parse::ParseArgs),

    /// Print the canonical text for a color given as three channels
    Format(cmd::format::FormatArgs),

    /// Print the 0xRRGGBB value of color text
    Hex(cmd::hex::HexArgs),

    /// Crossfade two colors
    Fade(cmd::fade::FadeArgs),

    /// Squared distance between two colors, and how grey each one is
    Distance(cmd::distance::DistanceArgs),

    /// List the names in the active name table
    Names(cmd::names::NamesArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let globals = Globals {
        base: cli.base.into(),
        names: cli.names,
    };
    log::debug!("base={:?} names={:?}", globals.base, globals.names);

    match cli.cmd {
        Commands::Parse(args) => cmd::parse::run(args, &globals),
        Commands::Format(args) => cmd::format::run(args, &globals),
        Commands::Hex(args) => cmd::hex::run(args, &globals),
        Commands::Fade(args) => cmd::fade::run(args, &globals),
        Commands::Distance(args) => cmd::distance::run(args, &globals),
        Commands::Names(args) => cmd::names::run(args, &globals),
    }
}
