// crates/tdsp-cli/src/cmd/fade.rs

use anyhow::{bail, Context};
use clap::{Args, ValueEnum};
use tdsp_core::signal::fade::{fade_to, Fade, FadeCurve};
use tdsp_core::validate::validate_fader;

use super::{Globals, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CurveArg {
    Linear,
    Squared,
    Sqrt,
}

impl From<CurveArg> for FadeCurve {
    fn from(c: CurveArg) -> Self {
        match c {
            CurveArg::Linear => FadeCurve::Linear,
            CurveArg::Squared => FadeCurve::Squared,
            CurveArg::Sqrt => FadeCurve::SquareRoot,
        }
    }
}

#[derive(Args)]
#[command(allow_negative_numbers = true)]
pub struct FadeArgs {
    /// Color at fader 0
    #[arg(allow_hyphen_values = true)]
    pub from: String,

    /// Color at fader 1
    #[arg(allow_hyphen_values = true)]
    pub to: String,

    /// Fader position; values outside 0..1 extrapolate
    #[arg(long, default_value_t = 0.5)]
    pub fader: f32,

    #[arg(long, value_enum, default_value_t = CurveArg::Linear)]
    pub curve: CurveArg,

    #[arg(long, default_value_t = 0.0)]
    pub begin: f32,

    #[arg(long, default_value_t = 1.0)]
    pub end: f32,

    /// Print STEPS+1 evenly spaced fader positions from 0 to 1 instead of --fader
    #[arg(long)]
    pub steps: Option<u32>,
}

pub fn run(args: FadeArgs, g: &Globals) -> anyhow::Result<()> {
    let fade = Fade::new(args.begin, args.end, args.curve.into()).context("fade settings")?;
    let session = Session::open(g)?;
    let a = session.parse(&args.from)?;
    let b = session.parse(&args.to)?;
    let codec = session.codec();

    match args.steps {
        Some(0) => bail!("--steps must be at least 1"),
        Some(n) => {
            log::info!("fade {n} steps, {:?}", fade);
            for i in 0..=n {
                let fader = i as f32 / n as f32;
                let c = fade_to(fader, &fade, &a, &b);
                println!("{fader} {}", codec.to_text(&c));
            }
        }
        None => {
            validate_fader(args.fader)?;
            log::debug!("fade at {}, {:?}", args.fader, fade);
            let c = fade_to(args.fader, &fade, &a, &b);
            println!("{}", codec.to_text(&c));
        }
    }
    Ok(())
}
