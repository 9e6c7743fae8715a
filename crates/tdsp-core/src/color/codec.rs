// crates/tdsp-core/src/color/codec.rs
//
// Text -> color. Grammar, tried in order on the sign-free text:
//   1. a name from the table        "alice blue"
//   2. a prefixed hex literal       "#ff8000", "0xff8000"
//   3. a percentage grey            "gray 50", "grey 12.5"
//   4. a comma-separated triple     "0.1, 0.5,1"
// followed by an optional 3-character sign suffix ("red--+") that negates
// the channels marked '-'.

use core::str::FromStr;

use crate::color::model::Rgb;
use crate::color::names::{BuiltinNames, NameTable};
use crate::error::{Result, TdspError};
use crate::range::{EightBit, Normal, Ranged};

/// How far `x * denominator` may sit from an integer and still be treated
/// as an exact hex byte.
pub const NEAR_HEX_TOLERANCE: f32 = 1.0e-3;

const SIGN_SUFFIX_LEN: usize = 3;

static BUILTIN: BuiltinNames = BuiltinNames;

/// Numeric convention for text conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Base {
    /// Channels in `[0, 1]`.
    #[default]
    Normal,
    /// Channels in `[0, 255]`.
    Integer,
}

impl Base {
    /// Full-scale channel value.
    #[inline]
    pub fn ratio(self) -> f32 {
        match self {
            Base::Normal => 1.0,
            Base::Integer => 255.0,
        }
    }

    /// A byte `0..=255` expressed in this base.
    #[inline]
    pub fn from_byte(self, byte: f32) -> f32 {
        let b: Ranged<EightBit> = Ranged::new(byte);
        match self {
            Base::Normal => b.rescale::<Normal>().get(),
            Base::Integer => b.get(),
        }
    }

    /// A fraction `0..=1` expressed in this base.
    #[inline]
    pub fn from_fraction(self, x: f32) -> f32 {
        let n: Ranged<Normal> = Ranged::new(x);
        match self {
            Base::Normal => n.get(),
            Base::Integer => n.rescale::<EightBit>().get(),
        }
    }

    /// A channel in this base expressed as a fraction `0..=1`.
    #[inline]
    pub fn to_fraction(self, x: f32) -> f32 {
        match self {
            Base::Normal => x,
            Base::Integer => Ranged::<EightBit>::new(x).rescale::<Normal>().get(),
        }
    }

    #[inline]
    fn hex_denominator(self) -> f32 {
        match self {
            Base::Normal => 255.0,
            Base::Integer => 1.0,
        }
    }
}

/// Split `0xRRGGBB` into its bytes, red first, each expressed in `base`.
pub fn color_from_hex(hex: u32, base: Base) -> Rgb {
    let r = (hex >> 16) & 0xFF;
    let g = (hex >> 8) & 0xFF;
    let b = hex & 0xFF;
    Rgb::rgb(
        base.from_byte(r as f32),
        base.from_byte(g as f32),
        base.from_byte(b as f32),
    )
}

/// Pack a color into `0xRRGGBB`. Channels are rounded to the nearest byte
/// and clamped to `0..=255`.
pub fn hex_from_color(c: &Rgb, base: Base) -> u32 {
    let byte = |x: f32| -> u32 { (base.to_fraction(x) * 255.0).round().clamp(0.0, 255.0) as u32 };
    (byte(c.red) << 16) | (byte(c.green) << 8) | byte(c.blue)
}

/// True when `x` is (within rounding) an exact byte value in `base`, so hex
/// text can represent it without loss.
pub fn is_near_hex(x: f32, base: Base) -> bool {
    let d = x * base.hex_denominator();
    (d - d.round()).abs() <= NEAR_HEX_TOLERANCE
}

/// Converts between text and colors under one [`Base`], resolving names
/// through a [`NameTable`].
#[derive(Clone, Copy)]
pub struct ColorCodec<'a> {
    base: Base,
    table: &'a dyn NameTable,
}

impl ColorCodec<'static> {
    /// A codec over the built-in name table.
    pub fn new(base: Base) -> Self {
        Self {
            base,
            table: &BUILTIN,
        }
    }
}

impl Default for ColorCodec<'static> {
    fn default() -> Self {
        Self::new(Base::default())
    }
}

impl<'a> ColorCodec<'a> {
    pub fn with_table(base: Base, table: &'a dyn NameTable) -> Self {
        Self { base, table }
    }

    #[inline]
    pub fn base(&self) -> Base {
        self.base
    }

    #[inline]
    pub fn table(&self) -> &'a dyn NameTable {
        self.table
    }

    /// Parse `text`, or `None` if it is not a color.
    pub fn to_color(&self, text: &str) -> Option<Rgb> {
        self.parse(text).ok()
    }

    /// Parse `text` into `out`. On failure `out` is left untouched and
    /// `false` is returned.
    pub fn to_color_into(&self, text: &str, out: &mut Rgb) -> bool {
        match self.parse(text) {
            Ok(c) => {
                *out = c;
                true
            }
            Err(_) => false,
        }
    }

    /// Parse `text`; errors name the offending text.
    pub fn parse(&self, text: &str) -> Result<Rgb> {
        let signs = text
            .bytes()
            .rev()
            .take_while(|&b| b == b'+' || b == b'-')
            .count();

        if signs == 0 {
            return self.parse_unsigned(text);
        }

        let bad_suffix = || TdspError::BadSignSuffix {
            text: text.to_string(),
        };

        if signs != SIGN_SUFFIX_LEN || signs == text.len() {
            return Err(bad_suffix());
        }

        let (prefix, suffix) = text.split_at(text.len() - SIGN_SUFFIX_LEN);
        let mut c = self.parse_unsigned(prefix).map_err(|e| {
            log::trace!("sign suffix on {text:?}: prefix failed: {e}");
            bad_suffix()
        })?;

        for (i, s) in suffix.bytes().enumerate() {
            if s == b'-' {
                c[i] = -c[i];
            }
        }
        Ok(c)
    }

    fn parse_unsigned(&self, text: &str) -> Result<Rgb> {
        let syntax = |reason: &str| TdspError::ParseSyntax {
            text: text.to_string(),
            reason: reason.to_string(),
        };

        if text.is_empty() {
            return Err(syntax("empty color"));
        }

        if let Some(hex) = self.table.lookup(text) {
            return Ok(color_from_hex(hex, self.base));
        }

        if let Some(digits) = strip_hex_prefix(text) {
            let hex = parse_hex_digits(digits).ok_or_else(|| syntax("bad hex literal"))?;
            return Ok(color_from_hex(hex, self.base));
        }

        if let Some(pct) = text
            .strip_prefix("gray ")
            .or_else(|| text.strip_prefix("grey "))
        {
            let gray = parse_percent(pct).ok_or_else(|| syntax("bad grey percentage"))?;
            let gray = self.base.from_fraction(gray);
            return Ok(Rgb::rgb(gray, gray, gray));
        }

        match parse_comma_triple(text) {
            Ok(c) => Ok(c),
            Err(reason) if looks_numeric(text) => Err(syntax(reason)),
            Err(reason) => {
                log::trace!("{text:?}: not a name, hex, grey or triple ({reason})");
                Err(TdspError::UnknownName {
                    text: text.to_string(),
                })
            }
        }
    }
}

impl FromStr for Rgb {
    type Err = TdspError;

    /// Parses under [`Base::Normal`] with the built-in names.
    fn from_str(s: &str) -> Result<Self> {
        ColorCodec::new(Base::Normal).parse(s)
    }
}

/// Non-failing parse with the built-in names.
pub fn string_to_color(text: &str, base: Base) -> Option<Rgb> {
    ColorCodec::new(base).to_color(text)
}

/// Strict parse with the built-in names.
pub fn parse_color(text: &str, base: Base) -> Result<Rgb> {
    ColorCodec::new(base).parse(text)
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix('#')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"))
}

fn parse_hex_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// `NN` of "gray NN", as a fraction.
fn parse_percent(text: &str) -> Option<f32> {
    let mut rest = text;
    let pct = take_number(&mut rest)?;
    if !rest.is_empty() {
        return None;
    }
    Some(pct / 100.0)
}

fn looks_numeric(text: &str) -> bool {
    text.contains(',')
        || text
            .trim_start()
            .starts_with(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
}

fn parse_comma_triple(text: &str) -> core::result::Result<Rgb, &'static str> {
    let mut rest = text;

    let r = take_number(&mut rest).ok_or("expected a number")?;
    take_comma(&mut rest)?;
    let g = take_number(&mut rest).ok_or("expected a number")?;
    take_comma(&mut rest)?;
    let b = take_number(&mut rest).ok_or("expected a number")?;

    if !rest.is_empty() {
        return Err("extra characters after end");
    }
    Ok(Rgb::rgb(r, g, b))
}

fn take_comma(rest: &mut &str) -> core::result::Result<(), &'static str> {
    *rest = rest.strip_prefix(',').ok_or("expected a comma")?;
    *rest = rest.trim_start_matches(' ');
    Ok(())
}

/// Consume a decimal float (leading whitespace allowed, trailing spaces
/// skipped) from the front of `rest`.
fn take_number(rest: &mut &str) -> Option<f32> {
    let s = rest.trim_start();
    let b = s.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return None;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let x = s[..i].parse::<f32>().ok()?;
    *rest = s[i..].trim_start_matches(' ');
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        (a.red - b.red).abs() < 1e-6
            && (a.green - b.green).abs() < 1e-6
            && (a.blue - b.blue).abs() < 1e-6
    }

    #[test]
    fn take_number_prefixes() {
        let mut s = "  -1.5e2 , x";
        assert_eq!(take_number(&mut s), Some(-150.0));
        assert_eq!(s, ", x");

        let mut s = "3.e";
        assert_eq!(take_number(&mut s), Some(3.0));
        assert_eq!(s, "e");

        let mut s = ".";
        assert_eq!(take_number(&mut s), None);
    }

    #[test]
    fn hex_literals() {
        let c = ColorCodec::new(Base::Integer);
        assert_eq!(c.parse("#ff8000").unwrap(), Rgb::rgb(255.0, 128.0, 0.0));
        assert_eq!(c.parse("0x0000FF").unwrap(), Rgb::rgb(0.0, 0.0, 255.0));
        assert!(matches!(c.parse("#ff80zz"), Err(TdspError::ParseSyntax { .. })));
        assert!(matches!(c.parse("#1234567"), Err(TdspError::ParseSyntax { .. })));
        assert!(matches!(c.parse("#+12"), Err(TdspError::ParseSyntax { .. })));
    }

    #[test]
    fn grey_forms() {
        let n = ColorCodec::new(Base::Normal);
        assert!(close(n.parse("grey 25").unwrap(), Rgb::rgb(0.25, 0.25, 0.25)));
        let i = ColorCodec::new(Base::Integer);
        assert!(close(i.parse("gray 100").unwrap(), Rgb::rgb(255.0, 255.0, 255.0)));
        assert!(matches!(n.parse("gray 50x"), Err(TdspError::ParseSyntax { .. })));
        assert!(matches!(n.parse("gray "), Err(TdspError::ParseSyntax { .. })));
    }

    #[test]
    fn comma_triples() {
        let n = ColorCodec::new(Base::Normal);
        assert_eq!(n.parse("0.5,0.25, 1").unwrap(), Rgb::rgb(0.5, 0.25, 1.0));
        assert_eq!(n.parse("1 , 2 ,  3  ").unwrap(), Rgb::rgb(1.0, 2.0, 3.0));
        assert!(matches!(n.parse("1, 2, 3, 4"), Err(TdspError::ParseSyntax { .. })));
        assert!(matches!(n.parse("1 2 3"), Err(TdspError::ParseSyntax { .. })));
    }

    #[test]
    fn failure_leaves_output_untouched() {
        let n = ColorCodec::new(Base::Normal);
        let mut out = Rgb::rgb(0.1, 0.2, 0.3);
        assert!(!n.to_color_into("no such color", &mut out));
        assert_eq!(out, Rgb::rgb(0.1, 0.2, 0.3));
        assert!(n.to_color_into("blue", &mut out));
        assert_eq!(out, Rgb::rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn sign_suffix_rules() {
        let n = ColorCodec::new(Base::Normal);
        assert_eq!(n.parse("white-+-").unwrap(), Rgb::rgb(-1.0, 1.0, -1.0));
        assert!(matches!(n.parse("red-"), Err(TdspError::BadSignSuffix { .. })));
        assert!(matches!(n.parse("red----"), Err(TdspError::BadSignSuffix { .. })));
        assert!(matches!(n.parse("+++"), Err(TdspError::BadSignSuffix { .. })));
        assert!(matches!(n.parse("nope+++"), Err(TdspError::BadSignSuffix { .. })));
    }

    #[test]
    fn near_hex() {
        assert!(is_near_hex(128.0 / 255.0, Base::Normal));
        assert!(!is_near_hex(0.5, Base::Normal));
        assert!(is_near_hex(17.0, Base::Integer));
        assert!(!is_near_hex(17.5, Base::Integer));
    }

    #[test]
    fn from_str_uses_normal_base() {
        let c: Rgb = "yellow".parse().unwrap();
        assert_eq!(c, Rgb::rgb(1.0, 1.0, 0.0));
    }
}
