// crates/tdsp-core/src/color/format.rs
//
// Color -> text, producing only forms the codec parses back.

use core::fmt;

use crate::color::codec::{hex_from_color, is_near_hex, Base, ColorCodec};
use crate::color::model::Rgb;

impl ColorCodec<'_> {
    /// Text for `c`, preferring in order: a table name, `gray NN`,
    /// `#rrggbb`, then `r, g, b`. Negative channels are written as the
    /// magnitude plus a 3-character sign suffix, `red-++` for `(-1, 0, 0)`.
    pub fn to_text(&self, c: &Rgb) -> String {
        let negative = [c.red < 0.0, c.green < 0.0, c.blue < 0.0];
        let mut s = self.unsigned_text(&c.abs());
        if negative.iter().any(|&n| n) {
            s.extend(negative.iter().map(|&n| if n { '-' } else { '+' }));
        }
        s
    }

    fn unsigned_text(&self, c: &Rgb) -> String {
        let base = self.base();
        let channels = c.rgb_array();
        let hexable = channels
            .iter()
            .all(|&x| x <= base.ratio() && is_near_hex(x, base));

        let hex = hex_from_color(c, base);
        if hexable {
            if let Some(name) = self.table().name_of(hex) {
                return name.to_string();
            }
        }

        if c.red == c.green && c.green == c.blue {
            if let Some(text) = grey_text(c.red, base) {
                return text;
            }
        }

        if hexable {
            return format!("#{hex:06x}");
        }

        format!("{}, {}, {}", c.red, c.green, c.blue)
    }
}

/// `gray NN`, but only when parsing it back gives exactly `x`.
fn grey_text(x: f32, base: Base) -> Option<String> {
    let pct = base.to_fraction(x) * 100.0;
    let text = format!("gray {pct}");
    let back = base.from_fraction(pct / 100.0);
    (back == x).then_some(text)
}

/// Format `c` under `base` with the built-in names.
pub fn color_to_string(c: &Rgb, base: Base) -> String {
    ColorCodec::new(base).to_text(c)
}

impl fmt::Display for Rgb {
    /// Formats under [`Base::Normal`] with the built-in names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&color_to_string(self, Base::Normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_win() {
        assert_eq!(Rgb::rgb(1.0, 1.0, 1.0).to_string(), "white");
        assert_eq!(color_to_string(&Rgb::rgb(255.0, 0.0, 0.0), Base::Integer), "red");
    }

    #[test]
    fn signs_follow_magnitude() {
        assert_eq!(Rgb::rgb(-1.0, 0.0, 0.0).to_string(), "red-++");
        assert_eq!(Rgb::rgb(-1.0, -1.0, -1.0).to_string(), "white---");
    }

    #[test]
    fn grey_hex_and_triple() {
        assert_eq!(Rgb::rgb(0.5, 0.5, 0.5).to_string(), "gray 50");
        assert_eq!(
            color_to_string(&Rgb::rgb(18.0, 52.0, 86.0), Base::Integer),
            "#123456"
        );
        assert_eq!(Rgb::rgb(0.5, 0.25, 0.125).to_string(), "0.5, 0.25, 0.125");
    }

    #[test]
    fn out_of_range_is_not_clamped_into_a_name() {
        assert_eq!(Rgb::rgb(2.0, 0.0, 0.0).to_string(), "2, 0, 0");
    }
}
