// crates/tdsp-core/src/color/names.rs
//
// Color name tables. Lookups are exact and case-sensitive; multi-word names
// are written with single spaces ("alice blue").

use std::collections::BTreeMap;

use phf::phf_map;

use crate::error::{Result, TdspError};

/// A read-only mapping between color names and 24-bit `0xRRGGBB` values.
pub trait NameTable {
    fn lookup(&self, name: &str) -> Option<u32>;

    /// The canonical name for a value, used when formatting.
    fn name_of(&self, hex: u32) -> Option<&str>;

    /// All names, sorted.
    fn names(&self) -> Vec<&str>;
}

/// The X11 / CSS names compiled into the library.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinNames;

impl NameTable for BuiltinNames {
    #[inline]
    fn lookup(&self, name: &str) -> Option<u32> {
        NAMES.get(name).copied()
    }

    #[inline]
    fn name_of(&self, hex: u32) -> Option<&str> {
        HEX_NAMES.get(&hex).copied()
    }

    fn names(&self) -> Vec<&str> {
        let mut v: Vec<&str> = NAMES.keys().copied().collect();
        v.sort_unstable();
        v
    }
}

/// An owned name table built at runtime, e.g. from an X11 `rgb.txt`.
///
/// When several names share a value, the first one inserted is the
/// canonical name returned by `name_of`.
#[derive(Clone, Debug, Default)]
pub struct NameMap {
    by_name: BTreeMap<String, u32>,
    by_hex: BTreeMap<u32, String>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the built-in table, canonical names included.
    pub fn with_builtin() -> Self {
        let mut m = Self::new();
        let mut canon: Vec<(&u32, &&str)> = HEX_NAMES.entries().collect();
        canon.sort_unstable();
        for (&hex, &name) in canon {
            m.insert(name, hex);
        }
        for name in BuiltinNames.names() {
            if let Some(hex) = BuiltinNames.lookup(name) {
                m.insert(name, hex);
            }
        }
        m
    }

    /// Insert or replace `name`. Values above 24 bits are masked.
    ///
    /// A name moved off its old value stops being that value's canonical
    /// name; another name still holding the value takes over, if any.
    pub fn insert(&mut self, name: &str, hex: u32) {
        let hex = hex & 0x00FF_FFFF;
        if let Some(old) = self.by_name.insert(name.to_string(), hex) {
            if old != hex && self.by_hex.get(&old).map(String::as_str) == Some(name) {
                match self.by_name.iter().find(|&(_, &h)| h == old) {
                    Some((other, _)) => {
                        let other = other.clone();
                        self.by_hex.insert(old, other);
                    }
                    None => {
                        self.by_hex.remove(&old);
                    }
                }
            }
        }
        self.by_hex.entry(hex).or_insert_with(|| name.to_string());
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Parse X11 `rgb.txt` text: `R G B name words...` per line, with `!`
    /// comment lines and blank lines ignored. Names keep their case and are
    /// joined with single spaces.
    pub fn from_rgb_txt(text: &str) -> Result<Self> {
        let mut m = Self::new();
        m.extend_rgb_txt(text)?;
        Ok(m)
    }

    /// Add the entries of `text` (see [`NameMap::from_rgb_txt`]).
    pub fn extend_rgb_txt(&mut self, text: &str) -> Result<usize> {
        let mut added = 0usize;
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('!') {
                continue;
            }
            let lineno = i + 1;
            let mut fields = line.split_ascii_whitespace();
            let mut channel = |what: &str| -> Result<u32> {
                let f = fields.next().ok_or_else(|| {
                    TdspError::Validation(format!("rgb.txt line {lineno}: missing {what}"))
                })?;
                f.parse::<u8>().map(u32::from).map_err(|_| {
                    TdspError::Validation(format!(
                        "rgb.txt line {lineno}: bad {what} value {f:?} (want 0..=255)"
                    ))
                })
            };
            let r = channel("red")?;
            let g = channel("green")?;
            let b = channel("blue")?;
            let name = fields.collect::<Vec<&str>>().join(" ");
            if name.is_empty() {
                return Err(TdspError::Validation(format!(
                    "rgb.txt line {lineno}: missing name"
                )));
            }
            self.insert(&name, (r << 16) | (g << 8) | b);
            added += 1;
        }
        log::debug!("rgb.txt: {} entries, table now {}", added, self.len());
        Ok(added)
    }
}

impl NameTable for NameMap {
    fn lookup(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    fn name_of(&self, hex: u32) -> Option<&str> {
        self.by_hex.get(&hex).map(String::as_str)
    }

    fn names(&self) -> Vec<&str> {
        self.by_name.keys().map(String::as_str).collect()
    }
}

static NAMES: phf::Map<&'static str, u32> = phf_map! {
    "alice blue" => 0xF0F8FF_u32,
    "antique white" => 0xFAEBD7_u32,
    "aqua" => 0x00FFFF_u32,
    "aquamarine" => 0x7FFFD4_u32,
    "azure" => 0xF0FFFF_u32,
    "beige" => 0xF5F5DC_u32,
    "bisque" => 0xFFE4C4_u32,
    "black" => 0x000000_u32,
    "blanched almond" => 0xFFEBCD_u32,
    "blue" => 0x0000FF_u32,
    "blue violet" => 0x8A2BE2_u32,
    "brown" => 0xA52A2A_u32,
    "burlywood" => 0xDEB887_u32,
    "cadet blue" => 0x5F9EA0_u32,
    "chartreuse" => 0x7FFF00_u32,
    "chocolate" => 0xD2691E_u32,
    "coral" => 0xFF7F50_u32,
    "cornflower blue" => 0x6495ED_u32,
    "cornsilk" => 0xFFF8DC_u32,
    "crimson" => 0xDC143C_u32,
    "cyan" => 0x00FFFF_u32,
    "dark blue" => 0x00008B_u32,
    "dark cyan" => 0x008B8B_u32,
    "dark goldenrod" => 0xB8860B_u32,
    "dark gray" => 0xA9A9A9_u32,
    "dark green" => 0x006400_u32,
    "dark grey" => 0xA9A9A9_u32,
    "dark khaki" => 0xBDB76B_u32,
    "dark magenta" => 0x8B008B_u32,
    "dark olive green" => 0x556B2F_u32,
    "dark orange" => 0xFF8C00_u32,
    "dark orchid" => 0x9932CC_u32,
    "dark red" => 0x8B0000_u32,
    "dark salmon" => 0xE9967A_u32,
    "dark sea green" => 0x8FBC8F_u32,
    "dark slate blue" => 0x483D8B_u32,
    "dark slate gray" => 0x2F4F4F_u32,
    "dark slate grey" => 0x2F4F4F_u32,
    "dark turquoise" => 0x00CED1_u32,
    "dark violet" => 0x9400D3_u32,
    "deep pink" => 0xFF1493_u32,
    "deep sky blue" => 0x00BFFF_u32,
    "dim gray" => 0x696969_u32,
    "dim grey" => 0x696969_u32,
    "dodger blue" => 0x1E90FF_u32,
    "firebrick" => 0xB22222_u32,
    "floral white" => 0xFFFAF0_u32,
    "forest green" => 0x228B22_u32,
    "fuchsia" => 0xFF00FF_u32,
    "gainsboro" => 0xDCDCDC_u32,
    "ghost white" => 0xF8F8FF_u32,
    "gold" => 0xFFD700_u32,
    "goldenrod" => 0xDAA520_u32,
    "gray" => 0xBEBEBE_u32,
    "green" => 0x00FF00_u32,
    "green yellow" => 0xADFF2F_u32,
    "grey" => 0xBEBEBE_u32,
    "honeydew" => 0xF0FFF0_u32,
    "hot pink" => 0xFF69B4_u32,
    "indian red" => 0xCD5C5C_u32,
    "indigo" => 0x4B0082_u32,
    "ivory" => 0xFFFFF0_u32,
    "khaki" => 0xF0E68C_u32,
    "lavender" => 0xE6E6FA_u32,
    "lavender blush" => 0xFFF0F5_u32,
    "lawn green" => 0x7CFC00_u32,
    "lemon chiffon" => 0xFFFACD_u32,
    "light blue" => 0xADD8E6_u32,
    "light coral" => 0xF08080_u32,
    "light cyan" => 0xE0FFFF_u32,
    "light goldenrod" => 0xEEDD82_u32,
    "light goldenrod yellow" => 0xFAFAD2_u32,
    "light gray" => 0xD3D3D3_u32,
    "light green" => 0x90EE90_u32,
    "light grey" => 0xD3D3D3_u32,
    "light pink" => 0xFFB6C1_u32,
    "light salmon" => 0xFFA07A_u32,
    "light sea green" => 0x20B2AA_u32,
    "light sky blue" => 0x87CEFA_u32,
    "light slate blue" => 0x8470FF_u32,
    "light slate gray" => 0x778899_u32,
    "light slate grey" => 0x778899_u32,
    "light steel blue" => 0xB0C4DE_u32,
    "light yellow" => 0xFFFFE0_u32,
    "lime" => 0x00FF00_u32,
    "lime green" => 0x32CD32_u32,
    "linen" => 0xFAF0E6_u32,
    "magenta" => 0xFF00FF_u32,
    "maroon" => 0xB03060_u32,
    "medium aquamarine" => 0x66CDAA_u32,
    "medium blue" => 0x0000CD_u32,
    "medium orchid" => 0xBA55D3_u32,
    "medium purple" => 0x9370DB_u32,
    "medium sea green" => 0x3CB371_u32,
    "medium slate blue" => 0x7B68EE_u32,
    "medium spring green" => 0x00FA9A_u32,
    "medium turquoise" => 0x48D1CC_u32,
    "medium violet red" => 0xC71585_u32,
    "midnight blue" => 0x191970_u32,
    "mint cream" => 0xF5FFFA_u32,
    "misty rose" => 0xFFE4E1_u32,
    "moccasin" => 0xFFE4B5_u32,
    "navajo white" => 0xFFDEAD_u32,
    "navy" => 0x000080_u32,
    "navy blue" => 0x000080_u32,
    "old lace" => 0xFDF5E6_u32,
    "olive" => 0x808000_u32,
    "olive drab" => 0x6B8E23_u32,
    "orange" => 0xFFA500_u32,
    "orange red" => 0xFF4500_u32,
    "orchid" => 0xDA70D6_u32,
    "pale goldenrod" => 0xEEE8AA_u32,
    "pale green" => 0x98FB98_u32,
    "pale turquoise" => 0xAFEEEE_u32,
    "pale violet red" => 0xDB7093_u32,
    "papaya whip" => 0xFFEFD5_u32,
    "peach puff" => 0xFFDAB9_u32,
    "peru" => 0xCD853F_u32,
    "pink" => 0xFFC0CB_u32,
    "plum" => 0xDDA0DD_u32,
    "powder blue" => 0xB0E0E6_u32,
    "purple" => 0xA020F0_u32,
    "rebecca purple" => 0x663399_u32,
    "red" => 0xFF0000_u32,
    "rosy brown" => 0xBC8F8F_u32,
    "royal blue" => 0x4169E1_u32,
    "saddle brown" => 0x8B4513_u32,
    "salmon" => 0xFA8072_u32,
    "sandy brown" => 0xF4A460_u32,
    "sea green" => 0x2E8B57_u32,
    "seashell" => 0xFFF5EE_u32,
    "sienna" => 0xA0522D_u32,
    "silver" => 0xC0C0C0_u32,
    "sky blue" => 0x87CEEB_u32,
    "slate blue" => 0x6A5ACD_u32,
    "slate gray" => 0x708090_u32,
    "slate grey" => 0x708090_u32,
    "snow" => 0xFFFAFA_u32,
    "spring green" => 0x00FF7F_u32,
    "steel blue" => 0x4682B4_u32,
    "tan" => 0xD2B48C_u32,
    "teal" => 0x008080_u32,
    "thistle" => 0xD8BFD8_u32,
    "tomato" => 0xFF6347_u32,
    "turquoise" => 0x40E0D0_u32,
    "violet" => 0xEE82EE_u32,
    "violet red" => 0xD02090_u32,
    "wheat" => 0xF5DEB3_u32,
    "white" => 0xFFFFFF_u32,
    "white smoke" => 0xF5F5F5_u32,
    "yellow" => 0xFFFF00_u32,
    "yellow green" => 0x9ACD32_u32,
};

/// Canonical name per value.
static HEX_NAMES: phf::Map<u32, &'static str> = phf_map! {
    0x000000_u32 => "black",
    0x000080_u32 => "navy",
    0x00008B_u32 => "dark blue",
    0x0000CD_u32 => "medium blue",
    0x0000FF_u32 => "blue",
    0x006400_u32 => "dark green",
    0x008080_u32 => "teal",
    0x008B8B_u32 => "dark cyan",
    0x00BFFF_u32 => "deep sky blue",
    0x00CED1_u32 => "dark turquoise",
    0x00FA9A_u32 => "medium spring green",
    0x00FF00_u32 => "green",
    0x00FF7F_u32 => "spring green",
    0x00FFFF_u32 => "cyan",
    0x191970_u32 => "midnight blue",
    0x1E90FF_u32 => "dodger blue",
    0x20B2AA_u32 => "light sea green",
    0x228B22_u32 => "forest green",
    0x2E8B57_u32 => "sea green",
    0x2F4F4F_u32 => "dark slate gray",
    0x32CD32_u32 => "lime green",
    0x3CB371_u32 => "medium sea green",
    0x40E0D0_u32 => "turquoise",
    0x4169E1_u32 => "royal blue",
    0x4682B4_u32 => "steel blue",
    0x483D8B_u32 => "dark slate blue",
    0x48D1CC_u32 => "medium turquoise",
    0x4B0082_u32 => "indigo",
    0x556B2F_u32 => "dark olive green",
    0x5F9EA0_u32 => "cadet blue",
    0x6495ED_u32 => "cornflower blue",
    0x663399_u32 => "rebecca purple",
    0x66CDAA_u32 => "medium aquamarine",
    0x696969_u32 => "dim gray",
    0x6A5ACD_u32 => "slate blue",
    0x6B8E23_u32 => "olive drab",
    0x708090_u32 => "slate gray",
    0x778899_u32 => "light slate gray",
    0x7B68EE_u32 => "medium slate blue",
    0x7CFC00_u32 => "lawn green",
    0x7FFF00_u32 => "chartreuse",
    0x7FFFD4_u32 => "aquamarine",
    0x808000_u32 => "olive",
    0x8470FF_u32 => "light slate blue",
    0x87CEEB_u32 => "sky blue",
    0x87CEFA_u32 => "light sky blue",
    0x8A2BE2_u32 => "blue violet",
    0x8B0000_u32 => "dark red",
    0x8B008B_u32 => "dark magenta",
    0x8B4513_u32 => "saddle brown",
    0x8FBC8F_u32 => "dark sea green",
    0x90EE90_u32 => "light green",
    0x9370DB_u32 => "medium purple",
    0x9400D3_u32 => "dark violet",
    0x98FB98_u32 => "pale green",
    0x9932CC_u32 => "dark orchid",
    0x9ACD32_u32 => "yellow green",
    0xA020F0_u32 => "purple",
    0xA0522D_u32 => "sienna",
    0xA52A2A_u32 => "brown",
    0xA9A9A9_u32 => "dark gray",
    0xADD8E6_u32 => "light blue",
    0xADFF2F_u32 => "green yellow",
    0xAFEEEE_u32 => "pale turquoise",
    0xB03060_u32 => "maroon",
    0xB0C4DE_u32 => "light steel blue",
    0xB0E0E6_u32 => "powder blue",
    0xB22222_u32 => "firebrick",
    0xB8860B_u32 => "dark goldenrod",
    0xBA55D3_u32 => "medium orchid",
    0xBC8F8F_u32 => "rosy brown",
    0xBDB76B_u32 => "dark khaki",
    0xBEBEBE_u32 => "gray",
    0xC0C0C0_u32 => "silver",
    0xC71585_u32 => "medium violet red",
    0xCD5C5C_u32 => "indian red",
    0xCD853F_u32 => "peru",
    0xD02090_u32 => "violet red",
    0xD2691E_u32 => "chocolate",
    0xD2B48C_u32 => "tan",
    0xD3D3D3_u32 => "light gray",
    0xD8BFD8_u32 => "thistle",
    0xDA70D6_u32 => "orchid",
    0xDAA520_u32 => "goldenrod",
    0xDB7093_u32 => "pale violet red",
    0xDC143C_u32 => "crimson",
    0xDCDCDC_u32 => "gainsboro",
    0xDDA0DD_u32 => "plum",
    0xDEB887_u32 => "burlywood",
    0xE0FFFF_u32 => "light cyan",
    0xE6E6FA_u32 => "lavender",
    0xE9967A_u32 => "dark salmon",
    0xEE82EE_u32 => "violet",
    0xEEDD82_u32 => "light goldenrod",
    0xEEE8AA_u32 => "pale goldenrod",
    0xF08080_u32 => "light coral",
    0xF0E68C_u32 => "khaki",
    0xF0F8FF_u32 => "alice blue",
    0xF0FFF0_u32 => "honeydew",
    0xF0FFFF_u32 => "azure",
    0xF4A460_u32 => "sandy brown",
    0xF5DEB3_u32 => "wheat",
    0xF5F5DC_u32 => "beige",
    0xF5F5F5_u32 => "white smoke",
    0xF5FFFA_u32 => "mint cream",
    0xF8F8FF_u32 => "ghost white",
    0xFA8072_u32 => "salmon",
    0xFAEBD7_u32 => "antique white",
    0xFAF0E6_u32 => "linen",
    0xFAFAD2_u32 => "light goldenrod yellow",
    0xFDF5E6_u32 => "old lace",
    0xFF0000_u32 => "red",
    0xFF00FF_u32 => "magenta",
    0xFF1493_u32 => "deep pink",
    0xFF4500_u32 => "orange red",
    0xFF6347_u32 => "tomato",
    0xFF69B4_u32 => "hot pink",
    0xFF7F50_u32 => "coral",
    0xFF8C00_u32 => "dark orange",
    0xFFA07A_u32 => "light salmon",
    0xFFA500_u32 => "orange",
    0xFFB6C1_u32 => "light pink",
    0xFFC0CB_u32 => "pink",
    0xFFD700_u32 => "gold",
    0xFFDAB9_u32 => "peach puff",
    0xFFDEAD_u32 => "navajo white",
    0xFFE4B5_u32 => "moccasin",
    0xFFE4C4_u32 => "bisque",
    0xFFE4E1_u32 => "misty rose",
    0xFFEBCD_u32 => "blanched almond",
    0xFFEFD5_u32 => "papaya whip",
    0xFFF0F5_u32 => "lavender blush",
    0xFFF5EE_u32 => "seashell",
    0xFFF8DC_u32 => "cornsilk",
    0xFFFACD_u32 => "lemon chiffon",
    0xFFFAF0_u32 => "floral white",
    0xFFFAFA_u32 => "snow",
    0xFFFF00_u32 => "yellow",
    0xFFFFE0_u32 => "light yellow",
    0xFFFFF0_u32 => "ivory",
    0xFFFFFF_u32 => "white",
};
