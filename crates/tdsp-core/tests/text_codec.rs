// crates/tdsp-core/tests/text_codec.rs

use tdsp_core::color::{
    color_from_hex, color_to_string, hex_from_color, parse_color, string_to_color, Base,
    ColorCodec, NameMap, Rgb,
};
use tdsp_core::TdspError;

fn lcg_next(x: &mut u64) -> u64 {
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

#[test]
fn red_under_both_bases() {
    assert_eq!(parse_color("red", Base::Normal).unwrap(), Rgb::rgb(1.0, 0.0, 0.0));
    assert_eq!(parse_color("red", Base::Integer).unwrap(), Rgb::rgb(255.0, 0.0, 0.0));
}

#[test]
fn triples_and_greys() {
    assert_eq!(
        parse_color("10, 20, 30", Base::Integer).unwrap(),
        Rgb::rgb(10.0, 20.0, 30.0)
    );
    assert_eq!(
        parse_color("gray 50", Base::Normal).unwrap(),
        Rgb::rgb(0.5, 0.5, 0.5)
    );
}

#[test]
fn sign_suffix_negates_marked_channels() {
    let c = parse_color("red--+", Base::Normal).unwrap();
    assert_eq!(c.red, -1.0);
    assert_eq!(c.green, 0.0);
    assert!(c.green.is_sign_negative());
    assert_eq!(c.blue, 0.0);
    assert!(c.blue.is_sign_positive());
}

#[test]
fn malformed_input_errors() {
    assert!(matches!(
        parse_color("10, 20", Base::Normal),
        Err(TdspError::ParseSyntax { .. })
    ));
    assert!(matches!(
        parse_color("notacolor", Base::Normal),
        Err(TdspError::UnknownName { .. })
    ));
    assert!(matches!(
        parse_color("red-+", Base::Normal),
        Err(TdspError::BadSignSuffix { .. })
    ));
    assert!(matches!(
        parse_color("notacolor+++", Base::Normal),
        Err(TdspError::BadSignSuffix { .. })
    ));
    assert_eq!(string_to_color("", Base::Normal), None);

    let err = parse_color("notacolor", Base::Normal).unwrap_err();
    assert_eq!(err.text(), Some("notacolor"));
}

#[test]
fn hex_round_trip_integer_base() {
    let mut seed = 0xfeed_u64;
    for _ in 0..500 {
        let hex = (lcg_next(&mut seed) >> 40) as u32 & 0xFF_FFFF;
        let c = color_from_hex(hex, Base::Integer);
        assert_eq!(hex_from_color(&c, Base::Integer), hex, "hex={hex:06x}");

        let n = color_from_hex(hex, Base::Normal);
        assert_eq!(hex_from_color(&n, Base::Normal), hex, "hex={hex:06x}");
    }
}

#[test]
fn formatted_text_parses_back() {
    let samples = [
        Rgb::rgb(1.0, 1.0, 1.0),
        Rgb::rgb(0.0, 0.0, 0.0),
        Rgb::rgb(0.5, 0.5, 0.5),
        Rgb::rgb(0.25, 0.125, 0.0625),
        Rgb::rgb(-1.0, 0.0, 0.0),
        Rgb::rgb(-0.5, 0.25, -0.75),
        Rgb::rgb(3.0, -2.0, 0.5),
    ];
    for base in [Base::Normal, Base::Integer] {
        for c in samples {
            let text = color_to_string(&c, base);
            let back = parse_color(&text, base).unwrap_or_else(|e| panic!("{text:?}: {e}"));
            assert_eq!(back, c, "text={text:?} base={base:?}");
        }
    }

    let mut seed = 5u64;
    for _ in 0..200 {
        let hex = (lcg_next(&mut seed) >> 40) as u32 & 0xFF_FFFF;
        let c = color_from_hex(hex, Base::Integer);
        let text = color_to_string(&c, Base::Integer);
        assert_eq!(parse_color(&text, Base::Integer).unwrap(), c, "text={text:?}");
    }
}

#[test]
fn injected_table_overrides_builtin() {
    let mut names = NameMap::new();
    names.insert("brand orange", 0xFF6600);
    let codec = ColorCodec::with_table(Base::Integer, &names);

    assert_eq!(
        codec.parse("brand orange").unwrap(),
        Rgb::rgb(255.0, 102.0, 0.0)
    );
    assert!(codec.parse("red").is_err());
    assert_eq!(codec.to_text(&Rgb::rgb(255.0, 102.0, 0.0)), "brand orange");
}

#[test]
fn rgb_txt_extends_builtin() {
    let text = "! comment\n\n 10  20  30\t\tmidnight ink\n";
    let mut names = NameMap::with_builtin();
    assert_eq!(names.extend_rgb_txt(text).unwrap(), 1);
    let codec = ColorCodec::with_table(Base::Integer, &names);
    assert_eq!(codec.parse("midnight ink").unwrap(), Rgb::rgb(10.0, 20.0, 30.0));
    assert_eq!(codec.parse("red").unwrap(), Rgb::rgb(255.0, 0.0, 0.0));

    assert!(NameMap::from_rgb_txt("1 2\n").is_err());
}

#[test]
fn overridden_names_still_round_trip() {
    let mut names = NameMap::with_builtin();
    names.extend_rgb_txt("200 0 0 red\n").unwrap();
    let codec = ColorCodec::with_table(Base::Integer, &names);

    for c in [Rgb::rgb(255.0, 0.0, 0.0), Rgb::rgb(200.0, 0.0, 0.0)] {
        let text = codec.to_text(&c);
        assert_eq!(codec.parse(&text).unwrap(), c, "text={text:?}");
    }
    assert_eq!(codec.to_text(&Rgb::rgb(200.0, 0.0, 0.0)), "red");
}
