use super::*;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(parse_hex("#ff0000").unwrap(), Rgb8::new(255, 0, 0));
    assert_eq!(parse_hex("0078D7").unwrap(), Rgb8::new(0, 0x78, 0xd7));
    assert_eq!(parse_hex("  #FfFfFf ").unwrap(), Rgb8::WHITE);
    assert_eq!("#000000".parse::<Rgb8>().unwrap(), Rgb8::BLACK);
}

#[test]
fn rejects_malformed_hex() {
    for bad in [
        "",
        "#",
        "#fff",
        "#ff00000",
        "#gg0000",
        "#12345z",
        "#+f+f+f",
        "#\u{e9}\u{e9}\u{e9}",
    ] {
        let err = parse_hex(bad).unwrap_err();
        assert!(matches!(err, QrStyleError::Validation(_)), "{bad:?}");
    }
}

#[test]
fn rejects_signs_and_separators_inside_the_digits() {
    for bad in ["#+f+f+f", "+f+f+f", "#-10000", "#ff 000", "#0x00ff", "#ff_f0f"] {
        let err = parse_hex(bad).unwrap_err();
        assert!(matches!(err, QrStyleError::Validation(_)), "{bad:?}");
    }
    assert!("#+f+f+f".parse::<Rgb8>().is_err());
}

#[test]
fn display_round_trips() {
    let c = Rgb8::new(18, 52, 86);
    assert_eq!(parse_hex(&c.to_string()).unwrap(), c);
}
