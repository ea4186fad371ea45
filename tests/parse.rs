mod common;

use dnum::{Dnum, DnumError, EnumerationExt};

dnum::enumeration! {
    struct Color: u8 {
        None = 0,
        Red = 1,
        Green = 2,
        Blue = 4,
    }
}

dnum::enumeration! {
    struct Balance: i16 {
        Debit = -1,
        Even = 0,
        Credit = 1,
    }
}

#[test]
fn parse_existant_integral_value_string() {
    common::init_tracing();
    assert_eq!(Dnum::<Color>::parse("0", false).unwrap(), Color::None);
    assert_eq!(Dnum::<Color>::parse("2", false).unwrap(), Color::Green);
}

#[test]
fn parse_non_existant_integral_value_string() {
    let color = Dnum::<Color>::parse("8", false).expect("8 fits u8");
    assert!(!color.is_defined());
    assert!(!Dnum::<Color>::is_defined(8).unwrap());
}

#[test]
fn parse_too_large_integral_value_string() {
    let err = Dnum::<Color>::parse("256", false).unwrap_err();
    assert!(matches!(err, DnumError::Overflow { .. }), "expected overflow, got {err}");
    assert!(Dnum::<Color>::parse("-1", false).unwrap_err().is_overflow());
    assert!(
        Dnum::<Color>::parse("123456789012345678901234567890123456789012", false)
            .unwrap_err()
            .is_overflow(),
        "beyond every integral width"
    );
}

#[test]
fn parse_signed_literals() {
    assert_eq!(Dnum::<Balance>::parse("-1", false).unwrap(), Balance::Debit);
    assert_eq!(Dnum::<Balance>::parse("+1", false).unwrap(), Balance::Credit);
    assert_eq!(Dnum::<Balance>::parse("  0 ", false).unwrap(), Balance::Even);
    assert!(Dnum::<Balance>::parse("-32769", false).unwrap_err().is_overflow());
}

#[test]
fn parse_lower_case_constant_name() {
    let err = Dnum::<Color>::parse("blue", false).unwrap_err();
    assert!(matches!(err, DnumError::Invalid { .. }), "expected invalid, got {err}");
}

#[test]
fn parse_lower_case_constant_name_with_ignore_case() {
    assert_eq!(Dnum::<Color>::parse("blue", true).unwrap(), Color::Blue);
    assert_eq!(Dnum::<Color>::parse("GREEN", true).unwrap(), Color::Green);
}

#[test]
fn parse_non_existant_constant_name() {
    assert!(Dnum::<Color>::parse("Yellow", false).unwrap_err().is_invalid());
    assert!(Dnum::<Color>::parse("Yellow", true).unwrap_err().is_invalid());
}

#[test]
fn parse_empty_input_is_invalid() {
    assert!(Dnum::<Color>::parse("", false).unwrap_err().is_invalid());
    assert!(Dnum::<Color>::parse("   ", false).unwrap_err().is_invalid());
    assert!(Dnum::<Color>::parse("Red,,Green", false).unwrap_err().is_invalid());
}

#[test]
fn parse_constant_name_list() {
    let color = Dnum::<Color>::parse("Red, Green", false).unwrap();
    assert_eq!(color, Color::Red | Color::Green);
    assert!(color.to_string().contains(','));
    assert_eq!(Dnum::<Color>::parse(" Blue ,Red", false).unwrap(), Color::Red | Color::Blue);
    assert_eq!(Dnum::<Color>::parse("red, BLUE", true).unwrap(), Color::Red | Color::Blue);
}

#[test]
fn parse_name_list_with_an_unknown_segment_fails() {
    let err = Dnum::<Color>::parse("Red, Purple", false).unwrap_err();
    assert!(err.is_invalid());
    assert!(err.to_string().contains("Purple"), "message names the segment: {err}");
}

#[test]
fn parsed_name_list_formats_back_to_its_names() {
    let color = Dnum::<Color>::parse("Blue, Red", false).unwrap();
    let formatted = color.to_string();
    assert_eq!(formatted, "Red, Blue");
    assert_eq!(Dnum::<Color>::parse(&formatted, false).unwrap(), color);
}

#[test]
fn from_str_is_case_sensitive_parse() {
    assert_eq!("Green".parse::<Color>().unwrap(), Color::Green);
    assert!("green".parse::<Color>().is_err());
}

// ------------- TryParse -------------
#[test]
fn try_parse_existant_integral_value_string() {
    assert_eq!(Dnum::<Color>::try_parse("0", false), Some(Color::None));
    assert_eq!(Dnum::<Color>::try_parse("2", false), Some(Color::Green));
}

#[test]
fn try_parse_non_existant_integral_value_string() {
    let color = Dnum::<Color>::try_parse("8", false).expect("8 fits u8");
    assert!(!color.is_defined());
}

#[test]
fn try_parse_too_large_integral_value_string() {
    assert_eq!(Dnum::<Color>::try_parse("256", false), None);
}

#[test]
fn try_parse_lower_case_constant_name() {
    assert_eq!(Dnum::<Color>::try_parse("blue", false), None);
    assert_eq!(Dnum::<Color>::try_parse("blue", true), Some(Color::Blue));
}

#[test]
fn try_parse_non_existant_constant_name() {
    assert_eq!(Dnum::<Color>::try_parse("Yellow", false), None);
}

#[test]
fn try_parse_constant_name_list() {
    let color = Dnum::<Color>::try_parse("Red, Green", false).expect("both names exist");
    assert!(color.to_string().contains(','));
}
