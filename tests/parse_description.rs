use dnum::{Dnum, DnumError};

dnum::enumeration! {
    struct Color: u8 {
        None = 0,
        #[description = "Ruby"]
        Red = 1,
        #[description = "Emerald"]
        Green = 2,
        #[description = "Cobalt"]
        Blue = 4,
        #[description = "Dark"]
        Maroon = 8,
        #[description = "Dark"]
        Charcoal = 16,
        #[description = "dark"]
        Black = 32,
        #[description = "DaRk"]
        Soot = 64,
    }
}

dnum::enumeration! {
    struct Street: u8 {
        #[description = "ΟΔΟΣ"]
        Road = 1,
        #[description = "Straße"]
        Lane = 2,
    }
}

dnum::enumeration! {
    struct Code: i32 {
        #[description = "42"]
        Answer = 7,
        Other = 42,
    }
}

#[test]
fn parse_existant_description() {
    assert_eq!(Dnum::<Color>::parse_description("Ruby", false).unwrap(), vec![Color::Red]);
}

#[test]
fn parse_description_does_not_accept_integral_value_strings() {
    for text in ["0", "128", "256"] {
        let err = Dnum::<Color>::parse_description(text, false).unwrap_err();
        assert!(matches!(err, DnumError::Invalid { .. }), "'{text}' is not a description");
    }
}

#[test]
fn parse_description_matches_a_literal_declared_as_description() {
    assert_eq!(Dnum::<Code>::parse_description("42", false).unwrap(), vec![Code::Answer]);
}

#[test]
fn parse_description_falls_back_on_names() {
    assert_eq!(Dnum::<Color>::parse_description("None", false).unwrap(), vec![Color::None]);
    assert!(Dnum::<Color>::parse_description("Red", false).is_err(), "Red is described as Ruby");
}

#[test]
fn parse_lower_case_description() {
    assert!(Dnum::<Color>::parse_description("ruby", false).unwrap_err().is_invalid());
}

#[test]
fn parse_lower_case_description_with_ignore_case() {
    let colors = Dnum::<Color>::parse_description("ruby", true).unwrap();
    assert_eq!(colors.first(), Some(&Color::Red));
}

#[test]
fn parse_non_existant_description_with_ignore_case() {
    assert!(Dnum::<Color>::parse_description("poo", true).unwrap_err().is_invalid());
}

#[test]
fn parse_non_existant_description() {
    assert!(Dnum::<Color>::parse_description("Moonunit Zappa", false).unwrap_err().is_invalid());
}

#[test]
fn parse_description_list() {
    assert!(Dnum::<Color>::parse_description("Ruby, Emerald", false).unwrap_err().is_invalid());
}

#[test]
fn parse_repeat_description() {
    let dark = Dnum::<Color>::parse_description("Dark", false).unwrap();
    assert_eq!(dark, vec![Color::Maroon, Color::Charcoal]);
}

#[test]
fn parse_repeat_description_with_ignore_case() {
    let dark = Dnum::<Color>::parse_description("Dark", true).unwrap();
    assert_eq!(dark.len(), 4);
    assert_eq!(dark, vec![Color::Maroon, Color::Charcoal, Color::Black, Color::Soot]);
    assert_eq!(Dnum::<Color>::parse_description("DARK", true).unwrap(), dark);
}

#[test]
fn try_parse_description() {
    assert_eq!(Dnum::<Color>::try_parse_description("Cobalt", false), Some(vec![Color::Blue]));
    assert_eq!(Dnum::<Color>::try_parse_description("cobalt", false), None);
    assert_eq!(Dnum::<Color>::try_parse_description("cobalt", true), Some(vec![Color::Blue]));
    assert_eq!(Dnum::<Color>::try_parse_description("Moonunit Zappa", true), None);
}

#[test]
fn parse_description_with_ignore_case_matches_both_sigma_forms() {
    assert_eq!(Dnum::<Street>::parse_description("οδοσ", true).unwrap(), vec![Street::Road]);
    assert_eq!(Dnum::<Street>::parse_description("οδος", true).unwrap(), vec![Street::Road]);
    assert_eq!(Dnum::<Street>::parse_description("STRASSE", true).unwrap(), vec![Street::Lane]);
    assert!(Dnum::<Street>::parse_description("οδοσ", false).is_err());
}
