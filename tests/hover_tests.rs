//! End-to-end tests for the match → decode → classify → render pipeline.

use proptest::prelude::*;
use unicode_hover::annotation::render;
use unicode_hover::block_classifier::classify;
use unicode_hover::code_point::CodePoint;
use unicode_hover::escape_decoder::{DecodeError, decode};
use unicode_hover::hover::{HoverContent, query};
use unicode_hover::token_matcher::find_token_at;
use unicode_hover_config::{Config, FontPreference};

#[test]
fn test_latin1_escape_end_to_end() {
    let text = r"char is \u00e9 today";
    let config = Config::default();

    let token = find_token_at(text, 10).expect("token under cursor");
    assert_eq!(token.text, r"\u00e9");

    let code_point = decode(&token.text).unwrap();
    assert_eq!(code_point.value(), 233);
    assert_eq!(classify(code_point), "Latin-1 Supplement");

    let hover = query(text, 10, &config).expect("hover");
    let annotation = hover.annotation().expect("preview annotation");
    assert_eq!(annotation.hex_label, "00E9");
    assert_eq!(annotation.decimal_label, 233);
    assert_eq!(annotation.block_label, "Latin-1 Supplement");
    assert_eq!(annotation.reference_url, "https://symbl.cc/en/00E9/");
    assert_eq!(hover.span.start, 8);
    assert_eq!(hover.span.end, 14);
}

#[test]
fn test_lone_surrogate_end_to_end() {
    let hover = query("let s = 0xD800;", 10, &Config::default()).expect("hover");
    match &hover.content {
        HoverContent::Invalid(invalid) => assert_eq!(invalid.raw_hex, "D800"),
        HoverContent::Preview(a) => panic!("Expected invalid marker, got {a:?}"),
    }
    assert!(hover.annotation().is_none());
    let markup = hover.markup();
    assert!(markup.body.starts_with("**Invalid Unicode:**"));
    assert!(!markup.body.contains("href"));
}

#[test]
fn test_emoji_end_to_end() {
    let hover = query(r#"print("u\1F600")"#, 9, &Config::default()).expect("hover");
    let annotation = hover.annotation().unwrap();
    assert_eq!(annotation.glyph, "\u{1F600}");
    assert_eq!(annotation.block_label, "Emoticons");
    assert_eq!(annotation.reference_url, "https://symbl.cc/en/1F600/");
}

#[test]
fn test_no_match_and_invalid_are_distinguishable() {
    let config = Config::default();
    assert!(query("plain words", 2, &config).is_none());
    assert!(query("0x110000", 1, &config).unwrap().is_invalid());
    assert!(!query("0x10FFFF", 1, &config).unwrap().is_invalid());
}

#[test]
fn test_disabled_config_suppresses_every_query() {
    let config = Config::new().with_enabled(false);
    for (text, offset) in [(r"\u00e9", 2), ("0xD800", 1), (r"\x41", 0), ("nothing", 0)] {
        assert!(query(text, offset, &config).is_none(), "{text}");
    }
}

#[test]
fn test_boundary_decodes() {
    assert_eq!(decode("0xFF").unwrap().value(), 255);
    assert_eq!(decode(r"u\1F600").unwrap().value(), 0x1F600);
    assert!(matches!(
        decode(r"\x"),
        Err(DecodeError::MalformedPayload { .. })
    ));
}

#[test]
fn test_classify_examples() {
    assert_eq!(classify(CodePoint::new(0x41)), "ASCII Character");
    assert_eq!(classify(CodePoint::new(0x1F600)), "Emoticons");
    assert_eq!(classify(CodePoint::new(0x10000)), "Unicode Block (U+10000)");
}

proptest! {
    #[test]
    fn prop_backslash_u_decodes_hex(h in "[0-9a-fA-F]{4}") {
        let expected = u32::from_str_radix(&h, 16).unwrap();
        prop_assert_eq!(decode(&format!("\\u{h}")).unwrap().value(), expected);
    }

    #[test]
    fn prop_backslash_x_decodes_hex(h in "[0-9a-fA-F]{2}") {
        let expected = u32::from_str_radix(&h, 16).unwrap();
        prop_assert_eq!(decode(&format!("\\x{h}")).unwrap().value(), expected);
    }

    #[test]
    fn prop_classify_is_total(value in any::<u32>()) {
        prop_assert!(!classify(CodePoint::new(value)).is_empty());
    }

    #[test]
    fn prop_hex_label_round_trips(c in any::<char>()) {
        let annotation = render(CodePoint::from(c), &FontPreference::default()).unwrap();
        let decoded = decode(&format!("0x{}", annotation.hex_label)).unwrap();
        prop_assert_eq!(decoded.value(), c as u32);
    }

    #[test]
    fn prop_render_is_idempotent(value in 0u32..=0x11_0000) {
        let font = FontPreference::default();
        let first = render(CodePoint::new(value), &font);
        let second = render(CodePoint::new(value), &font);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_query_markup_is_idempotent(value in 0u32..=0x11_0000, offset in 0usize..8) {
        let text = format!("0x{value:X}");
        let config = Config::default();
        let first = query(&text, offset, &config).map(|h| h.markup());
        let second = query(&text, offset, &config).map(|h| h.markup());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_matched_tokens_are_never_empty(text in "[ a-zA-Z0-9\\\\]{0,24}", offset in 0usize..26) {
        if let Some(token) = find_token_at(&text, offset) {
            prop_assert!(token.end > token.start);
            prop_assert!(token.touches(offset));
        }
    }
}
