use lesson_notes_engine::parsing::format_entries;
use lesson_notes_engine::{LessonTextParser, TranslationEntry, parse_lesson_text};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn entry(
    original: &str,
    translated: &str,
    romaji: Option<&str>,
    sort_order: u32,
) -> TranslationEntry {
    TranslationEntry {
        original_text: original.to_string(),
        translated_text: translated.to_string(),
        romaji_text: romaji.map(str::to_string),
        sort_order,
    }
}

#[rstest]
#[case("")]
#[case("   \n\t  \n")]
#[case("\u{0}\u{1}\u{fffd}garbage\n\n\u{7f}")]
#[case("-----")]
#[case("(Jp): only a translation")]
#[case("((((((:")]
fn never_fails_and_degrades_to_empty(#[case] input: &str) {
    assert!(parse_lesson_text(input).is_empty());
}

#[test]
fn parsing_is_idempotent() {
    let notes = "Original: Hello\n(Jp): こんにちは\n\n食べる\n(English): to eat";
    let parser = LessonTextParser::new();

    assert_eq!(parser.parse(notes), parser.parse(notes));
}

#[test]
fn tagged_block_maps_fields_exactly() {
    assert_eq!(
        parse_lesson_text("Original: X\n(Jp): Y\n(Romaji): Z"),
        vec![entry("X", "Y", Some("Z"), 1)]
    );
}

#[test]
fn blank_line_and_dash_dividers_are_equivalent() {
    let a = "Original: Hello\n(Jp): こんにちは";
    let b = "Original: Bye\n(Jp): バイバイ";

    let with_blank = parse_lesson_text(&format!("{a}\n\n{b}"));
    let with_dashes = parse_lesson_text(&format!("{a}\n-----\n{b}"));

    assert_eq!(with_blank, with_dashes);
    assert_eq!(
        with_blank,
        vec![
            entry("Hello", "こんにちは", None, 1),
            entry("Bye", "バイバイ", None, 2),
        ]
    );
}

#[test]
fn first_line_is_used_as_original() {
    assert_eq!(
        parse_lesson_text("食べる\n(English): to eat"),
        vec![entry("食べる", "to eat", None, 1)]
    );
}

#[rstest]
#[case("Original: eat\n(English): to eat\n(Jp): 食べる")]
#[case("Original: eat\n(Jp): 食べる\n(English): to eat")]
fn jp_wins_over_english(#[case] block: &str) {
    assert_eq!(parse_lesson_text(block)[0].translated_text, "食べる");
}

#[test]
fn invalid_blocks_leave_no_gap_in_sort_order() {
    let notes = "Original: Hello\n\n(Jp): only translation, no original tag and first line looks like a tag\n\nOriginal: Bye\n(Jp): バイバイ";
    let entries = parse_lesson_text(notes);

    // "Original: Hello" alone has no translation, so only the last block survives
    assert_eq!(entries, vec![entry("Bye", "バイバイ", None, 1)]);
}

#[test]
fn skipped_middle_block_keeps_orders_contiguous() {
    let notes = "Original: Hello\n(Jp): こんにちは\n\n(Jp): only translation, no original tag and first line looks like a tag\n\nOriginal: Bye\n(Jp): バイバイ";
    let entries = parse_lesson_text(notes);

    assert_eq!(
        entries,
        vec![
            entry("Hello", "こんにちは", None, 1),
            entry("Bye", "バイバイ", None, 2),
        ]
    );
}

#[test]
fn stray_ideographic_space_line_keeps_the_entry() {
    assert_eq!(
        parse_lesson_text("Original: a\n\u{3000}\n(Jp): あ"),
        vec![entry("a", "あ", None, 1)]
    );
}

#[test]
fn windows_line_endings_match_unix() {
    let unix = "Original: Hello\n(Jp): こんにちは\n\nOriginal: Bye\n(Jp): バイバイ";
    let windows = unix.replace('\n', "\r\n");
    let old_mac = unix.replace('\n', "\r");

    assert_eq!(parse_lesson_text(&windows), parse_lesson_text(unix));
    assert_eq!(parse_lesson_text(&old_mac), parse_lesson_text(unix));
}

#[test]
fn formatted_entries_reparse_identically() {
    let entries = vec![
        entry("Hello", "こんにちは", Some("konnichiwa"), 1),
        entry("(Note): tricky", "注意", None, 2),
    ];

    assert_eq!(parse_lesson_text(&format_entries(&entries)), entries);
}
