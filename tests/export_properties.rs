//! End-to-end properties of the styled-text export.

use unimark::{clear_formatting, to_plain_text, to_styled_text, StyleOptions, TextStats};

#[test]
fn untagged_input_is_returned_unchanged() {
    let inputs = [
        "hello world",
        "The quick brown fox jumps over the lazy dog",
        "punctuation, digits 123 and spaces stay put!",
    ];
    for input in inputs {
        assert_eq!(to_styled_text(input), input);
    }
}

#[test]
fn bold_letters_map_into_the_sans_serif_bold_block() {
    assert_eq!(to_styled_text("<strong>AB</strong>"), "\u{1D5D4}\u{1D5D5}");
    assert_eq!(to_styled_text("<b>AB</b>"), "\u{1D5D4}\u{1D5D5}");
}

#[test]
fn italic_letters_map_into_the_sans_serif_italic_block() {
    assert_eq!(to_styled_text("<em>ab</em>"), "\u{1D622}\u{1D623}");
    assert_eq!(to_styled_text("<i>ab</i>"), "\u{1D622}\u{1D623}");
}

#[test]
fn underline_appends_combining_low_line_per_character() {
    assert_eq!(to_styled_text("<u>hi</u>"), "h\u{0332}i\u{0332}");
}

#[test]
fn strikethrough_appends_combining_long_stroke_per_character() {
    assert_eq!(to_styled_text("<s>no</s>"), "n\u{0336}o\u{0336}");
    assert_eq!(to_styled_text("<strike>no</strike>"), "n\u{0336}o\u{0336}");
    assert_eq!(to_styled_text("<del>no</del>"), "n\u{0336}o\u{0336}");
}

#[test]
fn br_becomes_a_newline() {
    assert_eq!(to_styled_text("Line1<br>Line2"), "Line1\nLine2");
    assert_eq!(to_styled_text("Line1<br/>Line2"), "Line1\nLine2");
}

#[test]
fn paragraphs_become_blank_line_separated_blocks() {
    assert_eq!(to_styled_text("<p>A</p><p>B</p>"), "A\n\nB");
}

#[test]
fn bold_digits_come_from_the_fixed_table() {
    // 7 maps to MATHEMATICAL SANS-SERIF BOLD DIGIT SEVEN specifically.
    assert_eq!(to_styled_text("<strong>7</strong>"), "\u{1D7F3}");
    assert_eq!(
        to_styled_text("<b>0123456789</b>"),
        "\u{1D7EC}\u{1D7ED}\u{1D7EE}\u{1D7EF}\u{1D7F0}\u{1D7F1}\u{1D7F2}\u{1D7F3}\u{1D7F4}\u{1D7F5}"
    );
}

#[test]
fn italic_digits_are_not_transformed() {
    assert_eq!(to_styled_text("<em>42</em>"), "42");
}

#[test]
fn re_export_of_styled_output_is_a_no_op() {
    let styled = to_styled_text("<strong>Bold</strong> <em>ital</em> <u>line</u> <s>gone</s>");
    assert_eq!(to_styled_text(&styled), styled);
}

#[test]
fn unrecognized_tags_are_stripped() {
    assert_eq!(to_styled_text("<span class='x'>Z</span>"), "Z");
    assert_eq!(to_styled_text("<div data-a=\"1\">Z</div>"), "Z");
}

#[test]
fn overlapping_bold_and_italic_resolve_to_the_first_pass() {
    // The bold pass swallows an inner italic tag and bold-maps its
    // letters; cleanup then strips the mangled tags. Either nesting
    // order ends bold-only.
    assert_eq!(
        to_styled_text("<strong><em>hi</em></strong>"),
        "\u{1D5F5}\u{1D5F6}"
    );
    assert_eq!(
        to_styled_text("<em><strong>hi</strong></em>"),
        "\u{1D5F5}\u{1D5F6}"
    );
}

#[test]
fn mixed_document_renders_each_span_once() {
    let markup = "<p>plan: <strong>GO</strong> at <u>9</u><br><em>quietly</em></p>";
    let expected = format!(
        "plan: {} at 9\u{0332}\n{}",
        "\u{1D5DA}\u{1D5E2}", // GO
        "\u{1D632}\u{1D636}\u{1D62A}\u{1D626}\u{1D635}\u{1D62D}\u{1D63A}"  // quietly
    );
    assert_eq!(to_styled_text(markup), expected);
}

#[test]
fn plain_rendering_strips_styles_but_keeps_structure() {
    let markup = "<p><strong>A</strong></p><p><u>B</u><br><s>C</s></p>";
    assert_eq!(to_plain_text(markup), "A\n\nB\nC");
}

#[test]
fn clear_formatting_yields_unstyled_markup() {
    let markup = "<p><strong>A</strong></p><p>B</p>";
    assert_eq!(clear_formatting(markup), "A<br><br>B");
}

#[test]
fn disabled_passes_degrade_to_stripping() {
    let options = StyleOptions::new()
        .with_bold(false)
        .with_italic(false)
        .with_underline(false)
        .with_strikethrough(false);
    let markup = "<p><strong>A</strong> <em>b</em> <u>c</u></p>";
    assert_eq!(
        unimark::to_styled_text_with_options(markup, &options),
        to_plain_text(markup)
    );
}

#[test]
fn word_count_matches_plain_rendering() {
    let stats = TextStats::from_markup("<p>Hello <strong>world</strong></p>");
    assert_eq!(stats.words, 2);

    let stats = TextStats::from_markup("<p>one</p><p>two three</p>");
    assert_eq!(stats.words, 3);
    assert_eq!(stats.paragraphs, 2);
}
