use super::*;

// -----------------------------------------------------------------------
// parse_count
// -----------------------------------------------------------------------

#[test]
fn plain_integer() {
    assert_eq!(parse_count("500"), 500.0);
}

#[test]
fn thousands_suffix_with_dot() {
    assert_eq!(parse_count("1.2K"), 1200.0);
}

#[test]
fn millions_suffix_with_comma_decimal() {
    assert_eq!(parse_count("1,2M"), 1_200_000.0);
}

#[test]
fn billions_suffix_lowercase() {
    assert_eq!(parse_count("2b"), 2_000_000_000.0);
}

#[test]
fn suffix_case_insensitive() {
    assert_eq!(parse_count("3k"), parse_count("3K"));
}

#[test]
fn unit_word_after_suffix_is_ignored() {
    assert_eq!(parse_count("1,2M vues"), 1_200_000.0);
}

#[test]
fn whitespace_between_number_and_suffix() {
    assert_eq!(parse_count("4 M"), 4_000_000.0);
}

#[test]
fn leading_label_is_skipped() {
    assert_eq!(parse_count("Views: 42"), 42.0);
}

#[test]
fn only_first_number_is_used() {
    assert_eq!(parse_count("12K followers 3M likes"), 12_000.0);
}

#[test]
fn comma_is_read_as_decimal_separator() {
    assert!((parse_count("12,345") - 12.345).abs() < 1e-9);
}

#[test]
fn trailing_separator_parses() {
    assert_eq!(parse_count("7. views"), 7.0);
}

#[test]
fn letters_only_is_zero() {
    assert_eq!(parse_count("abc"), 0.0);
}

#[test]
fn empty_is_zero() {
    assert_eq!(parse_count(""), 0.0);
}

#[test]
fn non_ascii_digits_are_not_counts() {
    assert_eq!(parse_count("١٢٣"), 0.0);
}

#[test]
fn never_negative() {
    assert_eq!(parse_count("-5K"), 5_000.0);
}

#[test]
fn repeated_calls_agree() {
    let first = parse_count("8.8M");
    let second = parse_count("8.8M");
    assert_eq!(first.to_bits(), second.to_bits());
}

// -----------------------------------------------------------------------
// format_count
// -----------------------------------------------------------------------

#[test]
fn format_small_value_has_no_separator() {
    assert_eq!(format_count(950.0), "950");
}

#[test]
fn format_groups_thousands() {
    assert_eq!(format_count(1_234_567.4), "1,234,567");
}

#[test]
fn format_rounds_half_up() {
    assert_eq!(format_count(999.5), "1,000");
}

#[test]
fn format_negative_value() {
    assert_eq!(format_count(-12_000.0), "-12,000");
}
