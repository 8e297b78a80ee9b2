use super::*;

#[test]
fn parse_confidence_reads_plain_percentages() {
    assert_eq!(parse_confidence("87.5"), 87.5);
    assert_eq!(parse_confidence(" 42 "), 42.0);
    assert_eq!(parse_confidence("0"), 0.0);
}

#[test]
fn parse_confidence_falls_back_to_zero() {
    assert_eq!(parse_confidence(""), 0.0);
    assert_eq!(parse_confidence("high"), 0.0);
    assert_eq!(parse_confidence("NaN"), 0.0);
    assert_eq!(parse_confidence("inf"), 0.0);
}

#[test]
fn parse_confidence_clamps_to_percentage_range() {
    assert_eq!(parse_confidence("250"), 100.0);
    assert_eq!(parse_confidence("-3"), 0.0);
    assert_eq!(parse_confidence("100.0001"), 100.0);
}
