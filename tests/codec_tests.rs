use oarlog::core::codec::{NO_TIME, format_seconds, parse_time_to_seconds};

fn assert_parses(input: &str, expected: f64) {
    let got = parse_time_to_seconds(input).unwrap_or_else(|| panic!("'{}' should parse", input));
    assert!(
        (got - expected).abs() < 1e-9,
        "'{}' parsed to {}, expected {}",
        input,
        got,
        expected
    );
}

#[test]
fn parses_minutes_seconds_with_comma_decimal() {
    assert_parses("6:45,3", 405.3);
    assert_parses("6:42,8", 402.8);
}

#[test]
fn parses_hours_minutes_seconds() {
    assert_parses("1:02:03", 3723.0);
}

#[test]
fn parses_bare_seconds() {
    assert_parses("45", 45.0);
    assert_parses("45,5", 45.5);
}

#[test]
fn parses_with_surrounding_whitespace() {
    assert_parses(" 6:45,3 ", 405.3);
}

#[test]
fn rejects_empty_and_garbage() {
    assert_eq!(parse_time_to_seconds(""), None);
    assert_eq!(parse_time_to_seconds("   "), None);
    assert_eq!(parse_time_to_seconds("abc"), None);
    assert_eq!(parse_time_to_seconds("6:ab"), None);
}

#[test]
fn rejects_four_or_more_segments() {
    assert_eq!(parse_time_to_seconds("1:2:3:4"), None);
    assert_eq!(parse_time_to_seconds("1:2:3:4:5"), None);
}

#[test]
fn rejects_negative_times() {
    assert_eq!(parse_time_to_seconds("-5"), None);
    assert_eq!(parse_time_to_seconds("-1:30"), None);
}

#[test]
fn formats_with_decisecond_only_when_nonzero() {
    assert_eq!(format_seconds(Some(405.3)), "6:45,3");
    assert_eq!(format_seconds(Some(405.0)), "6:45");
    assert_eq!(format_seconds(Some(1290.0)), "21:30");
}

#[test]
fn formats_unknown_as_dash() {
    assert_eq!(format_seconds(None), NO_TIME);
    assert_eq!(format_seconds(Some(f64::NAN)), NO_TIME);
}

#[test]
fn formats_long_times_without_hour_decomposition() {
    assert_eq!(format_seconds(Some(3723.0)), "62:03");
}

#[test]
fn format_drops_precision_beyond_one_decile() {
    // "6:45,30" is the same instant as "6:45,3" once rounded.
    let sec = parse_time_to_seconds("6:45,30").unwrap();
    assert_eq!(format_seconds(Some(sec)), "6:45,3");
}

#[test]
fn rounding_carry_never_produces_a_sixty_second_column() {
    assert_eq!(format_seconds(Some(59.96)), "1:00");
    assert_eq!(format_seconds(Some(119.99)), "2:00");
}

#[test]
fn parse_format_parse_is_stable_to_one_decile() {
    for s in ["6:45,3", "21:30,0", "1:02:03", "0:59,9", "45,5"] {
        let first = parse_time_to_seconds(s).unwrap();
        let again = parse_time_to_seconds(&format_seconds(Some(first))).unwrap();
        assert!(
            (first - again).abs() < 0.05,
            "'{}' drifted: {} vs {}",
            s,
            first,
            again
        );
    }
}
