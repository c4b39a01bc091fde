use adiflog::Field;

#[test]
fn parses_tag_with_length_and_payload() {
    let field = Field::parse("<CALL:4>W1AW<EOR>").unwrap();
    assert_eq!(field.name(), "CALL");
    assert_eq!(field.data_length(), Some(4));
    assert_eq!(field.data(), Some("W1AW"));
    assert_eq!(field.bytes_consumed(), 12);
}

#[test]
fn remainder_after_payload_yields_next_tag() {
    let text = "<CALL:4>W1AW<EOR>";
    let first = Field::parse(text).unwrap();
    let rest = &text[first.bytes_consumed()..];

    let second = Field::parse(rest).unwrap();
    assert_eq!(second.name(), "EOR");
    assert_eq!(second.data_length(), None);
    assert_eq!(second.data(), None);
    assert_eq!(second.bytes_consumed(), 5);
}

#[test]
fn short_payload_is_incomplete_not_truncated() {
    assert!(Field::parse("<CALL:6>W1AW").is_none());
}

#[test]
fn no_tag_means_end_of_tokens() {
    assert!(Field::parse("").is_none());
    assert!(Field::parse("just some banner text").is_none());
    assert!(Field::parse("<not a tag because of spaces>").is_none());
}

#[test]
fn free_text_before_tag_is_counted_in_bytes_consumed() {
    let text = "Generated by some logger\r\n\r\n<ADIF_VER:5>3.1.4";
    let field = Field::parse(text).unwrap();
    assert_eq!(field.name(), "ADIF_VER");
    assert_eq!(field.data(), Some("3.1.4"));
    assert_eq!(field.bytes_consumed(), text.len());
}

#[test]
fn type_indicator_is_captured() {
    let field = Field::parse("<FREQ:5:N>14.25").unwrap();
    assert_eq!(field.name(), "FREQ");
    assert_eq!(field.type_indicator(), Some('N'));
    assert_eq!(field.data(), Some("14.25"));
}

#[test]
fn names_canonicalize_to_upper_case() {
    let field = Field::parse("<qso_date:8>20230615").unwrap();
    assert_eq!(field.name(), "QSO_DATE");
}

#[test]
fn payload_may_contain_tag_like_text() {
    let field = Field::parse("<COMMENT:9><EOR> oops").unwrap();
    assert_eq!(field.data(), Some("<EOR> oop"));
}

#[test]
fn tag_round_trips_through_parse() {
    let wire = Field::tag("call", Some('S'), "W1AW");
    assert_eq!(wire, "<CALL:4:S>W1AW");

    let field = Field::parse(&wire).unwrap();
    assert_eq!(field.name(), "CALL");
    assert_eq!(field.type_indicator(), Some('S'));
    assert_eq!(field.data(), Some("W1AW"));
    assert_eq!(field.stringify(), wire);
}

#[test]
fn absurd_declared_length_is_incomplete_not_a_panic() {
    // usize::MAX overflows the payload end offset if added unchecked.
    assert!(Field::parse("<CALL:18446744073709551615>W1AW").is_none());
    assert!(Field::parse("<CALL:9999999999>W1AW").is_none());
}

#[test]
fn zero_length_payload_is_empty_string() {
    let field = Field::parse("<COMMENT:0>").unwrap();
    assert_eq!(field.data(), Some(""));
    assert_eq!(field.bytes_consumed(), 11);
}
