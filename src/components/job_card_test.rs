use super::*;

#[test]
fn priority_class_is_case_insensitive() {
    assert_eq!(priority_class("HIGH"), "priority--high");
    assert_eq!(priority_class("High"), "priority--high");
    assert_eq!(priority_class("medium"), "priority--medium");
    assert_eq!(priority_class("MEDIUM"), "priority--medium");
}

#[test]
fn priority_class_defaults_unknown_tiers_to_low() {
    assert_eq!(priority_class("low"), "priority--low");
    assert_eq!(priority_class("urgent"), "priority--low");
    assert_eq!(priority_class(""), "priority--low");
}

#[test]
fn match_rate_class_tiers_at_eighty_and_ninety() {
    assert_eq!(match_rate_class(100), "match-rate--great");
    assert_eq!(match_rate_class(90), "match-rate--great");
    assert_eq!(match_rate_class(89), "match-rate--good");
    assert_eq!(match_rate_class(80), "match-rate--good");
    assert_eq!(match_rate_class(79), "match-rate--fair");
    assert_eq!(match_rate_class(0), "match-rate--fair");
}
