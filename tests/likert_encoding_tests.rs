use ceaiscore::encode;

#[test]
fn encoding_is_case_insensitive() {
    assert_eq!(encode("STRONGLY AGREE"), Some(5));
    assert_eq!(encode("Strongly Agree"), Some(5));
    assert_eq!(encode("sTrOnGlY dIsAgReE"), Some(1));
}

#[test]
fn encoding_ignores_surrounding_whitespace() {
    assert_eq!(encode(" Strongly Agree "), Some(5));
    assert_eq!(encode("\tNot Sure\n"), Some(3));
}

#[test]
fn encoding_covers_exactly_the_five_canonical_phrases() {
    let expected = [
        ("strongly disagree", 1),
        ("disagree", 2),
        ("not sure", 3),
        ("agree", 4),
        ("strongly agree", 5),
    ];
    for (phrase, code) in expected {
        assert_eq!(encode(phrase), Some(code), "{phrase}");
    }
}

#[test]
fn anything_else_is_missing() {
    assert_eq!(encode("maybe"), None);
    assert_eq!(encode(""), None);
    assert_eq!(encode("   "), None);
    assert_eq!(encode("4"), None);
    assert_eq!(encode("agree strongly"), None);
    // no fuzzy matching, not even with interior whitespace differences
    assert_eq!(encode("strongly  agree"), None);
}
