/// Canonical 5-point Likert scale used by the CEAI instrument.
pub const LIKERT_SCALE: [(&str, u8); 5] = [
    ("strongly disagree", 1),
    ("disagree", 2),
    ("not sure", 3),
    ("agree", 4),
    ("strongly agree", 5),
];

/// Encode one response cell as a Likert code.
///
/// Matching is case- and surrounding-whitespace-insensitive but otherwise
/// exact; there is no fuzzy matching. Anything that is not one of the five
/// canonical phrases (including an empty cell) is missing, represented as
/// `None` rather than an error: absence is a value the imputation stage
/// resolves, not a failure.
pub fn encode(cell: &str) -> Option<u8> {
    let cleaned = cell.trim().to_lowercase();
    LIKERT_SCALE
        .iter()
        .find(|(phrase, _)| *phrase == cleaned)
        .map(|&(_, code)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_all_canonical_phrases() {
        assert_eq!(encode("strongly disagree"), Some(1));
        assert_eq!(encode("disagree"), Some(2));
        assert_eq!(encode("not sure"), Some(3));
        assert_eq!(encode("agree"), Some(4));
        assert_eq!(encode("strongly agree"), Some(5));
    }

    #[test]
    fn rejects_partial_matches() {
        assert_eq!(encode("strongly"), None);
        assert_eq!(encode("agreeable"), None);
    }
}
