use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Slug format accepted for user-supplied slugs
    /// Lowercase ASCII word characters separated by single hyphens
    /// - Valid: "cara-atur-jadwal", "tips_rapat-2024", "rapat"
    /// - Invalid: "-rapat", "rapat-", "rapat--online", "Rapat", "rapat online"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9_]+(?:-[a-z0-9_]+)*$").unwrap();

    /// Identifier used for URL sections and keys
    /// - Valid: "hero", "cta_primary", "whatsapp"
    /// - Invalid: "Hero", "cta-primary", "1st", ""
    pub static ref IDENTIFIER_REGEX: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();

    /// At least one non-whitespace character
    pub static ref NON_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("cara-atur-jadwal"));
        assert!(SLUG_REGEX.is_match("rapat"));
        assert!(SLUG_REGEX.is_match("tips_rapat-2024"));
        assert!(SLUG_REGEX.is_match("a-b-c"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-rapat")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("rapat-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("rapat--online")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Rapat")); // uppercase
        assert!(!SLUG_REGEX.is_match("rapat online")); // space
        assert!(!SLUG_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_identifier_regex() {
        assert!(IDENTIFIER_REGEX.is_match("hero"));
        assert!(IDENTIFIER_REGEX.is_match("cta_primary"));
        assert!(!IDENTIFIER_REGEX.is_match("Hero"));
        assert!(!IDENTIFIER_REGEX.is_match("cta-primary"));
        assert!(!IDENTIFIER_REGEX.is_match("1st"));
    }

    #[test]
    fn test_non_blank_regex() {
        assert!(NON_BLANK_REGEX.is_match("  ada isi "));
        assert!(!NON_BLANK_REGEX.is_match(" \t\n"));
        assert!(!NON_BLANK_REGEX.is_match(""));
    }
}
