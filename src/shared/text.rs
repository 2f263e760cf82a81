/// Split plain text on blank lines into trimmed, non-empty paragraphs
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_paragraphs() {
        let text = "Satu.\n\n  Dua.  \n\n\n\nTiga.";
        assert_eq!(split_paragraphs(text), vec!["Satu.", "Dua.", "Tiga."]);
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(split_paragraphs("A\r\n\r\nB"), vec!["A", "B"]);
    }

    #[test]
    fn test_blank_text_has_no_paragraphs() {
        assert!(split_paragraphs("  \n\n ").is_empty());
    }
}
