use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::{AppError, Result};
use crate::shared::validation::SLUG_REGEX;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9_\s-]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref HYPHENS: Regex = Regex::new(r"-+").unwrap();
}

/// Derive a URL slug from a title.
///
/// Lowercases, drops anything that is not a word character, whitespace or
/// hyphen, turns whitespace runs into a hyphen, collapses repeated hyphens
/// and trims hyphens from both ends. May return an empty string.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    let collapsed = HYPHENS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Use the given slug verbatim when present, otherwise derive one from `source`
pub fn resolve_slug(given: Option<&str>, source: &str) -> Result<String> {
    match given.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => {
            if !SLUG_REGEX.is_match(slug) {
                return Err(AppError::Validation(format!(
                    "Slug '{}' ditolak: slug yang diisi dipakai apa adanya dan hanya boleh berisi huruf kecil, angka, garis bawah dan tanda hubung. Kosongkan slug untuk membuatnya dari judul",
                    slug
                )));
            }
            Ok(slug.to_string())
        }
        None => {
            let derived = slugify(source);
            if derived.is_empty() {
                return Err(AppError::Validation(
                    "Slug tidak dapat dibuat dari judul, isi slug secara manual".to_string(),
                ));
            }
            Ok(derived)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic_title() {
        assert_eq!(
            slugify("Cara Mengatur Jadwal Rapat"),
            "cara-mengatur-jadwal-rapat"
        );
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("5 Tips: Rapat Efektif!"), "5-tips-rapat-efektif");
        assert_eq!(slugify("Apa itu Temujanji?"), "apa-itu-temujanji");
    }

    #[test]
    fn test_slugify_collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("  Rapat   -  Online  "), "rapat-online");
        assert_eq!(slugify("a -- b"), "a-b");
    }

    #[test]
    fn test_slugify_keeps_underscores_and_digits() {
        assert_eq!(slugify("Versi_2 Rilis 2024"), "versi_2-rilis-2024");
    }

    #[test]
    fn test_slugify_drops_non_ascii_letters() {
        assert_eq!(slugify("Café Rapat"), "caf-rapat");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_derived_slugs_have_no_whitespace_or_symbols() {
        let titles = [
            "Hello World",
            "  Leading and trailing  ",
            "Tab\tSeparated\nLines",
            "Symbols #$%^&*() everywhere",
            "Mixed-Case_Title 123",
            "--Hyphen-- Heavy--",
            "Ünïcödé Tëxt",
        ];

        for title in titles {
            let slug = slugify(title);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
                "unexpected character in {:?}",
                slug
            );
            assert!(!slug.contains(char::is_whitespace));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
            if !slug.is_empty() {
                assert!(SLUG_REGEX.is_match(&slug), "{:?} is not a valid slug", slug);
            }
        }
    }

    #[test]
    fn test_resolve_slug_prefers_given_slug_verbatim() {
        let slug = resolve_slug(Some(" custom_slug-1 "), "Ignored Title").unwrap();
        assert_eq!(slug, "custom_slug-1");
    }

    #[test]
    fn test_resolve_slug_derives_when_blank() {
        assert_eq!(resolve_slug(Some("   "), "Judul Baru").unwrap(), "judul-baru");
        assert_eq!(resolve_slug(None, "Judul Baru").unwrap(), "judul-baru");
    }

    #[test]
    fn test_resolve_slug_rejects_invalid_given_slug() {
        match resolve_slug(Some("Bad Slug"), "x") {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("'Bad Slug' ditolak"), "{}", msg);
                assert!(msg.contains("apa adanya"), "{}", msg);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_slug_rejects_empty_derivation() {
        assert!(matches!(
            resolve_slug(None, "???"),
            Err(AppError::Validation(_))
        ));
    }
}
