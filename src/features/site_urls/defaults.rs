use std::collections::BTreeMap;

use crate::features::site_urls::dtos::{LinkDto, UrlMap};
use crate::features::site_urls::models::SiteUrl;

/// Sections the public pages know how to render
#[cfg(test)]
pub const SECTIONS: [&str; 5] = ["header", "hero", "pricing", "reseller", "footer"];

const APP_URL: &str = "https://app.temujanji.id";

fn link(label: &str, url: impl Into<String>) -> LinkDto {
    LinkDto {
        label: label.to_string(),
        url: url.into(),
    }
}

/// Built-in URL map used until the database says otherwise
pub fn default_urls() -> UrlMap {
    let mut map = UrlMap::new();

    map.insert(
        "header".to_string(),
        BTreeMap::from([
            ("login".to_string(), link("Masuk", format!("{APP_URL}/login"))),
            ("signup".to_string(), link("Coba Gratis", format!("{APP_URL}/register"))),
        ]),
    );
    map.insert(
        "hero".to_string(),
        BTreeMap::from([
            ("primary_cta".to_string(), link("Mulai Gratis", format!("{APP_URL}/register"))),
            ("secondary_cta".to_string(), link("Lihat Demo", format!("{APP_URL}/demo"))),
        ]),
    );
    map.insert(
        "pricing".to_string(),
        BTreeMap::from([
            ("free".to_string(), link("Mulai Gratis", format!("{APP_URL}/register?plan=free"))),
            ("pro".to_string(), link("Pilih Pro", format!("{APP_URL}/register?plan=pro"))),
            ("business".to_string(), link("Hubungi Sales", "mailto:sales@temujanji.id")),
        ]),
    );
    map.insert(
        "reseller".to_string(),
        BTreeMap::from([
            ("apply".to_string(), link("Daftar Reseller", format!("{APP_URL}/reseller/register"))),
            ("contact".to_string(), link("Tanya Tim Kemitraan", "mailto:reseller@temujanji.id")),
        ]),
    );
    map.insert(
        "footer".to_string(),
        BTreeMap::from([
            ("instagram".to_string(), link("Instagram", "https://instagram.com/temujanji")),
            ("linkedin".to_string(), link("LinkedIn", "https://linkedin.com/company/temujanji")),
            ("youtube".to_string(), link("YouTube", "https://youtube.com/@temujanji")),
            ("email".to_string(), link("Email", "mailto:halo@temujanji.id")),
        ]),
    );

    map
}

/// True when `(section, key)` names an entry of the built-in map
pub fn is_known(section: &str, key: &str) -> bool {
    default_urls()
        .get(section)
        .is_some_and(|entries| entries.contains_key(key))
}

/// Lay stored rows over the defaults. Unknown sections and keys are skipped.
pub fn overlay(mut base: UrlMap, rows: &[SiteUrl]) -> UrlMap {
    for row in rows {
        let Some(entry) = base
            .get_mut(&row.section)
            .and_then(|entries| entries.get_mut(&row.key))
        else {
            tracing::debug!("Ignoring unknown url row {}.{}", row.section, row.key);
            continue;
        };

        entry.url = row.url.clone();
        if let Some(label) = row.label.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            entry.label = label.to_string();
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn row(section: &str, key: &str, label: Option<&str>, url: &str) -> SiteUrl {
        SiteUrl {
            id: Uuid::new_v4(),
            section: section.to_string(),
            key: key.to_string(),
            label: label.map(str::to_string),
            url: url.to_string(),
            display_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_defaults_cover_every_section() {
        let defaults = default_urls();
        for section in SECTIONS {
            let entries = defaults.get(section).unwrap();
            assert!(!entries.is_empty(), "section {} has no links", section);
        }
        assert_eq!(defaults.len(), SECTIONS.len());
    }

    #[test]
    fn test_overlay_replaces_known_entries() {
        let rows = [row("hero", "primary_cta", Some("Daftar Sekarang"), "https://x.id/daftar")];
        let map = overlay(default_urls(), &rows);

        let cta = &map["hero"]["primary_cta"];
        assert_eq!(cta.url, "https://x.id/daftar");
        assert_eq!(cta.label, "Daftar Sekarang");
        assert_eq!(map["hero"]["secondary_cta"], default_urls()["hero"]["secondary_cta"]);
    }

    #[test]
    fn test_overlay_keeps_default_label_when_blank() {
        let rows = [row("header", "login", Some("  "), "https://x.id/login")];
        let map = overlay(default_urls(), &rows);
        assert_eq!(map["header"]["login"].label, "Masuk");
        assert_eq!(map["header"]["login"].url, "https://x.id/login");
    }

    #[test]
    fn test_overlay_ignores_unknown_rows() {
        let rows = [
            row("sidebar", "promo", None, "https://x.id/promo"),
            row("footer", "tiktok", None, "https://x.id/tiktok"),
        ];
        let map = overlay(default_urls(), &rows);
        assert_eq!(map, default_urls());
    }

    #[test]
    fn test_is_known() {
        assert!(is_known("pricing", "pro"));
        assert!(!is_known("pricing", "enterprise"));
        assert!(!is_known("sidebar", "login"));
    }
}
