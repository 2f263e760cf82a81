//! Sections of the admin panel and the API each one edits.

use serde::Serialize;

/// How the admin shell talks to a section's API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Read-only summary
    Summary,
    /// List, POST to create, PUT/DELETE `{api}/{id}`
    Collection,
    /// List, PUT `{api}` to upsert, DELETE `{api}/{id}`
    Upsert,
    /// One document, read from `read_api` and saved with PUT `{api}`
    Single,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdminSection {
    pub slug: &'static str,
    pub title: &'static str,
    pub kind: SectionKind,
    pub api: &'static str,
    /// Where the shell loads data from when it differs from `api`
    pub read_api: Option<&'static str>,
    /// JSON skeleton offered when creating an entry
    pub template: &'static str,
}

pub const DASHBOARD: AdminSection = AdminSection {
    slug: "dashboard",
    title: "Dashboard",
    kind: SectionKind::Summary,
    api: "/api/admin/dashboard",
    read_api: None,
    template: "",
};

const fn page(
    slug: &'static str,
    title: &'static str,
    api: &'static str,
    read_api: &'static str,
) -> AdminSection {
    AdminSection {
        slug,
        title,
        kind: SectionKind::Single,
        api,
        read_api: Some(read_api),
        template: r#"{"title": "", "content": ""}"#,
    }
}

pub const ADMIN_SECTIONS: &[AdminSection] = &[
    AdminSection {
        slug: "posts",
        title: "Artikel Blog",
        kind: SectionKind::Collection,
        api: "/api/admin/posts",
        read_api: None,
        template: r#"{"title": "", "content": "", "excerpt": null, "category": null, "status": "draft"}"#,
    },
    AdminSection {
        slug: "categories",
        title: "Kategori Blog",
        kind: SectionKind::Collection,
        api: "/api/admin/blog-categories",
        read_api: None,
        template: r#"{"name": "", "display_order": 0}"#,
    },
    AdminSection {
        slug: "urls",
        title: "URL & Tombol",
        kind: SectionKind::Upsert,
        api: "/api/admin/urls",
        read_api: None,
        template: r#"{"section": "hero", "key": "primary_cta", "label": "", "url": ""}"#,
    },
    AdminSection {
        slug: "faqs",
        title: "FAQ",
        kind: SectionKind::Collection,
        api: "/api/admin/faqs",
        read_api: None,
        template: r#"{"question": "", "answer": "", "display_order": 0, "is_active": true}"#,
    },
    AdminSection {
        slug: "testimonials",
        title: "Testimoni",
        kind: SectionKind::Collection,
        api: "/api/admin/testimonials",
        read_api: None,
        template: r#"{"name": "", "quote": "", "role": null, "company": null, "rating": 5}"#,
    },
    AdminSection {
        slug: "brand-logos",
        title: "Logo Brand",
        kind: SectionKind::Collection,
        api: "/api/admin/brand-logos",
        read_api: None,
        template: r#"{"name": "", "logo_url": "", "website_url": null, "display_order": 0}"#,
    },
    page("about", "Tentang Kami", "/api/admin/pages/about", "/api/pages/about"),
    page("contact", "Kontak", "/api/admin/pages/contact", "/api/pages/contact"),
    page("terms", "Syarat & Ketentuan", "/api/admin/pages/terms", "/api/pages/terms"),
    page("privacy", "Kebijakan Privasi", "/api/admin/pages/privacy", "/api/pages/privacy"),
];

pub fn find_section(slug: &str) -> Option<&'static AdminSection> {
    ADMIN_SECTIONS.iter().find(|s| s.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_is_reachable() {
        for slug in [
            "posts",
            "categories",
            "urls",
            "faqs",
            "testimonials",
            "brand-logos",
            "about",
            "contact",
            "terms",
            "privacy",
        ] {
            assert!(find_section(slug).is_some(), "{}", slug);
        }
        assert_eq!(ADMIN_SECTIONS.len(), 10);
        assert!(find_section("dashboard").is_none());
    }

    #[test]
    fn test_templates_are_valid_json() {
        for section in ADMIN_SECTIONS {
            let parsed: serde_json::Value = serde_json::from_str(section.template).unwrap();
            assert!(parsed.is_object(), "{}", section.slug);
        }
    }
}
