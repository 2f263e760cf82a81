//! HTML rendering with minijinja.
//!
//! Templates live in `templates/` at the crate root and are embedded at
//! compile time, so the binary runs from any working directory.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::{DateTime, Datelike, Utc};
use minijinja::{Environment, UndefinedBehavior, Value};
use thiserror::Error;

use crate::core::config::SiteConfig;
use crate::shared::text::split_paragraphs;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../templates/base.html")),
    ("home.html", include_str!("../../../templates/home.html")),
    ("faq.html", include_str!("../../../templates/faq.html")),
    ("feature.html", include_str!("../../../templates/feature.html")),
    ("page.html", include_str!("../../../templates/page.html")),
    ("reseller.html", include_str!("../../../templates/reseller.html")),
    ("blog_index.html", include_str!("../../../templates/blog_index.html")),
    ("blog_post.html", include_str!("../../../templates/blog_post.html")),
    ("status.html", include_str!("../../../templates/status.html")),
    ("admin/base.html", include_str!("../../../templates/admin/base.html")),
    ("admin/login.html", include_str!("../../../templates/admin/login.html")),
    ("admin/shell.html", include_str!("../../../templates/admin/shell.html")),
];

/// Served when a template itself fails, so a broken page never leaks details
const FALLBACK_ERROR_PAGE: &str = "<!doctype html><html lang=\"id\"><head><meta charset=\"utf-8\">\
    <title>Terjadi kesalahan</title></head><body><h1>Terjadi kesalahan</h1>\
    <p>Silakan muat ulang halaman ini beberapa saat lagi.</p></body></html>";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new(site: &SiteConfig) -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        // A missing URL key renders as an empty link instead of failing the page
        env.set_undefined_behavior(UndefinedBehavior::Chainable);

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| TemplateError::RenderError(format!("{}: {}", name, e)))?;
        }

        env.add_global("site_name", site.name.clone());
        env.add_global("base_url", site.base_url.clone());
        env.add_filter("tanggal", format_date);
        env.add_filter("paragraphs", |text: Value| {
            split_paragraphs(text.as_str().unwrap_or_default())
        });
        env.add_function("current_year", || Utc::now().year());

        Ok(Self { env })
    }

    pub fn render(&self, name: &str, ctx: Value) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|_| TemplateError::NotFound(name.to_string()))?;

        template
            .render(ctx)
            .map_err(|e| TemplateError::RenderError(e.to_string()))
    }

    /// Render straight into a response. Template failures are logged and
    /// answered with a bare 500 page.
    pub fn page(&self, status: StatusCode, name: &str, ctx: Value) -> Response {
        match self.render(name, ctx) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render page {}: {}", name, e);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(FALLBACK_ERROR_PAGE)).into_response()
            }
        }
    }
}

fn indonesian_month(month: u32) -> &'static str {
    match month {
        1 => "Januari",
        2 => "Februari",
        3 => "Maret",
        4 => "April",
        5 => "Mei",
        6 => "Juni",
        7 => "Juli",
        8 => "Agustus",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        12 => "Desember",
        _ => "",
    }
}

/// `2026-10-15T08:00:00Z` -> `15 Oktober 2026`; anything unparsable is passed through
fn format_date(value: Value) -> String {
    let Some(raw) = value.as_str() else {
        return String::new();
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => format!(
            "{} {} {}",
            dt.day(),
            indonesian_month(dt.month()),
            dt.year()
        ),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn renderer() -> PageRenderer {
        PageRenderer::new(&SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_all_templates_compile() {
        let renderer = renderer();
        for &(name, _) in TEMPLATES {
            assert!(renderer.env.get_template(name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_format_date_in_indonesian() {
        assert_eq!(
            format_date(Value::from("2026-10-15T08:00:00Z")),
            "15 Oktober 2026"
        );
        assert_eq!(
            format_date(Value::from("2025-03-01T23:59:59.123456+07:00")),
            "1 Maret 2025"
        );
        assert_eq!(format_date(Value::from("kemarin")), "kemarin");
        assert_eq!(format_date(Value::from(())), "");
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let result = renderer().render("missing.html", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_status_page_escapes_html() {
        let html = renderer()
            .render(
                "status.html",
                context! {
                    title => "Halaman tidak ditemukan",
                    message => "<script>alert(1)</script>",
                },
            )
            .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
