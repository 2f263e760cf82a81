use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    About,
    Contact,
    Terms,
    Privacy,
}

impl PageKey {
    pub const ALL: [PageKey; 4] = [
        PageKey::About,
        PageKey::Contact,
        PageKey::Terms,
        PageKey::Privacy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::About => "about",
            PageKey::Contact => "contact",
            PageKey::Terms => "terms",
            PageKey::Privacy => "privacy",
        }
    }
}

impl std::fmt::Display for PageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown page key: {}", s))
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SitePage {
    pub key: String,
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_round_trips_through_str() {
        for key in PageKey::ALL {
            assert_eq!(key.as_str().parse::<PageKey>(), Ok(key));
        }
        assert!("faq".parse::<PageKey>().is_err());
        assert!("About".parse::<PageKey>().is_err());
    }
}
