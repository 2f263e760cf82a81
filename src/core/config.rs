use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub swagger: SwaggerConfig,
    pub storage: StorageConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Admin authentication settings (locally issued HS256 tokens)
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_ttl: Duration,
    pub jwt_leeway: Duration,
    /// Bootstrap admin, created at startup when both are set
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_ttl", &self.jwt_ttl)
            .field("jwt_leeway", &self.jwt_leeway)
            .field("admin_email", &self.admin_email)
            .field(
                "admin_password",
                &self.admin_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// S3-compatible storage configuration for media uploads
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage endpoint URL
    pub endpoint: String,
    /// Base URL used when building public object URLs (defaults to endpoint)
    pub public_endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub region: String,
    /// Key prefix for every uploaded object
    pub prefix: String,
}

/// Settings used by the public pages
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
    /// How long a successful content fetch is served from memory
    pub content_cache_ttl: Duration,
}

/// Value of `key`, or `default` when unset
fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Value of `key` when set and non-empty
fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// Parse `key` into `T`, falling back to `default` when unset
fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            swagger: SwaggerConfig::from_env(),
            storage: StorageConfig::from_env(),
            site: SiteConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let cors_allowed_origins = var_or("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host: var_or("HOST", "127.0.0.1"),
            port: parse_var("PORT", 3000)?,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", 10)?,
            min_connections: parse_var("DB_MIN_CONNECTIONS", 1)?,
            acquire_timeout_secs: parse_var("DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            idle_timeout_secs: parse_var("DB_IDLE_TIMEOUT_SECS", 600)?,
            max_lifetime_secs: parse_var("DB_MAX_LIFETIME_SECS", 1800)?,
        })
    }
}

impl AuthConfig {
    const DEFAULT_JWT_TTL_SECS: u64 = 60 * 60 * 12; // 12 hours
    const DEFAULT_JWT_LEEWAY_SECS: u64 = 60;
    const MIN_SECRET_LEN: usize = 32;

    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET environment variable is required".to_string())?;

        if jwt_secret.len() < Self::MIN_SECRET_LEN {
            return Err(format!(
                "JWT_SECRET must be at least {} characters",
                Self::MIN_SECRET_LEN
            ));
        }

        Ok(Self {
            jwt_secret,
            jwt_ttl: Duration::from_secs(parse_var("JWT_TTL_SECS", Self::DEFAULT_JWT_TTL_SECS)?),
            jwt_leeway: Duration::from_secs(parse_var(
                "JWT_LEEWAY",
                Self::DEFAULT_JWT_LEEWAY_SECS,
            )?),
            admin_email: optional_var("ADMIN_EMAIL"),
            admin_password: optional_var("ADMIN_PASSWORD"),
        })
    }

    /// Returns the bootstrap admin credentials when both are configured
    pub fn bootstrap_admin(&self) -> Option<(&str, &str)> {
        match (&self.admin_email, &self.admin_password) {
            (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
            _ => None,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        Self {
            username: optional_var("SWAGGER_USERNAME"),
            password: optional_var("SWAGGER_PASSWORD"),
            title: var_or("SWAGGER_TITLE", "Temujanji Web API"),
            version: var_or("SWAGGER_VERSION", "0.1.0"),
            description: var_or(
                "SWAGGER_DESCRIPTION",
                "Content API for the Temujanji marketing site",
            ),
        }
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let endpoint = var_or("STORAGE_ENDPOINT", "http://localhost:9000");

        Self {
            public_endpoint: optional_var("STORAGE_PUBLIC_ENDPOINT")
                .unwrap_or_else(|| endpoint.clone()),
            endpoint,
            access_key: var_or("STORAGE_ACCESS_KEY", "minioadmin"),
            secret_key: var_or("STORAGE_SECRET_KEY", "minioadmin"),
            bucket: var_or("STORAGE_BUCKET", "temujanji-media"),
            region: var_or("STORAGE_REGION", "us-east-1"),
            prefix: var_or("STORAGE_PREFIX", "public"),
        }
    }
}

impl SiteConfig {
    const DEFAULT_CONTENT_CACHE_TTL_SECS: u64 = 300; // 5 minutes

    pub fn from_env() -> Result<Self, String> {
        let base_url = var_or("SITE_BASE_URL", "http://localhost:3000")
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            name: var_or("SITE_NAME", "Temujanji"),
            base_url,
            content_cache_ttl: Duration::from_secs(parse_var(
                "CONTENT_CACHE_TTL_SECS",
                Self::DEFAULT_CONTENT_CACHE_TTL_SECS,
            )?),
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Temujanji".to_string(),
            base_url: "http://localhost:3000".to_string(),
            content_cache_ttl: Duration::from_secs(Self::DEFAULT_CONTENT_CACHE_TTL_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(email: Option<&str>, password: Option<&str>) -> AuthConfig {
        AuthConfig {
            jwt_secret: "x".repeat(32),
            jwt_ttl: Duration::from_secs(60),
            jwt_leeway: Duration::ZERO,
            admin_email: email.map(str::to_string),
            admin_password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_var_uses_default_when_unset() {
        let ttl = tokio_test::assert_ok!(parse_var("TEMUJANJI_TEST_NEVER_SET", 42u64));
        assert_eq!(ttl, 42);
        assert_eq!(optional_var("TEMUJANJI_TEST_NEVER_SET"), None);
    }

    #[test]
    fn test_bootstrap_admin_needs_both_values() {
        assert_eq!(
            auth(Some("admin@temujanji.id"), Some("rahasia123")).bootstrap_admin(),
            Some(("admin@temujanji.id", "rahasia123"))
        );
        assert_eq!(auth(Some("admin@temujanji.id"), None).bootstrap_admin(), None);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let printed = format!("{:?}", auth(Some("a@b.id"), Some("rahasia123")));
        assert!(!printed.contains("rahasia123"));
        assert!(!printed.contains(&"x".repeat(32)));
    }

    #[test]
    fn test_swagger_credentials() {
        let mut swagger = SwaggerConfig {
            username: Some("docs".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);
        swagger.password = Some("pw".to_string());
        assert_eq!(swagger.credentials().as_deref(), Some("docs:pw"));
    }
}
