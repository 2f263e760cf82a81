/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page size used by the public blog index
pub const BLOG_PAGE_SIZE: i64 = 9;

/// Number of posts shown on the landing page
pub const LANDING_LATEST_POSTS: i64 = 3;

/// Author stored on posts saved without one
pub const DEFAULT_POST_AUTHOR: &str = "Tim Temujanji";

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - full access to the content management API
pub const ROLE_ADMIN: &str = "admin";
