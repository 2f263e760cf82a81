pub mod cache;
pub mod constants;
pub mod test_helpers;
pub mod text;
pub mod types;
pub mod validation;
