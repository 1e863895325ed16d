//! # Shared Settings Library
//!
//! This library defines the settings contract between the web frontend and the
//! operator tooling that configures the landing page. All types use JSON
//! serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: settings documents
//!   - **[`dto::settings`]**: feature activation flags and logo configuration
//!
//! ## Wire Format
//!
//! All types serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Every field defaults when absent, so a partial document written by an
//!   older operator tool still parses
//!
//! ## Usage in the Frontend
//!
//! ```rust
//! use shared::dto::settings::AppSettings;
//!
//! let raw = r#"{ "features": { "voting_active": true } }"#;
//! let settings: AppSettings = serde_json::from_str(raw).unwrap();
//!
//! assert!(settings.features.voting_active);
//! assert!(!settings.features.fyb_week_active);
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
