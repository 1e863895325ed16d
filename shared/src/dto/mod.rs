//! # Data Transfer Objects (DTOs)
//!
//! Settings documents exchanged between the operator tooling and the web
//! frontend.
//!
//! ## Module Organization
//!
//! - [`settings`] - Feature activation flags and logo configuration
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Missing fields**: Filled from `Default` using `#[serde(default)]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example Settings Document
//!
//! ```text
//! {
//!   "features": {
//!     "fyb_week_active": false,
//!     "voting_active": true
//!   },
//!   "logos": {
//!     "association_logo": "data:image/png;base64,..."
//!   }
//! }
//! ```

pub mod settings;

pub use settings::*;
