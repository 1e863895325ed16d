//! UI Components

pub mod logos;
pub mod notice_dialog;
pub mod theme_toggle;

pub use logos::{AssociationLogoPlaceholder, SchoolLogoPlaceholder};
pub use notice_dialog::NoticeDialog;
pub use theme_toggle::ThemeToggle;
