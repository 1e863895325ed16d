//! Application constants

// Route destinations
pub const FYB_STUDENTS_ROUTE: &str = "/fyb-students";
pub const FYB_WEEK_ROUTE: &str = "/fyb-week";
pub const VOTE_ROUTE: &str = "/vote";

// Browser storage keys
pub const SETTINGS_STORAGE_KEY: &str = "nacos.settings";
pub const THEME_STORAGE_KEY: &str = "nacos.theme";
