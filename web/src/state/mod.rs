//! Application state management

pub mod gate;
pub mod settings;
