//! Application settings context
//!
//! The settings are operator supplied: a JSON document in browser storage
//! (written by the admin tooling) seeds the context on startup. The gated
//! controls read the flags through this context on every render, so a flag
//! flipped in a running session is picked up on the next interaction.

use leptos::prelude::*;
use shared::dto::settings::AppSettings;

use crate::utils::constants::SETTINGS_STORAGE_KEY;

/// Global settings context
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub settings: RwSignal<AppSettings>,
}

impl SettingsContext {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings: RwSignal::new(settings),
        }
    }

    pub fn fyb_week_active(&self) -> bool {
        self.settings.with(|s| s.features.fyb_week_active)
    }

    pub fn voting_active(&self) -> bool {
        self.settings.with(|s| s.features.voting_active)
    }

    pub fn association_logo(&self) -> Option<String> {
        self.settings.with(|s| s.logos.association_logo.clone())
    }

    pub fn school_logo(&self) -> Option<String> {
        self.settings.with(|s| s.logos.school_logo.clone())
    }
}

pub fn provide_settings_context() -> SettingsContext {
    let context = SettingsContext::new(load_settings());
    provide_context(context);
    context
}

pub fn use_settings_context() -> SettingsContext {
    expect_context::<SettingsContext>()
}

/// Read the operator settings document from browser storage, falling back to
/// defaults (every feature inactive, placeholder logos) when the document is
/// absent or malformed.
fn load_settings() -> AppSettings {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return AppSettings::default(),
    };
    let storage = match window.local_storage() {
        Ok(Some(s)) => s,
        _ => return AppSettings::default(),
    };

    match storage.get_item(SETTINGS_STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("malformed settings document, using defaults: {}", err);
                AppSettings::default()
            }
        },
        _ => AppSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::settings::FeatureSettings;

    #[test]
    fn context_reflects_latest_settings() {
        let context = SettingsContext::new(AppSettings::default());
        assert!(!context.fyb_week_active());
        assert!(!context.voting_active());

        context.settings.update(|s| {
            s.features = FeatureSettings {
                fyb_week_active: false,
                voting_active: true,
            }
        });
        assert!(!context.fyb_week_active());
        assert!(context.voting_active());
    }
}
