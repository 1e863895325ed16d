use serde::{Deserialize, Serialize};

/// Operator-controlled activation flags for the gated landing page actions.
///
/// Both flags default to `false`: a fresh deployment shows every gated
/// feature as "not yet available" until an operator switches it on.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeatureSettings {
    pub fyb_week_active: bool,
    pub voting_active: bool,
}

/// Logo configuration (data URLs uploaded by the association admins).
///
/// A `None` entry means the frontend renders its built-in placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogoSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_logo: Option<String>,
}

/// Full settings document as written by the operator tooling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    pub features: FeatureSettings,
    pub logos: LogoSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_every_feature_inactive() {
        let settings = AppSettings::default();
        assert!(!settings.features.fyb_week_active);
        assert!(!settings.features.voting_active);
        assert_eq!(settings.logos.association_logo, None);
        assert_eq!(settings.logos.school_logo, None);
    }

    #[test]
    fn partial_document_fills_missing_fields_from_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "features": { "voting_active": true } }"#).unwrap();
        assert!(settings.features.voting_active);
        assert!(!settings.features.fyb_week_active);
        assert_eq!(settings.logos.association_logo, None);
    }

    #[test]
    fn empty_document_parses_to_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn unset_logos_are_omitted_from_json() {
        let json = serde_json::to_string(&AppSettings::default()).unwrap();
        assert!(!json.contains("association_logo"));
        assert!(json.contains("fyb_week_active"));
    }
}
