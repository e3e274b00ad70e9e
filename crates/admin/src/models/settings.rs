//! Global site settings.

use serde::{Deserialize, Serialize};

use sonaverse_core::Bilingual;

/// The single global site-settings document.
///
/// Stored as one row; updates are last-write-wins with no optimistic
/// concurrency control. Contention is effectively nil (a single admin actor
/// at a time in practice).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteSettings {
    /// Site title shown in browser tabs and social cards.
    pub site_title: Bilingual<String>,
    /// Footer contact line.
    pub contact_email: String,
    /// Company phone number displayed on the site.
    pub contact_phone: String,
    /// Company address, per locale.
    pub address: Bilingual<String>,
    /// Whether the public inquiry form accepts submissions.
    pub inquiries_open: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: Bilingual::new("소나버스".to_string(), "Sonaverse".to_string()),
            contact_email: "contact@sonaverse.kr".to_string(),
            contact_phone: String::new(),
            address: Bilingual::new(String::new(), String::new()),
            inquiries_open: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let settings = SiteSettings::default();
        let json = serde_json::to_value(&settings).unwrap();
        let back: SiteSettings = serde_json::from_value(json).unwrap();
        assert_eq!(back, settings);
    }
}
