// Settings page: one form section per tab, filled from the configured defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{AppearanceSettings, NotificationSettings, ProfileSettings, UserSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Security,
    Appearance,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Security,
        SettingsTab::Appearance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Security => "Security",
            SettingsTab::Appearance => "Appearance",
        }
    }
}

impl FromStr for SettingsTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" => Ok(SettingsTab::Profile),
            "notifications" => Ok(SettingsTab::Notifications),
            "security" => Ok(SettingsTab::Security),
            "appearance" => Ok(SettingsTab::Appearance),
            other => Err(format!(
                "Unknown settings tab '{}'. Use profile, notifications, security or appearance.",
                other
            )),
        }
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_lowercase())
    }
}

/// Password change form. Always starts blank; passwords are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SettingsSection {
    Profile(ProfileSettings),
    Notifications(NotificationSettings),
    Security(SecurityForm),
    Appearance(AppearanceSettings),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPage {
    pub tab: SettingsTab,
    pub tabs: Vec<SettingsTab>,
    pub content: SettingsSection,
}

pub fn build_settings_page(settings: &UserSettings, tab: SettingsTab) -> SettingsPage {
    let content = match tab {
        SettingsTab::Profile => SettingsSection::Profile(settings.profile.clone()),
        SettingsTab::Notifications => {
            SettingsSection::Notifications(settings.notifications.clone())
        }
        SettingsTab::Security => SettingsSection::Security(SecurityForm::default()),
        SettingsTab::Appearance => SettingsSection::Appearance(settings.appearance.clone()),
    };

    SettingsPage {
        tab,
        tabs: SettingsTab::ALL.to_vec(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;

    #[test]
    fn test_profile_defaults() {
        let page = build_settings_page(&UserSettings::default(), SettingsTab::Profile);
        match page.content {
            SettingsSection::Profile(profile) => {
                assert_eq!(profile.name, "John Doe");
                assert_eq!(profile.email, "john.doe@example.com");
                assert_eq!(profile.title, "Project Manager");
            }
            other => panic!("unexpected section: {:?}", other),
        }
        assert_eq!(page.tabs.len(), 4);
    }

    #[test]
    fn test_notifications_default_on_except_marketing() {
        let page = build_settings_page(&UserSettings::default(), SettingsTab::Notifications);
        let SettingsSection::Notifications(n) = page.content else {
            panic!("expected notifications section");
        };
        assert!(n.email_notifications && n.project_updates && n.task_reminders);
        assert!(n.project_comments && n.team_messages);
        assert!(!n.marketing_emails);
    }

    #[test]
    fn test_security_form_is_blank() {
        let page = build_settings_page(&UserSettings::default(), SettingsTab::Security);
        assert_eq!(page.content, SettingsSection::Security(SecurityForm::default()));

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["content"]["section"], "security");
        assert_eq!(json["content"]["newPassword"], "");
    }

    #[test]
    fn test_appearance_uses_configured_settings() {
        let mut settings = UserSettings::default();
        settings.appearance.theme = Theme::Dark;
        let page = build_settings_page(&settings, SettingsTab::Appearance);
        let SettingsSection::Appearance(appearance) = page.content else {
            panic!("expected appearance section");
        };
        assert_eq!(appearance.theme, Theme::Dark);
        assert!(appearance.animations_enabled);
        assert!(!appearance.compact_view);
    }

    #[test]
    fn test_tab_parse() {
        for tab in SettingsTab::ALL {
            assert_eq!(tab.to_string().parse::<SettingsTab>(), Ok(tab));
        }
        assert!("billing".parse::<SettingsTab>().is_err());
    }
}
