//! Site-wide UI state (intro gate, connectivity, theme, overlays)

use ashyus_common::HolidayTheme;
use dioxus::prelude::*;

/// Footer newsletter form state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum NewsletterStatus {
    #[default]
    Idle,
    Sending,
    /// Thank-you note is showing
    Subscribed,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Store)]
pub struct SiteUiState {
    /// Intro overlay still covers the site
    pub intro_visible: bool,
    pub admin_open: bool,
    /// Browser connectivity, from `online`/`offline` events
    pub online: bool,
    pub holiday_theme: HolidayTheme,
    pub mobile_banner_dismissed: bool,
    pub newsletter: NewsletterStatus,
}

impl Default for SiteUiState {
    fn default() -> Self {
        Self {
            intro_visible: true,
            admin_open: false,
            online: true,
            holiday_theme: HolidayTheme::Normal,
            mobile_banner_dismissed: false,
            newsletter: NewsletterStatus::Idle,
        }
    }
}
