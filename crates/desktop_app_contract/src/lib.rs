//! Shared contract types between the desktop window manager runtime and the portfolio apps.
//!
//! The runtime owns window records and focus/z-order bookkeeping; apps only ever see the
//! view descriptor they were instantiated with plus an injected service bundle
//! ([`AppServices`]) for the few shell-level actions they are allowed to request.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, str::FromStr};

use leptos::{Callable, Callback, Signal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of one window instance. Issued by the runtime, never reused within a page lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Closed set of application kinds known to the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    /// Profile/introduction window.
    About,
    /// Project gallery with per-project detail view.
    Projects,
    /// Resume viewer.
    Resume,
    /// Contact form.
    Contact,
    /// Desktop personalization (dark overlay, accent color).
    Settings,
    /// Discarded ideas.
    RecycleBin,
}

impl AppId {
    /// Every app kind, in catalog order.
    pub const ALL: [AppId; 6] = [
        Self::About,
        Self::Projects,
        Self::Resume,
        Self::Contact,
        Self::Settings,
        Self::RecycleBin,
    ];

    /// Returns the stable string key used in manifests and deep links.
    pub const fn key(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Contact => "contact",
            Self::Settings => "settings",
            Self::RecycleBin => "recycle-bin",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raised when a string key does not name any known app kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown application identifier `{0}`")]
pub struct AppIdParseError(pub String);

impl FromStr for AppId {
    type Err = AppIdParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        Self::ALL
            .into_iter()
            .find(|app_id| app_id.key() == key)
            .ok_or_else(|| AppIdParseError(raw.to_string()))
    }
}

/// Accent overlay color, normalized to lowercase `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccentColor(String);

/// Errors returned by [`AccentColor::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccentColorError {
    /// The value does not start with `#`.
    #[error("accent color `{0}` must start with `#`")]
    MissingHash(String),
    /// The value is not six hex digits after the `#`.
    #[error("accent color `{0}` must be six hex digits")]
    InvalidDigits(String),
}

impl AccentColor {
    /// Parses a `#RRGGBB` hex color.
    pub fn parse(raw: &str) -> Result<Self, AccentColorError> {
        let trimmed = raw.trim();
        let Some(digits) = trimmed.strip_prefix('#') else {
            return Err(AccentColorError::MissingHash(raw.to_string()));
        };
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AccentColorError::InvalidDigits(raw.to_string()));
        }
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    /// Returns the normalized `#rrggbb` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renderable view descriptor. One variant per app kind; the runtime never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppView {
    /// About window.
    About,
    /// Project gallery, optionally opened on one project's detail page.
    Projects {
        /// Project id shown in detail, or `None` for the grid.
        selected: Option<String>,
    },
    /// Resume viewer.
    Resume,
    /// Contact form.
    Contact,
    /// Settings window.
    Settings,
    /// Recycle bin listing.
    RecycleBin,
}

impl AppView {
    /// Returns the app kind this view belongs to.
    pub const fn app_id(&self) -> AppId {
        match self {
            Self::About => AppId::About,
            Self::Projects { .. } => AppId::Projects,
            Self::Resume => AppId::Resume,
            Self::Contact => AppId::Contact,
            Self::Settings => AppId::Settings,
            Self::RecycleBin => AppId::RecycleBin,
        }
    }

    /// Default view for `app_id`.
    pub const fn default_for(app_id: AppId) -> Self {
        match app_id {
            AppId::About => Self::About,
            AppId::Projects => Self::Projects { selected: None },
            AppId::Resume => Self::Resume,
            AppId::Contact => Self::Contact,
            AppId::Settings => Self::Settings,
            AppId::RecycleBin => Self::RecycleBin,
        }
    }
}

/// Content handle retained by a window record for its whole lifetime.
///
/// Re-opening an app after close produces a new handle bound to a new [`WindowId`];
/// minimize/restore keeps the same one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContent {
    /// Window instance this content was created for.
    pub window_id: WindowId,
    /// View descriptor to render.
    pub view: AppView,
}

impl AppContent {
    /// Binds `view` to `window_id`.
    pub fn new(window_id: WindowId, view: AppView) -> Self {
        Self { window_id, view }
    }
}

/// Signature of a per-app content factory.
pub type ContentFactory = fn(WindowId) -> AppContent;

/// Shell-level requests an app may send to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Flip the dark overlay.
    ToggleDarkMode,
    /// Set or clear the accent overlay color.
    SetAccentColorOverlay {
        /// New color, or `None` to clear.
        color: Option<AccentColor>,
    },
    /// Open (or bring forward) another app, optionally with custom content.
    OpenApp {
        /// App to open.
        app_id: AppId,
        /// Custom view used when a new window has to be created.
        view: Option<AppView>,
    },
}

#[derive(Clone, Copy)]
/// Theme service for the cosmetic overlay settings.
pub struct ThemeService {
    sender: Callback<AppCommand>,
    /// Whether the dark overlay is active.
    pub dark_overlay: Signal<bool>,
    /// Current accent overlay color.
    pub accent_color: Signal<Option<AccentColor>>,
}

impl ThemeService {
    /// Requests a dark overlay toggle.
    pub fn toggle_dark_mode(&self) {
        self.sender.call(AppCommand::ToggleDarkMode);
    }

    /// Requests an accent overlay change.
    pub fn set_accent_color(&self, color: Option<AccentColor>) {
        self.sender.call(AppCommand::SetAccentColorOverlay { color });
    }
}

#[derive(Clone, Copy)]
/// Launcher service for opening other apps from inside a window.
pub struct LauncherService {
    sender: Callback<AppCommand>,
}

impl LauncherService {
    /// Opens `app_id` with its default content.
    pub fn open(&self, app_id: AppId) {
        self.sender.call(AppCommand::OpenApp {
            app_id,
            view: None,
        });
    }

    /// Opens the app owning `view`, creating the window with `view` if none is open.
    pub fn open_with(&self, view: AppView) {
        self.sender.call(AppCommand::OpenApp {
            app_id: view.app_id(),
            view: Some(view),
        });
    }
}

#[derive(Clone, Copy)]
/// Service bundle injected into every app view.
pub struct AppServices {
    /// Window the app is mounted in.
    pub window_id: WindowId,
    /// Cosmetic settings.
    pub theme: ThemeService,
    /// App launching.
    pub launcher: LauncherService,
}

impl AppServices {
    /// Builds the service bundle around a runtime command sender.
    pub fn new(
        window_id: WindowId,
        sender: Callback<AppCommand>,
        dark_overlay: Signal<bool>,
        accent_color: Signal<Option<AccentColor>>,
    ) -> Self {
        Self {
            window_id,
            theme: ThemeService {
                sender,
                dark_overlay,
                accent_color,
            },
            launcher: LauncherService { sender },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_keys_parse_back_to_the_same_kind() {
        for app_id in AppId::ALL {
            assert_eq!(app_id.key().parse::<AppId>(), Ok(app_id));
        }
        assert_eq!(" recycle-bin ".parse::<AppId>(), Ok(AppId::RecycleBin));
    }

    #[test]
    fn unknown_app_key_is_rejected() {
        assert_eq!(
            "unknown-app".parse::<AppId>(),
            Err(AppIdParseError("unknown-app".to_string()))
        );
        assert!("About".parse::<AppId>().is_err());
    }

    #[test]
    fn accent_color_is_normalized_to_lowercase() {
        let color = AccentColor::parse("#0078D4").expect("valid color");
        assert_eq!(color.as_str(), "#0078d4");
        assert_eq!(color, AccentColor::parse(" #0078d4 ").expect("valid color"));
    }

    #[test]
    fn malformed_accent_colors_are_rejected() {
        assert_eq!(
            AccentColor::parse("0078D4"),
            Err(AccentColorError::MissingHash("0078D4".to_string()))
        );
        assert_eq!(
            AccentColor::parse("#12345"),
            Err(AccentColorError::InvalidDigits("#12345".to_string()))
        );
        assert!(AccentColor::parse("#GGGGGG").is_err());
    }

    #[test]
    fn view_descriptors_map_to_their_app() {
        for app_id in AppId::ALL {
            assert_eq!(AppView::default_for(app_id).app_id(), app_id);
        }
        let detail = AppView::Projects {
            selected: Some("proj-git-smart".to_string()),
        };
        assert_eq!(detail.app_id(), AppId::Projects);
    }

    #[test]
    fn window_ids_render_with_prefix() {
        assert_eq!(WindowId(7).to_string(), "window-7");
    }
}
