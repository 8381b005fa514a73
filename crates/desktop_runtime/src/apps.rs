//! Installed-application registry and the content factories/renderers for each app kind.

use desktop_app_about::AboutApp;
use desktop_app_contact::ContactApp;
use desktop_app_contract::{
    AppContent, AppId, AppIdParseError, AppServices, AppView, ContentFactory, WindowId,
};
use desktop_app_projects::ProjectsApp;
use desktop_app_recycle_bin::RecycleBinApp;
use desktop_app_resume::ResumeApp;
use desktop_app_settings::SettingsApp;
use leptos::*;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{PointerPosition, WindowSize};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("app catalog is not valid manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    UnknownApp(#[from] AppIdParseError),
}

#[derive(Debug, Deserialize)]
struct ManifestWindowDefaults {
    width: i32,
    height: i32,
}

#[derive(Debug, Deserialize)]
struct ManifestWindowPosition {
    x: i32,
    y: i32,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    app_id: String,
    display_name: String,
    icon: String,
    #[serde(default)]
    system_app: bool,
    #[serde(default)]
    show_on_desktop: bool,
    #[serde(default)]
    desktop_slot: Option<u32>,
    #[serde(default)]
    window_defaults: Option<ManifestWindowDefaults>,
    #[serde(default)]
    window_position: Option<ManifestWindowPosition>,
}

/// Static description of one installed app.
#[derive(Debug, Clone)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub display_name: String,
    pub icon: String,
    /// Informational only.
    pub system_app: bool,
    pub default_size: Option<WindowSize>,
    pub default_position: Option<PointerPosition>,
    pub show_on_desktop: bool,
    pub desktop_slot: Option<u32>,
    pub factory: ContentFactory,
}

// `factory` is fully determined by `app_id`.
impl PartialEq for AppDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.display_name == other.display_name
            && self.icon == other.icon
            && self.system_app == other.system_app
            && self.default_size == other.default_size
            && self.default_position == other.default_position
            && self.show_on_desktop == other.show_on_desktop
            && self.desktop_slot == other.desktop_slot
    }
}

impl AppDescriptor {
    pub fn new(app_id: AppId, display_name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            app_id,
            display_name: display_name.into(),
            icon: icon.into(),
            system_app: false,
            default_size: None,
            default_position: None,
            show_on_desktop: false,
            desktop_slot: None,
            factory: content_factory(app_id),
        }
    }

    fn from_manifest(entry: ManifestEntry) -> Result<Self, CatalogError> {
        let app_id = entry.app_id.parse::<AppId>()?;
        Ok(Self {
            app_id,
            display_name: entry.display_name,
            icon: entry.icon,
            system_app: entry.system_app,
            default_size: entry.window_defaults.map(|size| WindowSize {
                width: size.width,
                height: size.height,
            }),
            default_position: entry
                .window_position
                .map(|pos| PointerPosition { x: pos.x, y: pos.y }),
            show_on_desktop: entry.show_on_desktop,
            desktop_slot: entry.desktop_slot,
            factory: content_factory(app_id),
        })
    }

    /// Runs this app's content factory for a freshly issued window id.
    pub fn instantiate(&self, window_id: WindowId) -> AppContent {
        (self.factory)(window_id)
    }
}

/// Registry of installed apps, in launcher order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppCatalog {
    apps: Vec<AppDescriptor>,
}

impl AppCatalog {
    /// Loads the catalog generated from the app crates' `app.manifest.toml` files.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_manifest_json(APP_MANIFEST_CATALOG_JSON)
    }

    pub fn from_manifest_json(raw: &str) -> Result<Self, CatalogError> {
        let entries: Vec<ManifestEntry> = serde_json::from_str(raw)?;
        let apps = entries
            .into_iter()
            .map(AppDescriptor::from_manifest)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { apps })
    }

    pub fn from_descriptors(apps: Vec<AppDescriptor>) -> Self {
        Self { apps }
    }

    pub fn descriptor(&self, app_id: AppId) -> Option<&AppDescriptor> {
        self.apps.iter().find(|entry| entry.app_id == app_id)
    }

    pub fn all(&self) -> &[AppDescriptor] {
        &self.apps
    }

    /// Apps shown as desktop icons, ordered by slot.
    pub fn desktop_icons(&self) -> Vec<AppDescriptor> {
        let mut icons: Vec<AppDescriptor> = self
            .apps
            .iter()
            .filter(|entry| entry.show_on_desktop)
            .cloned()
            .collect();
        icons.sort_by_key(|entry| entry.desktop_slot.unwrap_or(u32::MAX));
        icons
    }
}

fn content_factory(app_id: AppId) -> ContentFactory {
    match app_id {
        AppId::About => |id| AppContent::new(id, AppView::default_for(AppId::About)),
        AppId::Projects => |id| AppContent::new(id, AppView::default_for(AppId::Projects)),
        AppId::Resume => |id| AppContent::new(id, AppView::default_for(AppId::Resume)),
        AppId::Contact => |id| AppContent::new(id, AppView::default_for(AppId::Contact)),
        AppId::Settings => |id| AppContent::new(id, AppView::default_for(AppId::Settings)),
        AppId::RecycleBin => {
            |id| AppContent::new(id, AppView::default_for(AppId::RecycleBin))
        }
    }
}

/// Renders a window's content handle. The runtime never looks inside the view otherwise.
pub fn render_window_contents(content: &AppContent, services: AppServices) -> View {
    match &content.view {
        AppView::About => view! { <AboutApp services=services /> }.into_view(),
        AppView::Projects { selected } => {
            view! { <ProjectsApp selected=selected.clone() services=services /> }.into_view()
        }
        AppView::Resume => view! { <ResumeApp /> }.into_view(),
        AppView::Contact => view! { <ContactApp /> }.into_view(),
        AppView::Settings => view! { <SettingsApp services=services /> }.into_view(),
        AppView::RecycleBin => view! { <RecycleBinApp /> }.into_view(),
    }
}
