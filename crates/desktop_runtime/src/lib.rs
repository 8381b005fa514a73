//! Window manager store and Leptos desktop shell for the portfolio desktop.
//!
//! [`reduce_desktop`] is the single transition function over [`DesktopState`]; the components
//! in [`components`] only read state signals and dispatch [`DesktopAction`] values.

pub mod apps;
pub mod components;
pub mod config;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
mod window_manager;

pub use apps::{AppCatalog, AppDescriptor, CatalogError};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::DesktopConfig;
pub use model::*;
pub use reducer::{open_app_by_key, reduce_desktop, DesktopAction, ReducerError};
