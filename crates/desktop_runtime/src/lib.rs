//! Simulated desktop window manager: app registry, window state machine, and the Leptos shell
//! that renders the launcher, window frames, and dock.

pub mod apps;
pub mod components;
pub mod config;
pub mod dispatch;
mod effect_executor;
pub mod host;
pub mod model;
pub mod runtime_context;
pub mod window_manager;

pub use apps::{app_registry, AppDescriptor, AppRegistry, RegistryError};
pub use components::DesktopShell;
pub use model::*;
pub use runtime_context::{
    use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, IgnoredAction,
};
pub use window_manager::{
    reduce_window_manager, RuntimeEffect, WindowManagerAction, WindowManagerError,
};
