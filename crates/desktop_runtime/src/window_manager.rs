//! Window manager actions, side-effect intents, and transition logic.
//!
//! [`reduce_window_manager`] is the only code that mutates [`WindowManagerState`]. Each call is a
//! single synchronous transition: it either applies the whole action or returns an error and
//! leaves the state exactly as it found it.

use desktop_app_contract::ApplicationId;
use thiserror::Error;

use crate::{
    apps::AppRegistry,
    model::{OpenWindowState, WindowManagerState},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_window_manager`].
pub enum WindowManagerAction {
    /// Create the app's window, restore it if minimized, or raise it.
    OpenApp(ApplicationId),
    /// Stop tracking the app's window.
    CloseApp(ApplicationId),
    /// Flip the maximized flag.
    ToggleMaximize(ApplicationId),
    /// Flip the minimized flag without touching stacking or position.
    ToggleMinimize(ApplicationId),
    /// Raise the window to the top of the stack.
    FocusWindow(ApplicationId),
}

impl WindowManagerAction {
    pub fn app_id(&self) -> &ApplicationId {
        match self {
            Self::OpenApp(app_id)
            | Self::CloseApp(app_id)
            | Self::ToggleMaximize(app_id)
            | Self::ToggleMinimize(app_id)
            | Self::FocusWindow(app_id) => app_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_window_manager`] for the shell to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the window that was just created, restored, or raised.
    FocusWindowContent(ApplicationId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Why an action was ignored. The state is unchanged whenever one of these is returned.
pub enum WindowManagerError {
    /// The id is not in the app registry.
    #[error("unknown app `{0}`")]
    UnknownApp(ApplicationId),
    /// The app exists but has no tracked window.
    #[error("no open window for `{0}`")]
    WindowNotTracked(ApplicationId),
}

/// Applies a [`WindowManagerAction`] and collects resulting side effects.
///
/// # Errors
///
/// Returns [`WindowManagerError::UnknownApp`] for ids outside `registry`, and
/// [`WindowManagerError::WindowNotTracked`] when a window operation targets an app that is not
/// open. Callers treat both as no-ops.
pub fn reduce_window_manager(
    state: &mut WindowManagerState,
    registry: &AppRegistry,
    action: WindowManagerAction,
) -> Result<Vec<RuntimeEffect>, WindowManagerError> {
    let app_id = action.app_id().clone();
    if !registry.contains(&app_id) {
        return Err(WindowManagerError::UnknownApp(app_id));
    }

    let mut effects = Vec::new();
    match action {
        WindowManagerAction::OpenApp(app_id) => {
            let z_index = next_z_index(state);
            match state.windows.get_mut(&app_id) {
                Some(window) => {
                    // Restore keeps maximize and position as they were before minimizing.
                    window.is_minimized = false;
                    window.z_index = z_index;
                }
                None => {
                    let position = state.layout.position_for(state.windows.len());
                    let opened_seq = state.next_opened_seq;
                    state.next_opened_seq += 1;
                    state.windows.insert(
                        app_id.clone(),
                        OpenWindowState {
                            app_id: app_id.clone(),
                            is_maximized: false,
                            is_minimized: false,
                            z_index,
                            position,
                            opened_seq,
                        },
                    );
                }
            }
            effects.push(RuntimeEffect::FocusWindowContent(app_id));
        }
        WindowManagerAction::CloseApp(app_id) => {
            if state.windows.remove(&app_id).is_none() {
                return Err(WindowManagerError::WindowNotTracked(app_id));
            }
        }
        WindowManagerAction::ToggleMaximize(app_id) => {
            let window = find_window_mut(state, &app_id)?;
            window.is_maximized = !window.is_maximized;
        }
        WindowManagerAction::ToggleMinimize(app_id) => {
            let window = find_window_mut(state, &app_id)?;
            window.is_minimized = !window.is_minimized;
        }
        WindowManagerAction::FocusWindow(app_id) => {
            if !state.windows.contains_key(&app_id) {
                return Err(WindowManagerError::WindowNotTracked(app_id));
            }
            let z_index = next_z_index(state);
            if let Some(window) = state.windows.get_mut(&app_id) {
                window.z_index = z_index;
            }
            effects.push(RuntimeEffect::FocusWindowContent(app_id));
        }
    }

    Ok(effects)
}

/// Increments the stacking counter and returns the new top value.
fn next_z_index(state: &mut WindowManagerState) -> u64 {
    state.highest_z_index += 1;
    state.highest_z_index
}

fn find_window_mut<'a>(
    state: &'a mut WindowManagerState,
    app_id: &ApplicationId,
) -> Result<&'a mut OpenWindowState, WindowManagerError> {
    state
        .windows
        .get_mut(app_id)
        .ok_or_else(|| WindowManagerError::WindowNotTracked(app_id.clone()))
}
