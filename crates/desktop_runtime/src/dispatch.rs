//! Maps view-level interactions to window manager actions.
//!
//! Chrome controls map to exactly one action and never to the frame's implicit focus, so closing a
//! window cannot raise it first. The DOM handlers also stop propagation, but correctness does not
//! depend on it.

use desktop_app_contract::ApplicationId;

use crate::{
    apps::AppDescriptor, model::OpenWindowState, window_manager::WindowManagerAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Minimize,
    ToggleMaximize,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where inside a window frame the user clicked.
pub enum FrameInteraction {
    /// Anywhere in the frame outside the chrome controls.
    Body,
    /// One of the title-bar buttons.
    Control(FrameControl),
}

pub fn launcher_action(descriptor: &AppDescriptor) -> WindowManagerAction {
    WindowManagerAction::OpenApp(descriptor.app_id.clone())
}

/// Minimized indicators restore through `OpenApp`; visible ones are raised.
pub fn dock_action(window: &OpenWindowState) -> WindowManagerAction {
    if window.is_minimized {
        WindowManagerAction::OpenApp(window.app_id.clone())
    } else {
        WindowManagerAction::FocusWindow(window.app_id.clone())
    }
}

pub fn frame_action(app_id: &ApplicationId, interaction: FrameInteraction) -> WindowManagerAction {
    let app_id = app_id.clone();
    match interaction {
        FrameInteraction::Body => WindowManagerAction::FocusWindow(app_id),
        FrameInteraction::Control(FrameControl::Minimize) => {
            WindowManagerAction::ToggleMinimize(app_id)
        }
        FrameInteraction::Control(FrameControl::ToggleMaximize) => {
            WindowManagerAction::ToggleMaximize(app_id)
        }
        FrameInteraction::Control(FrameControl::Close) => WindowManagerAction::CloseApp(app_id),
    }
}

/// Accessible label for a dock indicator.
pub fn dock_indicator_label(name: &str, window: &OpenWindowState, focused: bool) -> String {
    let mut parts = vec![name.to_string()];
    if focused && !window.is_minimized {
        parts.push("focused".to_string());
    }
    if window.is_minimized {
        parts.push("minimized".to_string());
    }
    if window.is_maximized {
        parts.push("maximized".to_string());
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppCategory;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{apps::test_support::descriptor, model::WindowPosition};

    fn window(minimized: bool, maximized: bool) -> OpenWindowState {
        OpenWindowState {
            app_id: ApplicationId::trusted("test.a"),
            is_maximized: maximized,
            is_minimized: minimized,
            z_index: 1,
            position: WindowPosition::default(),
            opened_seq: 0,
        }
    }

    #[test]
    fn chrome_controls_never_dispatch_focus() {
        let app_id = ApplicationId::trusted("test.a");
        for control in [
            FrameControl::Minimize,
            FrameControl::ToggleMaximize,
            FrameControl::Close,
        ] {
            let action = frame_action(&app_id, FrameInteraction::Control(control));
            assert!(!matches!(action, WindowManagerAction::FocusWindow(_)));
        }
        assert_eq!(
            frame_action(&app_id, FrameInteraction::Control(FrameControl::Close)),
            WindowManagerAction::CloseApp(app_id.clone())
        );
        assert_eq!(
            frame_action(&app_id, FrameInteraction::Body),
            WindowManagerAction::FocusWindow(app_id)
        );
    }

    #[test]
    fn dock_restores_minimized_and_focuses_visible() {
        assert_eq!(
            dock_action(&window(true, false)),
            WindowManagerAction::OpenApp(ApplicationId::trusted("test.a"))
        );
        assert_eq!(
            dock_action(&window(false, false)),
            WindowManagerAction::FocusWindow(ApplicationId::trusted("test.a"))
        );
    }

    #[test]
    fn launcher_opens_selected_descriptor() {
        let entry = descriptor("test.b", AppCategory::Builders);
        assert_eq!(launcher_action(&entry), WindowManagerAction::OpenApp(entry.app_id.clone()));
    }

    #[test]
    fn dock_labels_describe_window_state() {
        assert_eq!(dock_indicator_label("Notes", &window(false, false), false), "Notes");
        assert_eq!(
            dock_indicator_label("Notes", &window(false, true), true),
            "Notes, focused, maximized"
        );
        assert_eq!(
            dock_indicator_label("Notes", &window(true, true), true),
            "Notes, minimized, maximized"
        );
    }
}
