//! Desktop shell UI composition: launcher, window layer, and dock.

mod dock;
mod launcher;
mod window;

use desktop_app_contract::ApplicationId;
use leptos::*;

use self::{dock::Dock, launcher::Launcher, window::WindowFrame};

use crate::{
    dispatch::{dock_action, dock_indicator_label, frame_action, launcher_action},
    dispatch::{FrameControl, FrameInteraction},
    host::window_frame_dom_id,
    model::{OpenWindowState, WindowManagerState},
    runtime_context::use_desktop_runtime,
};

/// Ids of windows rendered as frames, in creation order so focus changes never reorder the DOM.
fn rendered_window_ids(state: &WindowManagerState) -> Vec<ApplicationId> {
    state
        .open_windows()
        .into_iter()
        .filter(|w| !w.is_minimized)
        .map(|w| w.app_id.clone())
        .collect()
}

fn docked_window_ids(state: &WindowManagerState) -> Vec<ApplicationId> {
    state
        .open_windows()
        .into_iter()
        .map(|w| w.app_id.clone())
        .collect()
}

fn window_frame_class(window: &OpenWindowState, focused: bool) -> String {
    let mut class = String::from("window-frame");
    if focused {
        class.push_str(" focused");
    }
    if window.is_maximized {
        class.push_str(" maximized");
    }
    class
}

/// Maximized frames fill the desktop through CSS, so only the stacking order is inlined.
fn window_frame_style(window: &OpenWindowState) -> String {
    if window.is_maximized {
        format!("z-index:{};", window.z_index)
    } else {
        format!(
            "left:{}px;top:{}px;z-index:{};",
            window.position.x, window.position.y, window.z_index
        )
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Renders the desktop: the launcher while nothing is open, every visible window, and the dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div id="desktop-shell-root" class="desktop-shell">
            <Show when=move || state.get().launcher_visible() fallback=|| ()>
                <Launcher />
            </Show>
            <div class="desktop-window-layer">
                <For
                    each=move || rendered_window_ids(&state.get())
                    key=|app_id| app_id.clone()
                    let:app_id
                >
                    <WindowFrame app_id=app_id />
                </For>
            </div>
            <Dock />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        apps::test_support::registry,
        window_manager::{reduce_window_manager, WindowManagerAction},
    };

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::trusted(raw)
    }

    fn state_with(actions: Vec<WindowManagerAction>) -> WindowManagerState {
        let registry = registry();
        let mut state = WindowManagerState::default();
        for action in actions {
            let _ = reduce_window_manager(&mut state, &registry, action);
        }
        state
    }

    #[test]
    fn minimized_windows_leave_the_window_layer_but_stay_docked() {
        let state = state_with(vec![
            WindowManagerAction::OpenApp(id("test.a")),
            WindowManagerAction::OpenApp(id("test.b")),
            WindowManagerAction::ToggleMinimize(id("test.a")),
        ]);

        assert_eq!(rendered_window_ids(&state), vec![id("test.b")]);
        assert_eq!(docked_window_ids(&state), vec![id("test.a"), id("test.b")]);
    }

    #[test]
    fn focus_changes_do_not_reorder_rendered_frames() {
        let state = state_with(vec![
            WindowManagerAction::OpenApp(id("test.a")),
            WindowManagerAction::OpenApp(id("test.b")),
            WindowManagerAction::FocusWindow(id("test.a")),
        ]);

        assert_eq!(rendered_window_ids(&state), vec![id("test.a"), id("test.b")]);
        assert!(state.is_focused(&id("test.a")));
    }

    #[test]
    fn frame_style_drops_position_when_maximized() {
        let state = state_with(vec![WindowManagerAction::OpenApp(id("test.a"))]);
        let mut window = state.window(&id("test.a")).cloned().expect("window");

        assert_eq!(window_frame_style(&window), "left:48px;top:48px;z-index:1;");
        assert_eq!(window_frame_class(&window, true), "window-frame focused");

        window.is_maximized = true;
        assert_eq!(window_frame_style(&window), "z-index:1;");
        assert_eq!(window_frame_class(&window, false), "window-frame maximized");
    }
}
