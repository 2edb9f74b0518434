use super::*;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <nav class="dock" aria-label="Open windows">
            <For
                each=move || docked_window_ids(&state.get())
                key=|app_id| app_id.clone()
                let:app_id
            >
                <DockIndicator app_id=app_id />
            </For>
        </nav>
    }
}

#[component]
fn DockIndicator(app_id: ApplicationId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(descriptor) = runtime.registry.get(&app_id) else {
        return ().into_view();
    };
    let app_id = store_value(app_id);

    let window = Signal::derive(move || {
        app_id.with_value(|id| runtime.state.get().window(id).cloned())
    });
    let focused = Signal::derive(move || {
        app_id.with_value(|id| runtime.state.get().is_focused(id))
    });
    let name = descriptor.name.clone();

    let activate = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if let Some(win) = window.get_untracked() {
            runtime.dispatch_action(dock_action(&win));
        }
    };

    view! {
        <button
            type="button"
            class=move || {
                let mut class = String::from("dock-indicator");
                if window.get().map(|w| w.is_minimized).unwrap_or(false) {
                    class.push_str(" minimized");
                }
                if focused.get() {
                    class.push_str(" focused");
                }
                class
            }
            data-theme=descriptor.color_theme.clone()
            aria-pressed=move || focused.get().to_string()
            aria-label=move || {
                window
                    .get()
                    .map(|w| dock_indicator_label(&name, &w, focused.get()))
                    .unwrap_or_default()
            }
            on:click=activate
        >
            <span class="app-icon" data-icon=descriptor.icon.clone() aria-hidden="true"></span>
        </button>
    }
    .into_view()
}
