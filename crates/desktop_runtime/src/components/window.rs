use super::*;

#[component]
pub(super) fn WindowFrame(app_id: ApplicationId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(descriptor) = runtime.registry.get(&app_id) else {
        return ().into_view();
    };
    let dom_id = window_frame_dom_id(&app_id);
    let app_id = store_value(app_id);

    let window = Signal::derive(move || {
        app_id.with_value(|id| runtime.state.get().window(id).cloned())
    });
    let focused = Signal::derive(move || {
        app_id.with_value(|id| runtime.state.get().is_focused(id))
    });

    let interact = move |interaction: FrameInteraction| {
        let action = app_id.with_value(|id| frame_action(id, interaction));
        runtime.dispatch_action(action);
    };
    let control = move |ev: web_sys::MouseEvent, which: FrameControl| {
        stop_mouse_event(&ev);
        interact(FrameInteraction::Control(which));
    };

    // Rendered once; attribute closures keep the panel mounted across focus and resize changes.
    let content = descriptor.render.render();

    view! {
        <section
            id=dom_id
            class=move || {
                window
                    .get()
                    .map(|w| window_frame_class(&w, focused.get()))
                    .unwrap_or_default()
            }
            style=move || window.get().map(|w| window_frame_style(&w)).unwrap_or_default()
            data-theme=descriptor.color_theme.clone()
            tabindex="-1"
            role="dialog"
            aria-label=descriptor.name.clone()
            on:click=move |_| interact(FrameInteraction::Body)
        >
            <header class="titlebar">
                <div class="titlebar-title">
                    <span class="app-icon" data-icon=descriptor.icon.clone() aria-hidden="true"></span>
                    <span>{descriptor.name.clone()}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| control(ev, FrameControl::Minimize)
                    >
                        "\u{2013}"
                    </button>
                    <button
                        type="button"
                        aria-label=move || {
                            if window.get().map(|w| w.is_maximized).unwrap_or(false) {
                                "Restore window"
                            } else {
                                "Maximize window"
                            }
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| control(ev, FrameControl::ToggleMaximize)
                    >
                        "\u{25a1}"
                    </button>
                    <button
                        type="button"
                        class="titlebar-close"
                        aria-label="Close window"
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| control(ev, FrameControl::Close)
                    >
                        "\u{00d7}"
                    </button>
                </div>
            </header>
            <div class="window-body">{content}</div>
        </section>
    }
    .into_view()
}
