//! Browser-side execution of reducer effects.

use desktop_app_contract::ApplicationId;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::window_manager::RuntimeEffect;

/// DOM id of the frame element rendered for `app_id`.
pub fn window_frame_dom_id(app_id: &ApplicationId) -> String {
    format!("window-frame-{}", app_id.dom_token())
}

/// Executes a single [`RuntimeEffect`] emitted by the reducer.
pub fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowContent(app_id) => focus_window_frame(&app_id),
    }
}

/// Moves keyboard focus to the window frame once the current render pass has flushed.
fn focus_window_frame(app_id: &ApplicationId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = window_frame_dom_id(app_id);
        let callback = Closure::once_into_js(move || {
            let Some(element) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(&dom_id))
            else {
                return;
            };
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = app_id;
}
