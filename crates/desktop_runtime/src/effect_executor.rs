//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{host, runtime_context::DesktopRuntimeContext, window_manager::RuntimeEffect};

/// Takes every queued effect, leaving the queue empty. Reading subscribes the caller.
fn drain_effects(effects: RwSignal<Vec<RuntimeEffect>>) -> Vec<RuntimeEffect> {
    let queued = effects.get();
    if !queued.is_empty() {
        effects.set(Vec::new());
    }
    queued
}

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before running so effects that dispatch again enqueue a fresh batch.
    create_effect(move |_| {
        for effect in drain_effects(runtime.effects) {
            host::run_runtime_effect(effect);
        }
    });
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn draining_returns_effects_in_order_and_clears_the_queue() {
        let _ = create_runtime();
        let effects = create_rw_signal(vec![
            RuntimeEffect::FocusWindowContent(ApplicationId::trusted("test.a")),
            RuntimeEffect::FocusWindowContent(ApplicationId::trusted("test.b")),
        ]);

        assert_eq!(
            drain_effects(effects),
            vec![
                RuntimeEffect::FocusWindowContent(ApplicationId::trusted("test.a")),
                RuntimeEffect::FocusWindowContent(ApplicationId::trusted("test.b")),
            ]
        );
        assert!(effects.get_untracked().is_empty());
        assert!(drain_effects(effects).is_empty());
    }
}
