//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived window manager state, the runtime effect queue, and the single
//! dispatch path through which every view mutates that state. UI composition stays in
//! [`crate::components`].

use desktop_app_contract::ApplicationId;
use leptos::*;

use crate::{
    apps::{app_registry, AppRegistry},
    config::shell_config,
    effect_executor,
    model::WindowManagerState,
    window_manager::{
        reduce_window_manager, RuntimeEffect, WindowManagerAction, WindowManagerError,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// An action the window manager declined, with the reason. Delivered to the optional
/// `on_ignored_action` hook; the state is unchanged.
pub struct IgnoredAction {
    pub action: WindowManagerAction,
    pub reason: WindowManagerError,
}

#[derive(Clone, Copy)]
/// Leptos context for reading window manager state and dispatching [`WindowManagerAction`] values.
pub struct DesktopRuntimeContext {
    /// Static application catalog.
    pub registry: &'static AppRegistry,
    /// Reactive window manager state. Views read it; only `dispatch` writes it.
    pub state: RwSignal<WindowManagerState>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<WindowManagerAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a window manager action through the runtime context callback.
    pub fn dispatch_action(&self, action: WindowManagerAction) {
        self.dispatch.call(action);
    }
}

fn report_ignored(hook: Option<Callback<IgnoredAction>>, ignored: IgnoredAction) {
    if shell_config().report_ignored_actions {
        logging::log!("window action {:?} ignored: {}", ignored.action, ignored.reason);
    }
    if let Some(hook) = hook {
        hook.call(ignored);
    }
}

/// Runs one action through the reducer. Applied actions replace `state` and queue their effects;
/// ignored ones leave both signals untouched and go to `hook`.
fn apply_action(
    state: RwSignal<WindowManagerState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    registry: &AppRegistry,
    hook: Option<Callback<IgnoredAction>>,
    action: WindowManagerAction,
) {
    let mut next = state.get_untracked();
    match reduce_window_manager(&mut next, registry, action.clone()) {
        Ok(new_effects) => {
            state.set(next);
            if !new_effects.is_empty() {
                effects.update(|queue| queue.extend(new_effects));
            }
        }
        Err(reason) => report_ignored(hook, IgnoredAction { action, reason }),
    }
}

/// Actions dispatched once at boot, one `OpenApp` per requested app in request order.
fn boot_actions(initial_apps: Vec<ApplicationId>) -> impl Iterator<Item = WindowManagerAction> {
    initial_apps.into_iter().map(WindowManagerAction::OpenApp)
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Apps to open once the provider is ready, in order (for example from a deep link).
    #[prop(optional)]
    initial_apps: Vec<ApplicationId>,
    /// Observes actions the window manager ignored. Never called for applied actions.
    #[prop(optional)]
    on_ignored_action: Option<Callback<IgnoredAction>>,
    children: Children,
) -> impl IntoView {
    let registry = app_registry();
    let state = create_rw_signal(WindowManagerState::new(shell_config().stagger_layout()));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: WindowManagerAction| {
        apply_action(state, effects, registry, on_ignored_action, action);
    });

    let runtime = DesktopRuntimeContext {
        registry,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    for action in boot_actions(initial_apps) {
        runtime.dispatch_action(action);
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps::test_support::registry;

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::trusted(raw)
    }

    fn signals() -> (RwSignal<WindowManagerState>, RwSignal<Vec<RuntimeEffect>>) {
        (
            create_rw_signal(WindowManagerState::default()),
            create_rw_signal(Vec::new()),
        )
    }

    #[test]
    fn ignored_actions_reach_the_hook_and_leave_state_alone() {
        let _ = create_runtime();
        let registry = registry();
        let (state, effects) = signals();
        let seen = create_rw_signal(Vec::<IgnoredAction>::new());
        let hook = Callback::new(move |ignored: IgnoredAction| {
            seen.update(|all| all.push(ignored));
        });

        apply_action(
            state,
            effects,
            &registry,
            Some(hook),
            WindowManagerAction::OpenApp(id("test.a")),
        );
        let before = state.get_untracked();

        apply_action(
            state,
            effects,
            &registry,
            Some(hook),
            WindowManagerAction::OpenApp(id("ghost.app")),
        );
        apply_action(
            state,
            effects,
            &registry,
            Some(hook),
            WindowManagerAction::CloseApp(id("test.b")),
        );

        assert_eq!(state.get_untracked(), before);
        assert_eq!(
            seen.get_untracked(),
            vec![
                IgnoredAction {
                    action: WindowManagerAction::OpenApp(id("ghost.app")),
                    reason: WindowManagerError::UnknownApp(id("ghost.app")),
                },
                IgnoredAction {
                    action: WindowManagerAction::CloseApp(id("test.b")),
                    reason: WindowManagerError::WindowNotTracked(id("test.b")),
                },
            ]
        );
    }

    #[test]
    fn applied_actions_update_state_and_queue_effects() {
        let _ = create_runtime();
        let registry = registry();
        let (state, effects) = signals();

        apply_action(state, effects, &registry, None, WindowManagerAction::OpenApp(id("test.a")));
        apply_action(
            state,
            effects,
            &registry,
            None,
            WindowManagerAction::ToggleMinimize(id("test.a")),
        );

        let current = state.get_untracked();
        assert!(current.window(&id("test.a")).is_some_and(|w| w.is_minimized));
        assert_eq!(
            effects.get_untracked(),
            vec![RuntimeEffect::FocusWindowContent(id("test.a"))]
        );
    }

    #[test]
    fn boot_opens_requested_apps_in_order() {
        let _ = create_runtime();
        let registry = registry();
        let (state, effects) = signals();

        for action in boot_actions(vec![id("test.b"), id("test.a")]) {
            apply_action(state, effects, &registry, None, action);
        }

        let docked: Vec<ApplicationId> = state
            .get_untracked()
            .open_windows()
            .into_iter()
            .map(|w| w.app_id.clone())
            .collect();
        assert_eq!(docked, vec![id("test.b"), id("test.a")]);
        assert!(state.get_untracked().is_focused(&id("test.a")));
        assert_eq!(effects.get_untracked().len(), 2);
    }
}
