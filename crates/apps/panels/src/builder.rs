//! DAO creation wizard.

use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct DaoDraft {
    name: String,
    token_symbol: String,
    quorum_percent: u8,
}

impl Default for DaoDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            token_symbol: String::new(),
            quorum_percent: 4,
        }
    }
}

impl DaoDraft {
    fn validation_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.name.trim().len() < 3 {
            errors.push("Name must be at least 3 characters");
        }
        let symbol = self.token_symbol.trim();
        if !(2..=6).contains(&symbol.len()) || !symbol.chars().all(|c| c.is_ascii_uppercase()) {
            errors.push("Token symbol must be 2-6 uppercase letters");
        }
        if !(1..=51).contains(&self.quorum_percent) {
            errors.push("Quorum must be between 1% and 51%");
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WizardStep {
    Details,
    Review,
    Submitted,
}

#[component]
/// Two-step DAO draft wizard. Submission stays local to the panel.
pub fn DaoBuilderPanel() -> impl IntoView {
    let draft = create_rw_signal(DaoDraft::default());
    let step = create_rw_signal(WizardStep::Details);
    let errors = Signal::derive(move || draft.get().validation_errors());

    view! {
        <div class="app-shell app-dao-builder">
            {move || match step.get() {
                WizardStep::Details => view! {
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        if errors.get_untracked().is_empty() {
                            step.set(WizardStep::Review);
                        }
                    }>
                        <label>
                            "Name "
                            <input
                                prop:value=move || draft.get().name
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.name = value);
                                }
                            />
                        </label>
                        <label>
                            "Token "
                            <input
                                prop:value=move || draft.get().token_symbol
                                on:input=move |ev| {
                                    let value = event_target_value(&ev).to_ascii_uppercase();
                                    draft.update(|d| d.token_symbol = value);
                                }
                            />
                        </label>
                        <label>
                            "Quorum % "
                            <input
                                type="number"
                                min="1"
                                max="51"
                                prop:value=move || draft.get().quorum_percent.to_string()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev).parse::<u8>().unwrap_or(0);
                                    draft.update(|d| d.quorum_percent = value);
                                }
                            />
                        </label>
                        <ul class="app-errors">
                            {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                        </ul>
                        <button type="submit" disabled=move || !errors.get().is_empty()>"Review"</button>
                    </form>
                }
                .into_view(),
                WizardStep::Review => {
                    let d = draft.get();
                    view! {
                        <div>
                            <p>{format!("{} ({}) with {}% quorum", d.name.trim(), d.token_symbol.trim(), d.quorum_percent)}</p>
                            <button type="button" on:click=move |_| step.set(WizardStep::Details)>"Back"</button>
                            <button type="button" on:click=move |_| step.set(WizardStep::Submitted)>"Create"</button>
                        </div>
                    }
                    .into_view()
                }
                WizardStep::Submitted => view! {
                    <div>
                        <p>"Draft queued for deployment."</p>
                        <button type="button" on:click=move |_| {
                            draft.set(DaoDraft::default());
                            step.set(WizardStep::Details);
                        }>"Start over"</button>
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}
