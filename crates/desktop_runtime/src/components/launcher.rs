use super::*;

#[component]
pub(super) fn Launcher() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let groups = runtime.registry.launcher_groups();

    view! {
        <div class="launcher" role="region" aria-label="Applications">
            {groups
                .into_iter()
                .map(|(category, entries)| {
                    view! {
                        <section class="launcher-group" data-category=category.label()>
                            <h2 class="launcher-group-title">{category.label()}</h2>
                            <div class="launcher-grid">
                                {entries
                                    .into_iter()
                                    .map(|descriptor| {
                                        let action = launcher_action(descriptor);
                                        view! {
                                            <button
                                                type="button"
                                                class="launcher-tile"
                                                data-theme=descriptor.color_theme.clone()
                                                aria-label=format!("Open {}", descriptor.name)
                                                on:click=move |_| {
                                                    runtime.dispatch_action(action.clone())
                                                }
                                            >
                                                <span
                                                    class="app-icon"
                                                    data-icon=descriptor.icon.clone()
                                                    aria-hidden="true"
                                                ></span>
                                                <span class="launcher-tile-label">
                                                    {descriptor.name.clone()}
                                                </span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
