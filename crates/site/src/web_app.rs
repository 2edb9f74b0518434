use desktop_runtime::{DeepLinkState, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="DAO Desktop" />
        <Meta name="description" content="A desktop-style workspace for DAO dashboards, builders, and community tools." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

/// Desktop route. `?open=a.b,c.d` opens those apps in order once the shell is ready.
#[component]
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let deep_link = query.with_untracked(|map| {
        map.get("open")
            .map(|raw| DeepLinkState::from_open_param(raw))
            .unwrap_or_default()
    });

    view! {
        <DesktopProvider initial_apps=deep_link.open>
            <DesktopShell />
        </DesktopProvider>
    }
}
