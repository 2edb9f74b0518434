//! Built-in application panels rendered inside desktop windows.
//!
//! Every panel is a self-contained, zero-argument component that owns its own reactive state for
//! as long as it is mounted. None of them talk to the window manager.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod builder;
mod chat;
mod dashboards;
mod marketplace;
mod notes;

use desktop_app_contract::AppModule;
use leptos::*;

pub use builder::DaoBuilderPanel;
pub use chat::CommunityChatPanel;
pub use dashboards::{GovernanceDashboardPanel, TreasuryDashboardPanel};
pub use marketplace::NftMarketplacePanel;
pub use notes::NotesPanel;

fn render_treasury() -> View {
    view! { <TreasuryDashboardPanel /> }.into_view()
}

fn render_governance() -> View {
    view! { <GovernanceDashboardPanel /> }.into_view()
}

fn render_dao_builder() -> View {
    view! { <DaoBuilderPanel /> }.into_view()
}

fn render_marketplace() -> View {
    view! { <NftMarketplacePanel /> }.into_view()
}

fn render_chat() -> View {
    view! { <CommunityChatPanel /> }.into_view()
}

fn render_notes() -> View {
    view! { <NotesPanel /> }.into_view()
}

const PANEL_MODULES: [(&str, AppModule); 6] = [
    ("dashboard.treasury", AppModule::new(render_treasury)),
    ("dashboard.governance", AppModule::new(render_governance)),
    ("builder.dao", AppModule::new(render_dao_builder)),
    ("market.nft", AppModule::new(render_marketplace)),
    ("chat.community", AppModule::new(render_chat)),
    ("utility.notes", AppModule::new(render_notes)),
];

/// Returns the render unit registered for `app_id`, if this crate provides one.
pub fn panel_module(app_id: &str) -> Option<AppModule> {
    PANEL_MODULES
        .iter()
        .find(|(id, _)| *id == app_id)
        .map(|(_, module)| *module)
}

/// Ids of every panel this crate provides.
pub fn panel_ids() -> impl Iterator<Item = &'static str> {
    PANEL_MODULES.iter().map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_lookup_is_exact() {
        assert!(panel_module("builder.dao").is_some());
        assert!(panel_module("builder").is_none());
        assert!(panel_module("BUILDER.DAO").is_none());
    }

    #[test]
    fn panel_ids_are_unique() {
        let mut ids: Vec<_> = panel_ids().collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
