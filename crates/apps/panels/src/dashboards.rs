//! Treasury and governance overview panels.

use leptos::*;

#[derive(Debug, Clone, PartialEq)]
struct TreasuryAsset {
    symbol: &'static str,
    amount: f64,
    usd_price: f64,
}

const TREASURY_ASSETS: [TreasuryAsset; 4] = [
    TreasuryAsset {
        symbol: "ETH",
        amount: 412.5,
        usd_price: 3120.0,
    },
    TreasuryAsset {
        symbol: "USDC",
        amount: 1_250_000.0,
        usd_price: 1.0,
    },
    TreasuryAsset {
        symbol: "GOV",
        amount: 8_400_000.0,
        usd_price: 0.42,
    },
    TreasuryAsset {
        symbol: "WBTC",
        amount: 11.2,
        usd_price: 61_500.0,
    },
];

fn treasury_total_usd(assets: &[TreasuryAsset]) -> f64 {
    assets.iter().map(|a| a.amount * a.usd_price).sum()
}

fn asset_share_percent(asset: &TreasuryAsset, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    asset.amount * asset.usd_price / total * 100.0
}

fn format_usd(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[component]
/// Treasury holdings overview with a USD / native-unit toggle.
pub fn TreasuryDashboardPanel() -> impl IntoView {
    let show_usd = create_rw_signal(true);
    let total = treasury_total_usd(&TREASURY_ASSETS);

    view! {
        <div class="app-shell app-treasury">
            <div class="app-toolbar" role="group" aria-label="Treasury display">
                <button
                    type="button"
                    aria-pressed=move || show_usd.get().to_string()
                    on:click=move |_| show_usd.update(|v| *v = !*v)
                >
                    {move || if show_usd.get() { "Show units" } else { "Show USD" }}
                </button>
            </div>
            <table class="app-table">
                <thead>
                    <tr><th>"Asset"</th><th>"Holding"</th><th>"Share"</th></tr>
                </thead>
                <tbody>
                    {TREASURY_ASSETS
                        .iter()
                        .map(|asset| {
                            let asset = asset.clone();
                            let share = format!("{:.1}%", asset_share_percent(&asset, total));
                            view! {
                                <tr>
                                    <td>{asset.symbol}</td>
                                    <td>
                                        {move || {
                                            if show_usd.get() {
                                                format_usd(asset.amount * asset.usd_price)
                                            } else {
                                                format!("{} {}", asset.amount, asset.symbol)
                                            }
                                        }}
                                    </td>
                                    <td>{share}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <div class="app-statusbar">
                <span>{format!("Total: {}", format_usd(total))}</span>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Proposal {
    id: u32,
    title: &'static str,
    votes_for: u64,
    votes_against: u64,
}

impl Proposal {
    fn approval_percent(&self) -> u64 {
        let cast = self.votes_for + self.votes_against;
        if cast == 0 {
            return 0;
        }
        self.votes_for * 100 / cast
    }
}

fn seed_proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: 14,
            title: "Fund grants round Q3",
            votes_for: 1_840,
            votes_against: 420,
        },
        Proposal {
            id: 15,
            title: "Raise quorum to 8%",
            votes_for: 610,
            votes_against: 905,
        },
        Proposal {
            id: 16,
            title: "Onboard new market maker",
            votes_for: 0,
            votes_against: 0,
        },
    ]
}

#[component]
/// Open governance proposals with local, unsubmitted vote tallies.
pub fn GovernanceDashboardPanel() -> impl IntoView {
    let proposals = create_rw_signal(seed_proposals());

    let vote = move |id: u32, in_favor: bool| {
        proposals.update(|all| {
            if let Some(p) = all.iter_mut().find(|p| p.id == id) {
                if in_favor {
                    p.votes_for += 1;
                } else {
                    p.votes_against += 1;
                }
            }
        });
    };

    view! {
        <div class="app-shell app-governance">
            <ul class="app-list">
                <For each=move || proposals.get() key=|p| (p.id, p.votes_for, p.votes_against) let:proposal>
                    {{
                        let id = proposal.id;
                        view! {
                            <li>
                                <strong>{format!("#{} {}", proposal.id, proposal.title)}</strong>
                                <span>{format!(" {}% approve", proposal.approval_percent())}</span>
                                <button type="button" on:click=move |_| vote(id, true)>"For"</button>
                                <button type="button" on:click=move |_| vote(id, false)>"Against"</button>
                            </li>
                        }
                    }}
                </For>
            </ul>
        </div>
    }
}
