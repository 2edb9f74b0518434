//! NFT listing browser.

use leptos::*;

#[derive(Debug, Clone, PartialEq)]
struct Listing {
    token_id: u32,
    collection: &'static str,
    title: &'static str,
    price_eth: f64,
}

fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            token_id: 101,
            collection: "Harbor Lights",
            title: "Lighthouse at dusk",
            price_eth: 0.42,
        },
        Listing {
            token_id: 7,
            collection: "Harbor Lights",
            title: "Fog bank",
            price_eth: 1.1,
        },
        Listing {
            token_id: 3311,
            collection: "Pixel Guild",
            title: "Guild crest",
            price_eth: 0.08,
        },
        Listing {
            token_id: 58,
            collection: "Pixel Guild",
            title: "Quest board",
            price_eth: 0.25,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceSort {
    LowToHigh,
    HighToLow,
}

fn filter_and_sort(listings: &[Listing], query: &str, sort: PriceSort) -> Vec<Listing> {
    let query = query.trim().to_lowercase();
    let mut matched: Vec<Listing> = listings
        .iter()
        .filter(|l| {
            query.is_empty()
                || l.title.to_lowercase().contains(&query)
                || l.collection.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();
    matched.sort_by(|a, b| {
        let ord = a.price_eth.total_cmp(&b.price_eth);
        match sort {
            PriceSort::LowToHigh => ord,
            PriceSort::HighToLow => ord.reverse(),
        }
    });
    matched
}

#[component]
/// Searchable, price-sorted listing grid.
pub fn NftMarketplacePanel() -> impl IntoView {
    let listings = seed_listings();
    let query = create_rw_signal(String::new());
    let sort = create_rw_signal(PriceSort::LowToHigh);
    let visible = Signal::derive(move || filter_and_sort(&listings, &query.get(), sort.get()));

    view! {
        <div class="app-shell app-marketplace">
            <div class="app-toolbar" role="search">
                <input
                    type="search"
                    placeholder="Search listings"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button type="button" on:click=move |_| {
                    sort.update(|s| {
                        *s = match *s {
                            PriceSort::LowToHigh => PriceSort::HighToLow,
                            PriceSort::HighToLow => PriceSort::LowToHigh,
                        }
                    })
                }>
                    {move || match sort.get() {
                        PriceSort::LowToHigh => "Price: low to high",
                        PriceSort::HighToLow => "Price: high to low",
                    }}
                </button>
            </div>
            <ul class="app-grid">
                <For each=move || visible.get() key=|l| l.token_id let:listing>
                    <li>
                        <strong>{listing.title}</strong>
                        <span>{format!("{} #{}", listing.collection, listing.token_id)}</span>
                        <span>{format!("{:.2} ETH", listing.price_eth)}</span>
                    </li>
                </For>
            </ul>
            <div class="app-statusbar">
                <span>{move || format!("{} listings", visible.get().len())}</span>
            </div>
        </div>
    }
}
