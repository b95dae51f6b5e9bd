//! Application shell: resolves the voucher from the query string and
//! mounts the matching stock-entry page.

use contracts::domain::a003_stock_voucher::{StockType, StockVoucher};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;
use thaw::Spinner;
use web_sys::window;

use crate::domain::a003_stock_voucher::fetch_voucher;
use crate::domain::a004_roll_stock_item::ui::RollStockPage;
use crate::domain::a005_chem_stock_item::ui::ChemStockPage;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[derive(Debug, Default, Deserialize)]
struct ShellQuery {
    voucher: Option<i64>,
}

fn voucher_id_from_url() -> Option<i64> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let query: ShellQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query.voucher
}

#[component]
pub fn App() -> impl IntoView {
    let voucher = RwSignal::new(None::<StockVoucher>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let Some(id) = voucher_id_from_url() else {
            error.set(Some(
                "No voucher selected: open this page as ?voucher=<id>".to_string(),
            ));
            loading.set(false);
            return;
        };
        spawn_local(async move {
            match fetch_voucher(id).await {
                Ok(found) => voucher.set(Some(found)),
                Err(e) => error.set(Some(format!("Could not load voucher {}: {}", id, e))),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="app">
            {move || {
                if loading.get() {
                    return view! {
                        <PageFrame page_id="app--loading" category=PAGE_CAT_SYSTEM>
                            <div style="padding:var(--spacing-lg);text-align:center;">
                                <Spinner/>
                            </div>
                        </PageFrame>
                    }
                        .into_any();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <PageFrame page_id="app--error" category=PAGE_CAT_SYSTEM>
                            <div class="banner banner--error" style="color:var(--color-danger);">
                                {message}
                            </div>
                        </PageFrame>
                    }
                        .into_any();
                }
                match voucher.get() {
                    Some(voucher) => match voucher.stock_type {
                        StockType::Roll => view! { <RollStockPage voucher=voucher/> }.into_any(),
                        StockType::Chemical => {
                            view! { <ChemStockPage voucher=voucher/> }.into_any()
                        }
                    },
                    None => view! {
                        <PageFrame page_id="app--error" category=PAGE_CAT_SYSTEM>
                            <div class="banner banner--error">"Voucher not found"</div>
                        </PageFrame>
                    }
                        .into_any(),
                }
            }}
        </div>
    }
}
