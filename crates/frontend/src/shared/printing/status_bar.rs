//! Printer hardware status bar.
//!
//! Polls default-printer availability for the lifetime of the page view,
//! independent of any print job, and renders a small status strip.

use contracts::shared::printing::PrinterStatus;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::fetch_printer_status;
use super::poll::PRINTER_POLL_INTERVAL_MS;

#[component]
pub fn PrinterStatusBar() -> impl IntoView {
    let (status, set_status) = signal(None::<PrinterStatus>);

    // The loop checks the flag on every iteration and winds down when the
    // view unmounts.
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    Effect::new(move || {
        spawn_local(async move {
            loop {
                if !alive.get_value() {
                    break;
                }
                match fetch_printer_status().await {
                    Ok(s) => set_status.set(Some(s)),
                    Err(e) => {
                        log!("Printer status check failed: {}", e);
                        set_status.set(None);
                    }
                }
                TimeoutFuture::new(PRINTER_POLL_INTERVAL_MS).await;
            }
        });
    });

    view! {
        <div class="status-bar" style="display:flex;align-items:center;gap:var(--spacing-sm);padding:var(--spacing-sm) 0;color:var(--color-text-tertiary);font-size:var(--font-size-sm);">
            {move || match status.get() {
                Some(s) if s.online => {
                    let name = s
                        .printer_name
                        .clone()
                        .unwrap_or_else(|| "default printer".to_string());
                    view! {
                        <>
                            <span class="badge badge--success">"Printer online"</span>
                            <span>{name}</span>
                        </>
                    }
                    .into_any()
                }
                Some(s) => {
                    let name = s
                        .printer_name
                        .clone()
                        .unwrap_or_else(|| "default printer".to_string());
                    view! {
                        <>
                            <span class="badge badge--warning">"Printer offline"</span>
                            <span>{name}</span>
                        </>
                    }
                    .into_any()
                }
                None => view! {
                    <span class="badge badge--secondary">"Printer status unknown"</span>
                }
                .into_any(),
            }}
        </div>
    }
}
