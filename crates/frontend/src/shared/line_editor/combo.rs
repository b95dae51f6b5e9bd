//! Inline item picker for the row editor.
//!
//! A text input over the local item cache with a filtered dropdown.
//! Selection goes through `on_pick`; Enter is forwarded with the current
//! query text so the editor can run the match-or-create protocol.

use contracts::domain::a001_item::Item;
use leptos::prelude::*;

#[component]
pub fn ItemCombo(
    /// DOM id used by the editor's focus traversal.
    input_id: String,
    /// Code of the currently selected item; mirrored into the input when
    /// the selection changes externally (pick, ditto copy, rollback).
    #[prop(into)]
    selected_code: Signal<String>,
    #[prop(into)] items: Signal<Vec<Item>>,
    on_pick: Callback<Item>,
    /// Enter inside the picker; carries the query text at that moment.
    on_enter: Callback<String>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let open = RwSignal::new(false);

    // Memoized so the query is only reset when the selection itself
    // changes, not on every unrelated state update while the user types.
    let selected = Memo::new(move |_| selected_code.get());
    Effect::new(move || {
        query.set(selected.get());
    });

    let filtered = move || {
        let q = query.get().trim().to_lowercase();
        items
            .get()
            .into_iter()
            .filter(|i| {
                q.is_empty()
                    || i.code.to_lowercase().contains(&q)
                    || i.name.to_lowercase().contains(&q)
            })
            .take(8)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="item-combo" style="position: relative;">
            <input
                id=input_id
                type="text"
                autocomplete="off"
                placeholder="Item code or name"
                prop:value=move || query.get()
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    open.set(true);
                }
                on:focus=move |_| open.set(true)
                on:blur=move |_| open.set(false)
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        open.set(false);
                        on_enter.run(query.get_untracked());
                    }
                }
            />
            <Show when=move || open.get()>
                <div
                    class="item-combo__dropdown"
                    style="position:absolute;left:0;right:0;top:100%;z-index:20;background:var(--color-bg-primary,#fff);border:1px solid var(--color-border,#ddd);border-radius:var(--radius-sm);box-shadow:0 4px 12px rgba(0,0,0,0.15);max-height:240px;overflow:auto;"
                >
                    {move || {
                        let options = filtered();
                        if options.is_empty() {
                            view! {
                                <div style="padding:8px 10px;color:var(--color-text-tertiary);">
                                    "No match — Enter creates a new item"
                                </div>
                            }
                            .into_any()
                        } else {
                            options
                                .into_iter()
                                .map(|item| {
                                    let label = format!("{} — {}", item.code, item.name);
                                    // mousedown fires before the input's blur,
                                    // so the pick is not lost to the dropdown closing.
                                    view! {
                                        <div
                                            class="item-combo__option"
                                            style="padding:6px 10px;cursor:pointer;"
                                            on:mousedown=move |_| {
                                                open.set(false);
                                                on_pick.run(item.clone());
                                            }
                                        >
                                            {label}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
