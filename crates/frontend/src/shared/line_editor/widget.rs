//! The editor widget: table rendering, focus traversal and async
//! orchestration on top of the pure state in [`super::model`].
//!
//! One `RwSignal<EditorState>` drives the whole table; every user-visible
//! transition is a single `update` on it. Async completions (save, delete,
//! print) re-find their row by stable key or persisted id, never by index.

use std::collections::{BTreeSet, HashMap};

use contracts::domain::a001_item::{Item, NewItem};
use contracts::domain::a003_stock_voucher::StockVoucher;
use contracts::shared::printing::PrintRequest;
use futures::future::join_all;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};
use wasm_bindgen::JsCast;

use super::api::{
    create_item, create_row, delete_row, ensure_default_uom, fetch_items, fetch_rows, fetch_uoms,
    update_row,
};
use super::combo::ItemCombo;
use super::fields::{parse_input, FieldDef, FieldKind, FieldValue};
use super::keynav::{handle_enter, EnterNext};
use super::model::{validate_draft, EditorState, LineDraft, RowKey};
use super::LineItemSpec;
use crate::shared::icons::icon;
use crate::shared::printing::poll::{
    poll_verdict, print_precondition, PollVerdict, PrintSlot, RowPrintState, DONE_DWELL_MS,
    POLL_INTERVAL_MS,
};
use crate::shared::printing::{fetch_default_template, fetch_job_status, submit_print_job};

/// DOM id of one field input, used for Enter-key focus traversal.
fn field_input_id(entity: &str, key: RowKey, field_idx: usize) -> String {
    format!("{}-li-{}-{}", entity, key, field_idx)
}

fn focus_field(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        if let Ok(html) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = html.focus();
        }
    }
}

/// Focuses after the next render so freshly mounted inputs are reachable.
fn focus_field_soon(id: String) {
    spawn_local(async move {
        TimeoutFuture::new(50).await;
        focus_field(&id);
    });
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Builds the line-item editor for one voucher. Plain function rather than
/// a component so the variant can be picked with a turbofish at the call
/// site: `line_item_editor::<RollItemSpec>(voucher)`.
pub fn line_item_editor<S: LineItemSpec>(voucher: StockVoucher) -> impl IntoView {
    let voucher_id = voucher.id;
    let voucher = StoredValue::new(voucher);

    let state = RwSignal::new(EditorState::<S::Draft>::new());
    let items = RwSignal::new(Vec::<Item>::new());
    let uoms = RwSignal::new(Vec::<contracts::domain::a002_uom::Uom>::new());
    let template = RwSignal::new(None::<contracts::shared::printing::PrintTemplate>);
    // Keys of rows with a save or delete in flight; each row's buttons are
    // disabled independently of its neighbours.
    let busy = RwSignal::new(BTreeSet::<RowKey>::new());
    let bulk_busy = RwSignal::new(false);
    let loading = RwSignal::new(true);
    // Backend and network failures only; validation stays on the row.
    let error = RwSignal::new(None::<String>);
    let row_errors = RwSignal::new(HashMap::<RowKey, String>::new());
    let print_states = RwSignal::new(HashMap::<i64, PrintSlot>::new());
    let next_job_seq = StoredValue::new(0u64);

    let load_all = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_rows::<S>(voucher_id).await {
                Ok(rows) => state.update(|s| s.load(rows)),
                Err(e) => error.set(Some(e)),
            }
            match fetch_items(S::ITEM_GROUP).await {
                Ok(list) => items.set(list),
                Err(e) => log!("Item catalog load failed: {}", e),
            }
            if S::HAS_UOM {
                match fetch_uoms().await {
                    Ok(list) => uoms.set(list),
                    Err(e) => log!("UOM catalog load failed: {}", e),
                }
            }
            match fetch_default_template(S::TEMPLATE_KEY).await {
                Ok(found) => template.set(found),
                Err(e) => log!("Print template lookup failed: {}", e),
            }
            loading.set(false);
        });
    };
    Effect::new(move || load_all());

    let save_row = move |key: RowKey| {
        if busy.with_untracked(|b| b.contains(&key)) {
            return;
        }
        let Some(draft) = state.with_untracked(|s| s.book.get(key).map(|r| r.draft.clone()))
        else {
            return;
        };
        if let Err(message) = validate_draft(&draft) {
            row_errors.update(|m| {
                m.insert(key, message);
            });
            return;
        }
        row_errors.update(|m| {
            m.remove(&key);
        });
        busy.update(|b| {
            b.insert(key);
        });
        error.set(None);
        spawn_local(async move {
            let result = match draft.id() {
                Some(id) => update_row::<S>(id, &draft).await,
                None => create_row::<S>(voucher_id, &draft).await,
            };
            busy.update(|b| {
                b.remove(&key);
            });
            match result {
                Ok(canonical) => {
                    state.update(|s| s.commit_saved(key, canonical));
                    // Keep the entry flow going: jump to the fresh slot.
                    if let Some(tail) = state.with_untracked(|s| s.book.tail_key()) {
                        focus_field_soon(field_input_id(S::ENTITY, tail, 0));
                    }
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let delete_one = move |key: RowKey| {
        let id = state.with_untracked(|s| s.book.get(key).and_then(|r| r.draft.id()));
        let Some(id) = id else {
            // An unsaved row only exists locally.
            row_errors.update(|m| {
                m.remove(&key);
            });
            state.update(|s| s.cancel_edit(key));
            return;
        };
        if !confirm("Delete this item?") {
            return;
        }
        busy.update(|b| {
            b.insert(key);
        });
        spawn_local(async move {
            let result = delete_row::<S>(id).await;
            busy.update(|b| {
                b.remove(&key);
            });
            match result {
                Ok(()) => state.update(|s| s.remove_row(key)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let bulk_delete = move || {
        let ids: Vec<i64> = state.with_untracked(|s| s.selection().iter().copied().collect());
        if ids.is_empty() || bulk_busy.get_untracked() {
            return;
        }
        if !confirm(&format!("Delete {} selected items?", ids.len())) {
            return;
        }
        bulk_busy.set(true);
        error.set(None);
        spawn_local(async move {
            let total = ids.len();
            let results = join_all(
                ids.into_iter()
                    .map(|id| async move { (id, delete_row::<S>(id).await) }),
            )
            .await;
            let mut removed = BTreeSet::new();
            let mut failed = Vec::new();
            for (id, result) in results {
                match result {
                    Ok(()) => {
                        removed.insert(id);
                    }
                    Err(e) => failed.push((id, e)),
                }
            }
            // One state update: succeeded rows disappear, failed rows stay
            // listed and selected for a retry.
            state.update(|s| s.remove_saved_ids(&removed));
            if !failed.is_empty() {
                let id_list = failed
                    .iter()
                    .map(|(id, _)| id.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                error.set(Some(format!(
                    "Failed to delete {} of {} items (ids {})",
                    failed.len(),
                    total,
                    id_list
                )));
            }
            bulk_busy.set(false);
        });
    };

    let print_row = move |id: i64| {
        let tpl = template.get_untracked();
        if let Err(message) = print_precondition(tpl.as_ref(), Some(id), S::TEMPLATE_KEY) {
            error.set(Some(message));
            return;
        }
        let Some(tpl) = tpl else {
            return;
        };
        let in_flight = print_states.with_untracked(|m| {
            matches!(
                m.get(&id),
                Some(slot) if slot.state == RowPrintState::Printing
            )
        });
        if in_flight {
            return;
        }
        let Some(draft) =
            state.with_untracked(|s| s.book.find_by_id(id).map(|r| r.draft.clone()))
        else {
            return;
        };
        let data = voucher.with_value(|v| S::print_data(v, &draft));
        let job_seq = next_job_seq.with_value(|v| *v) + 1;
        next_job_seq.set_value(job_seq);
        print_states.update(|m| {
            m.insert(
                id,
                PrintSlot {
                    job_seq,
                    state: RowPrintState::Printing,
                },
            );
        });
        spawn_local(async move {
            let request = PrintRequest {
                template_id: tpl.id,
                data,
                copies: 1,
            };
            let terminal = match submit_print_job(&request).await {
                Ok(ticket) => {
                    let mut attempts = 0u32;
                    loop {
                        TimeoutFuture::new(POLL_INTERVAL_MS).await;
                        attempts += 1;
                        let status = match fetch_job_status(&ticket.job_id).await {
                            Ok(status) => Some(status),
                            Err(e) => {
                                log!("Print status check failed: {}", e);
                                None
                            }
                        };
                        match poll_verdict(status, attempts) {
                            PollVerdict::KeepPolling => continue,
                            PollVerdict::Finished => break RowPrintState::Done,
                            PollVerdict::Failed => break RowPrintState::Failed,
                        }
                    }
                }
                Err(e) => {
                    log!("Print submit failed: {}", e);
                    RowPrintState::Failed
                }
            };
            print_states.update(|m| {
                m.insert(
                    id,
                    PrintSlot {
                        job_seq,
                        state: terminal,
                    },
                );
            });
            // Show the terminal badge for a moment, then clear. Ownership
            // is checked by job, not by state, so a newer job's badge for
            // the same row survives this timer.
            TimeoutFuture::new(DONE_DWELL_MS).await;
            print_states.update(|m| {
                if m.get(&id).map_or(false, |slot| slot.owned_by(job_seq)) {
                    m.remove(&id);
                }
            });
        });
    };

    let bulk_print = move || {
        let ids: Vec<i64> = state.with_untracked(|s| s.selection().iter().copied().collect());
        for id in ids {
            print_row(id);
        }
    };

    let on_enter = move |key: RowKey, field_idx: usize, picker_query: String| {
        let catalog = items.get_untracked();
        let mut next = EnterNext::Advance;
        state.update(|s| {
            next = handle_enter(
                &mut s.book,
                S::fields(),
                key,
                field_idx,
                &catalog,
                &picker_query,
            );
        });
        match next {
            EnterNext::Advance => {
                focus_field_soon(field_input_id(S::ENTITY, key, field_idx + 1));
            }
            EnterNext::Save => save_row(key),
            EnterNext::CreateItem(name) => {
                spawn_local(async move {
                    let uom_id = match ensure_default_uom().await {
                        Ok(uom) => Some(uom.id),
                        Err(e) => {
                            log!("Default UOM lookup failed: {}", e);
                            None
                        }
                    };
                    let new_item = NewItem {
                        name: name.clone(),
                        group: S::ITEM_GROUP.to_string(),
                        uom_id,
                    };
                    match create_item(&new_item).await {
                        Ok(item) => {
                            items.update(|list| list.push(item.clone()));
                            state.update(|s| {
                                s.update_draft(key, |d| d.apply_item(Some(&item)));
                            });
                            focus_field_soon(field_input_id(S::ENTITY, key, field_idx + 1));
                        }
                        Err(e) => {
                            error.set(Some(format!("Could not create item '{}': {}", name, e)));
                        }
                    }
                });
            }
        }
    };

    let selected_count = Signal::derive(move || state.with(|s| s.selection().len()));

    view! {
        <div class="line-editor" id=format!("{}--editor", S::ENTITY)>
            <div
                class="line-editor__toolbar"
                style="display:flex;align-items:center;gap:var(--spacing-sm);margin-bottom:var(--spacing-sm);"
            >
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| load_all()
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || {
                        selected_count.get() == 0 || bulk_busy.get()
                    })
                    on_click=move |_| bulk_delete()
                >
                    {icon("trash")}
                    {move || format!(" Delete selected ({})", selected_count.get())}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || selected_count.get() == 0)
                    on_click=move |_| bulk_print()
                >
                    {icon("printer")}
                    {move || format!(" Print labels ({})", selected_count.get())}
                </Button>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div
                                class="banner banner--error"
                                style="margin-bottom:var(--spacing-sm);color:var(--color-danger);"
                            >
                                {message}
                            </div>
                        }
                    })
            }}

            {move || {
                if loading.get() {
                    view! {
                        <div style="padding:var(--spacing-lg);text-align:center;">
                            <Spinner/>
                        </div>
                    }
                        .into_any()
                } else {
                    editor_table::<S>(state, items, uoms, busy, row_errors, print_states, save_row, delete_one, print_row, on_enter)
                        .into_any()
                }
            }}
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn editor_table<S: LineItemSpec>(
    state: RwSignal<EditorState<S::Draft>>,
    items: RwSignal<Vec<Item>>,
    uoms: RwSignal<Vec<contracts::domain::a002_uom::Uom>>,
    busy: RwSignal<BTreeSet<RowKey>>,
    row_errors: RwSignal<HashMap<RowKey, String>>,
    print_states: RwSignal<HashMap<i64, PrintSlot>>,
    save_row: impl Fn(RowKey) + Copy + Send + Sync + 'static,
    delete_one: impl Fn(RowKey) + Copy + Send + Sync + 'static,
    print_row: impl Fn(i64) + Copy + Send + Sync + 'static,
    on_enter: impl Fn(RowKey, usize, String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let row_keys = move || {
        state.with(|s| s.book.rows().iter().map(|r| r.key).collect::<Vec<_>>())
    };

    view! {
        <table class="data-table line-editor__table" style="width:100%;">
            <thead>
                <tr>
                    <th style="width:32px;">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.all_selected())
                            on:change=move |_| state.update(|s| s.toggle_select_all())
                        />
                    </th>
                    {S::fields()
                        .iter()
                        .map(|field| view! { <th>{field.label}</th> })
                        .collect_view()}
                    <th style="width:180px;">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For each=row_keys key=|key| *key let:key>
                    {row_view::<S>(key, state, items, uoms, busy, row_errors, print_states, save_row, delete_one, print_row, on_enter)}
                </For>
            </tbody>
        </table>
    }
}

#[allow(clippy::too_many_arguments)]
fn row_view<S: LineItemSpec>(
    key: RowKey,
    state: RwSignal<EditorState<S::Draft>>,
    items: RwSignal<Vec<Item>>,
    uoms: RwSignal<Vec<contracts::domain::a002_uom::Uom>>,
    busy: RwSignal<BTreeSet<RowKey>>,
    row_errors: RwSignal<HashMap<RowKey, String>>,
    print_states: RwSignal<HashMap<i64, PrintSlot>>,
    save_row: impl Fn(RowKey) + Copy + Send + Sync + 'static,
    delete_one: impl Fn(RowKey) + Copy + Send + Sync + 'static,
    print_row: impl Fn(i64) + Copy + Send + Sync + 'static,
    on_enter: impl Fn(RowKey, usize, String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let editing = Signal::derive(move || {
        state.with(|s| s.book.get(key).map_or(false, |r| r.editing))
    });
    let row_id = Signal::derive(move || {
        state.with(|s| s.book.get(key).and_then(|r| r.draft.id()))
    });
    let row_busy = Signal::derive(move || busy.with(|b| b.contains(&key)));

    view! {
        <tr class=move || {
            if editing.get() {
                "line-editor__row line-editor__row--editing"
            } else {
                "line-editor__row"
            }
        }>
            <td class="line-editor__cell line-editor__cell--select">
                {move || match row_id.get() {
                    Some(id) if !editing.get() => {
                        view! {
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.is_selected(id))
                                on:change=move |_| state.update(|s| s.toggle_selected(id))
                            />
                        }
                            .into_any()
                    }
                    _ => view! { <span></span> }.into_any(),
                }}
            </td>
            {S::fields()
                .iter()
                .enumerate()
                .map(|(idx, field)| field_cell::<S>(key, idx, field, state, items, uoms, on_enter))
                .collect_view()}
            <td class="line-editor__cell line-editor__cell--actions">
                {move || {
                    if editing.get() {
                        edit_actions(key, row_id, row_busy, state, row_errors, save_row).into_any()
                    } else {
                        display_actions(key, row_id, row_busy, print_states, delete_one, print_row, state)
                            .into_any()
                    }
                }}
            </td>
        </tr>
    }
}

fn field_cell<S: LineItemSpec>(
    key: RowKey,
    idx: usize,
    field: &'static FieldDef<S::Draft>,
    state: RwSignal<EditorState<S::Draft>>,
    items: RwSignal<Vec<Item>>,
    uoms: RwSignal<Vec<contracts::domain::a002_uom::Uom>>,
    on_enter: impl Fn(RowKey, usize, String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let input_id = field_input_id(S::ENTITY, key, idx);

    view! {
        <td class="line-editor__cell">
            {move || {
                let editing = state
                    .with(|s| s.book.get(key).map_or(false, |r| r.editing));
                if !editing {
                    let text = state
                        .with(|s| {
                            s.book
                                .get(key)
                                .map(|r| match field.kind {
                                    FieldKind::ItemPicker => {
                                        let code = r.draft.item_code();
                                        let name = r.draft.item_name();
                                        if code.is_empty() {
                                            name.to_string()
                                        } else {
                                            format!("{} — {}", code, name)
                                        }
                                    }
                                    FieldKind::UomPicker => r.draft.uom_name().to_string(),
                                    _ => (field.get)(&r.draft).display_text(),
                                })
                                .unwrap_or_default()
                        });
                    view! { <span class="line-editor__value">{text}</span> }.into_any()
                } else {
                    match field.kind {
                        FieldKind::ItemPicker => {
                            view! {
                                <ItemCombo
                                    input_id=input_id.clone()
                                    selected_code=Signal::derive(move || {
                                        state
                                            .with(|s| {
                                                s.book
                                                    .get(key)
                                                    .map(|r| r.draft.item_code().to_string())
                                                    .unwrap_or_default()
                                            })
                                    })
                                    items=items
                                    on_pick=Callback::new(move |item: Item| {
                                        state
                                            .update(|s| {
                                                s.update_draft(key, |d| d.apply_item(Some(&item)));
                                            });
                                    })
                                    on_enter=Callback::new(move |query: String| {
                                        on_enter(key, idx, query)
                                    })
                                />
                            }
                                .into_any()
                        }
                        FieldKind::UomPicker => {
                            view! {
                                <select
                                    id=input_id.clone()
                                    prop:value=move || {
                                        state
                                            .with(|s| {
                                                s.book
                                                    .get(key)
                                                    .and_then(|r| match (field.get)(&r.draft) {
                                                        FieldValue::Uom(id) => id,
                                                        _ => None,
                                                    })
                                                    .map(|id| id.to_string())
                                                    .unwrap_or_default()
                                            })
                                    }
                                    on:change=move |ev| {
                                        let raw = event_target_value(&ev);
                                        let picked = raw
                                            .parse::<i64>()
                                            .ok()
                                            .and_then(|id| {
                                                uoms.get_untracked().into_iter().find(|u| u.id == id)
                                            });
                                        state
                                            .update(|s| {
                                                s.update_draft(key, |d| d.apply_uom(picked.as_ref()));
                                            });
                                    }
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            on_enter(key, idx, String::new());
                                        }
                                    }
                                >
                                    <option value="">"—"</option>
                                    {move || {
                                        uoms.get()
                                            .into_iter()
                                            .map(|uom| {
                                                let value = uom.id.to_string();
                                                view! { <option value=value>{uom.name}</option> }
                                            })
                                            .collect_view()
                                    }}
                                </select>
                            }
                                .into_any()
                        }
                        _ => {
                            let input_type = if field.kind == FieldKind::Number {
                                "number"
                            } else {
                                "text"
                            };
                            view! {
                                <input
                                    id=input_id.clone()
                                    type=input_type
                                    step="any"
                                    autocomplete="off"
                                    prop:value=move || {
                                        state
                                            .with(|s| {
                                                s.book
                                                    .get(key)
                                                    .map(|r| (field.get)(&r.draft).input_text())
                                                    .unwrap_or_default()
                                            })
                                    }
                                    on:input=move |ev| {
                                        if let Some(value) = parse_input(
                                            field.kind,
                                            &event_target_value(&ev),
                                        ) {
                                            state
                                                .update(|s| {
                                                    s.update_draft(key, |d| (field.set)(d, value));
                                                });
                                        }
                                    }
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            on_enter(key, idx, String::new());
                                        }
                                    }
                                />
                            }
                                .into_any()
                        }
                    }
                }
            }}
        </td>
    }
}

fn edit_actions<D: LineDraft>(
    key: RowKey,
    row_id: Signal<Option<i64>>,
    row_busy: Signal<bool>,
    state: RwSignal<EditorState<D>>,
    row_errors: RwSignal<HashMap<RowKey, String>>,
    save_row: impl Fn(RowKey) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=row_busy
                on_click=move |_| save_row(key)
            >
                {move || if row_busy.get() { "Saving..." } else { "Save" }}
            </Button>
            {move || {
                row_id
                    .get()
                    .map(|_| {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Subtle
                                disabled=row_busy
                                on_click=move |_| {
                                    row_errors.update(|m| {
                                        m.remove(&key);
                                    });
                                    state.update(|s| s.cancel_edit(key));
                                }
                            >
                                "Cancel"
                            </Button>
                        }
                    })
            }}
            {move || {
                row_errors
                    .with(|m| m.get(&key).cloned())
                    .map(|message| {
                        view! {
                            <div
                                class="field-error"
                                style="color:var(--color-danger);font-size:var(--font-size-sm);"
                            >
                                {message}
                            </div>
                        }
                    })
            }}
        </>
    }
}

fn display_actions<D: LineDraft>(
    key: RowKey,
    row_id: Signal<Option<i64>>,
    row_busy: Signal<bool>,
    print_states: RwSignal<HashMap<i64, PrintSlot>>,
    delete_one: impl Fn(RowKey) + Copy + Send + Sync + 'static,
    print_row: impl Fn(i64) + Copy + Send + Sync + 'static,
    state: RwSignal<EditorState<D>>,
) -> impl IntoView {
    view! {
        <>
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=row_busy
                on_click=move |_| state.update(|s| s.begin_edit(key))
            >
                {icon("edit")}
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=row_busy
                on_click=move |_| delete_one(key)
            >
                {icon("trash")}
            </Button>
            {move || {
                let Some(id) = row_id.get() else {
                    return view! { <span></span> }.into_any();
                };
                let print_state = print_states
                    .with(|m| m.get(&id).map(|slot| slot.state))
                    .unwrap_or(RowPrintState::Idle);
                match print_state {
                    RowPrintState::Idle => {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| print_row(id)
                            >
                                {icon("printer")}
                            </Button>
                        }
                            .into_any()
                    }
                    RowPrintState::Printing => {
                        view! {
                            <span class="badge badge--secondary">
                                <Spinner/>
                                " Printing"
                            </span>
                        }
                            .into_any()
                    }
                    RowPrintState::Done => {
                        view! {
                            <span class="badge badge--success">
                                {icon("check-circle")}
                                " Printed"
                            </span>
                        }
                            .into_any()
                    }
                    RowPrintState::Failed => {
                        view! {
                            <span class="badge badge--danger">
                                {icon("x-circle")}
                                " Print failed"
                            </span>
                        }
                            .into_any()
                    }
                }
            }}
        </>
    }
}
