use contracts::records::ShiftRecord;
use leptos::prelude::*;

use crate::domain::shift_records::api;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_thousands;

/// Full history table, newest shift first, with per-row delete.
///
/// Deletes go through a browser confirm dialog; the list is refetched by the
/// parent only after the backend confirmed the delete. No optimistic updates.
#[component]
pub fn HistoryTable(
    #[prop(into)] records: Signal<Vec<ShiftRecord>>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let (error, set_error) = signal(Option::<String>::None);

    let delete_row = move |record: &ShiftRecord| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!(
                    "Delete the record for {}? This cannot be undone.",
                    format_date(record.date)
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let id = record.id;
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_record(id).await {
                Ok(()) => {
                    set_error.set(None);
                    on_changed.run(());
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <section class="panel history">
            <h2>"History"</h2>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <Show
                when=move || !records.get().is_empty()
                fallback=|| view! { <p class="history__empty">"No shifts recorded yet."</p> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Date"</th>
                                <th class="table__header-cell">"Orders"</th>
                                <th class="table__header-cell">"Cash orders"</th>
                                <th class="table__header-cell">"Morning cash"</th>
                                <th class="table__header-cell">"Evening cash"</th>
                                <th class="table__header-cell">"Cash"</th>
                                <th class="table__header-cell">"Online"</th>
                                <th class="table__header-cell">"Bonus"</th>
                                <th class="table__header-cell">"Tips"</th>
                                <th class="table__header-cell">"Total"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || records.get().into_iter().map(|record| {
                                let row = record.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{format_date(record.date)}</td>
                                        <td class="table__cell">{record.total_orders}</td>
                                        <td class="table__cell">{record.cash_orders}</td>
                                        <td class="table__cell">{format_thousands(record.morning_cash)}</td>
                                        <td class="table__cell">{format_thousands(record.evening_cash)}</td>
                                        <td class="table__cell">{format_thousands(record.cash_earnings)}</td>
                                        <td class="table__cell">{format_thousands(record.online_earnings)}</td>
                                        <td class="table__cell">{format_thousands(record.bonus_earnings)}</td>
                                        <td class="table__cell">{format_thousands(record.online_tips)}</td>
                                        <td class="table__cell table__cell--total">
                                            {format_thousands(record.total_earnings)}
                                        </td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--danger"
                                                on:click=move |_| delete_row(&row)
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </section>
    }
}
