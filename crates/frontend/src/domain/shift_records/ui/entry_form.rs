use contracts::records::{FieldError, ShiftRecordDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::shift_records::api::{self, SaveError};
use crate::shared::date_utils::today;
use crate::shared::format::format_thousands;

/// Parse one numeric form field. Empty counts as zero for the optional tips
/// field; everything else must be an integer.
fn parse_amount(field: &str, raw: &str, allow_empty: bool) -> Result<i64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        if allow_empty {
            return Ok(0);
        }
        return Err(FieldError::new(field, "Required"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| FieldError::new(field, "Enter a whole number"))
}

/// The daily entry form with inline validation and a live earnings preview.
///
/// Nothing is sent to the backend until every field rule passes; the same
/// rules run again server-side before the insert.
#[component]
pub fn EntryForm(on_saved: Callback<()>) -> impl IntoView {
    let (date, set_date) = signal(today().to_string());
    let (morning_cash, set_morning_cash) = signal(String::new());
    let (evening_cash, set_evening_cash) = signal(String::new());
    let (total_orders, set_total_orders) = signal(String::new());
    let (cash_orders, set_cash_orders) = signal(String::new());
    let (online_tips, set_online_tips) = signal(String::new());

    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());
    let (banner_error, set_banner_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let build_draft = move || -> Result<ShiftRecordDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let parsed_date = date.get().parse::<chrono::NaiveDate>().map_err(|_| ());
        if parsed_date.is_err() {
            errors.push(FieldError::new("date", "Pick a date"));
        }

        let mut amount = |field: &str, value: String, allow_empty: bool| -> i64 {
            match parse_amount(field, &value, allow_empty) {
                Ok(v) => v,
                Err(e) => {
                    errors.push(e);
                    0
                }
            }
        };

        let draft = ShiftRecordDraft {
            date: parsed_date.unwrap_or_default(),
            morning_cash: amount("morning_cash", morning_cash.get(), false),
            evening_cash: amount("evening_cash", evening_cash.get(), false),
            total_orders: amount("total_orders", total_orders.get(), false),
            cash_orders: amount("cash_orders", cash_orders.get(), false),
            online_tips: amount("online_tips", online_tips.get(), true),
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        draft.validate().map(|_| draft)
    };

    // Live preview of the derived figures while the draft is valid
    let preview = move || build_draft().ok().map(|d| d.breakdown());

    let error_for = move |field: &'static str| {
        field_errors
            .get()
            .into_iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        set_banner_error.set(None);
        let draft = match build_draft() {
            Ok(d) => d,
            Err(errors) => {
                // Keep the form exactly as typed, just mark the fields
                set_field_errors.set(errors);
                return;
            }
        };
        set_field_errors.set(Vec::new());
        set_is_saving.set(true);

        spawn_local(async move {
            match api::create_record(&draft).await {
                Ok(_) => {
                    set_morning_cash.set(String::new());
                    set_evening_cash.set(String::new());
                    set_total_orders.set(String::new());
                    set_cash_orders.set(String::new());
                    set_online_tips.set(String::new());
                    on_saved.run(());
                }
                Err(SaveError::Fields(errors)) => set_field_errors.set(errors),
                Err(SaveError::Message(message)) => set_banner_error.set(Some(message)),
            }
            set_is_saving.set(false);
        });
    };

    let field = move |label: &'static str,
                      name: &'static str,
                      value: ReadSignal<String>,
                      setter: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label for=name>{label}</label>
                <input
                    type="number"
                    id=name
                    value=move || value.get()
                    on:input=move |ev| setter.set(event_target_value(&ev))
                    disabled=move || is_saving.get()
                />
                {move || error_for(name).map(|message| {
                    view! { <span class="form-group__error">{message}</span> }
                })}
            </div>
        }
    };

    view! {
        <section class="panel entry-form">
            <h2>"New shift"</h2>

            <Show when=move || banner_error.get().is_some()>
                <div class="error-message">
                    {move || banner_error.get().unwrap_or_default()}
                </div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="date">"Date"</label>
                    <input
                        type="date"
                        id="date"
                        value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                    {move || error_for("date").map(|message| {
                        view! { <span class="form-group__error">{message}</span> }
                    })}
                </div>

                {field("Cash at shift start", "morning_cash", morning_cash, set_morning_cash)}
                {field("Cash at shift end", "evening_cash", evening_cash, set_evening_cash)}
                {field("Total orders", "total_orders", total_orders, set_total_orders)}
                {field("Cash orders", "cash_orders", cash_orders, set_cash_orders)}
                {field("Online tips", "online_tips", online_tips, set_online_tips)}

                {move || preview().map(|b| view! {
                    <div class="entry-form__preview">
                        <span>{format!("Cash {}", format_thousands(b.cash_earnings))}</span>
                        <span>{format!("Online {}", format_thousands(b.online_earnings))}</span>
                        <span>{format!("Bonus {}", format_thousands(b.bonus_earnings))}</span>
                        <strong>{format!("Total {}", format_thousands(b.total_earnings))}</strong>
                    </div>
                })}

                <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Saving..." } else { "Save shift" }}
                </button>
            </form>
        </section>
    }
}
