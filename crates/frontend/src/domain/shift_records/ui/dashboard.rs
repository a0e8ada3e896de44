use contracts::records::{ShiftRecord, Summary};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::shift_records::api;
use crate::domain::shift_records::ui::entry_form::EntryForm;
use crate::domain::shift_records::ui::history::HistoryTable;
use crate::domain::shift_records::ui::weekly_chart::WeeklyChart;
use crate::shared::format::format_thousands;
use crate::system::auth::context::{sign_out, use_session};

/// The signed-in landing page: entry form, summary cards, weekly chart and
/// the full history. List and summary are refetched together after every
/// confirmed insert or delete.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (session, set_session) = use_session();

    let (records, set_records) = signal(Vec::<ShiftRecord>::new());
    let (summary, set_summary) = signal(Option::<Summary>::None);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    let fetch_all = move || {
        spawn_local(async move {
            match api::fetch_records().await {
                Ok(items) => {
                    set_records.set(items);
                    set_load_error.set(None);
                }
                Err(e) => set_load_error.set(Some(e)),
            }
            match api::fetch_summary().await {
                Ok(totals) => set_summary.set(Some(totals)),
                Err(e) => set_load_error.set(Some(e)),
            }
        });
    };

    fetch_all();

    let username = move || {
        session
            .get()
            .account()
            .map(|a| a.username)
            .unwrap_or_default()
    };

    let card = move |label: &'static str, value: Option<i64>| {
        view! {
            <div class="stat-card">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value.map(format_thousands).unwrap_or_else(|| "—".to_string())}
                </div>
            </div>
        }
    };

    view! {
        <div class="page dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Shift Ledger"</h1>
                    <span class="header__subtitle">{username}</span>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch_all()>
                        "Refresh"
                    </button>
                    <button class="button button--secondary" on:click=move |_| sign_out(set_session)>
                        "Sign out"
                    </button>
                </div>
            </div>

            {move || load_error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="dashboard__cards">
                {move || {
                    let totals = summary.get();
                    view! {
                        {card("Cash earnings", totals.map(|t| t.total_cash_earnings))}
                        {card("Online earnings", totals.map(|t| t.total_online_earnings))}
                        {card("Bonus earnings", totals.map(|t| t.total_bonus_earnings))}
                        {card("Online tips", totals.map(|t| t.total_online_tips))}
                        {card("Grand total", totals.map(|t| t.grand_total_earnings))}
                    }
                }}
            </div>

            <div class="dashboard__main">
                <EntryForm on_saved=Callback::new(move |_| fetch_all()) />
                <WeeklyChart records=records />
            </div>

            <HistoryTable
                records=records
                on_changed=Callback::new(move |_| fetch_all())
            />
        </div>
    }
}
