use contracts::records::ShiftRecord;
use leptos::prelude::*;

use crate::domain::shift_records::chart::{bar_height_percent, max_bar_value, weekly_bars};
use crate::shared::date_utils::today;
use crate::shared::format::format_thousands;

/// Last-7-days bar chart, built client-side from the already fetched list.
#[component]
pub fn WeeklyChart(#[prop(into)] records: Signal<Vec<ShiftRecord>>) -> impl IntoView {
    view! {
        <section class="panel weekly-chart">
            <h2>"Last 7 days"</h2>
            <div class="weekly-chart__bars">
                {move || {
                    let bars = weekly_bars(&records.get(), today());
                    let max = max_bar_value(&bars);
                    bars.into_iter()
                        .map(|bar| {
                            let height = bar_height_percent(&bar, max);
                            view! {
                                <div class="weekly-chart__col">
                                    <span class="weekly-chart__value">
                                        {format_thousands(bar.total_earnings)}
                                    </span>
                                    <div
                                        class="weekly-chart__bar"
                                        style=format!("height: {}%", height)
                                    ></div>
                                    <span class="weekly-chart__label">{bar.label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
