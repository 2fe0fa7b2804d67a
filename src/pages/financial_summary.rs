//! Financial summary page with monthly totals.

use leptos::prelude::*;

use crate::net::api;

/// Monthly rental totals for the current user.
#[component]
pub fn FinancialSummaryPage() -> impl IntoView {
    let summaries = LocalResource::new(|| api::fetch_summaries());

    view! {
        <div class="summary-page">
            <h1>"Фінансові підсумки"</h1>
            <Suspense fallback=move || view! { <p>"Завантаження підсумків..."</p> }>
                {move || {
                    summaries
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="summary-page__empty">"Підсумків поки немає."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="summary-page__table">
                                        <thead>
                                            <tr>
                                                <th>"Період"</th>
                                                <th>"Кількість оренд"</th>
                                                <th>"Витрати"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|summary| {
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                {format!(
                                                                    "{} — {}",
                                                                    summary.period_start,
                                                                    summary.period_end,
                                                                )}
                                                            </td>
                                                            <td>{summary.total_rentals}</td>
                                                            <td>{format!("{:.2} грн", summary.total_cost)}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
