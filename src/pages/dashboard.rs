//! Dashboard page with rental statistics and quick catalogue access.

use leptos::prelude::*;

use crate::components::asset_card::AssetCard;
use crate::net::api;
use crate::net::types::DashboardData;

/// Dashboard — aggregate stats, active rentals, and available assets.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let data = LocalResource::new(|| api::fetch_dashboard());

    view! {
        <div class="dashboard-page">
            <h1>"Панель керування"</h1>
            <Suspense fallback=move || view! { <p>"Завантаження даних..."</p> }>
                {move || {
                    data.get()
                        .map(|payload| match payload {
                            Some(data) => view! { <DashboardBody data=data/> }.into_any(),
                            None => {
                                view! {
                                    <p class="dashboard-page__error">
                                        "Не вдалося завантажити дані панелі."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn DashboardBody(data: DashboardData) -> impl IntoView {
    let DashboardData {
        user,
        active_rentals_count,
        monthly_expenses,
        completed_rentals_count,
        active_rentals,
        available_assets,
    } = data;
    let no_rentals = active_rentals.is_empty();
    let no_assets = available_assets.is_empty();

    view! {
        <p class="dashboard-page__greeting">{format!("Вітаємо, {}!", user.username)}</p>
        <div class="dashboard-page__stats">
            <StatCard label="Активні оренди" value=active_rentals_count.to_string()/>
            <StatCard label="Завершені оренди" value=completed_rentals_count.to_string()/>
            <StatCard label="Витрати за місяць" value=format!("{monthly_expenses:.2} грн")/>
        </div>

        <h2>"Активні оренди"</h2>
        <Show
            when=move || !no_rentals
            fallback=|| view! { <p class="dashboard-page__empty">"Немає активних оренд."</p> }
        >
            <ul class="dashboard-page__rentals">
                {active_rentals
                    .clone()
                    .into_iter()
                    .map(|rental| {
                        let period = match rental.end_date {
                            Some(end) => format!("з {} до {}", rental.start_date, end),
                            None => format!("з {}", rental.start_date),
                        };
                        view! {
                            <li>
                                <span class="dashboard-page__rental-name">{rental.asset_name}</span>
                                <span class="dashboard-page__rental-period">{period}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </Show>

        <h2>"Доступні об'єкти"</h2>
        <Show
            when=move || !no_assets
            fallback=|| {
                view! { <p class="dashboard-page__empty">"Наразі немає доступних об'єктів."</p> }
            }
        >
            <div class="dashboard-page__cards">
                {available_assets
                    .clone()
                    .into_iter()
                    .map(|asset| view! { <AssetCard asset=asset/> })
                    .collect::<Vec<_>>()}
            </div>
        </Show>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
