//! Create-rental form for a single asset.

#[cfg(test)]
#[path = "create_rental_test.rs"]
mod create_rental_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api;
use crate::net::types::CreateRental;

/// Validate the rental period. Both dates are `YYYY-MM-DD`; once the shape
/// is checked, ISO dates order correctly as plain strings.
fn validate_rental_dates(start: &str, end: &str) -> Result<(), &'static str> {
    if !is_iso_date(start) || !is_iso_date(end) {
        return Err("Вкажіть дати у форматі РРРР-ММ-ДД.");
    }
    if end <= start {
        return Err("Дата завершення має бути пізнішою за дату початку.");
    }
    Ok(())
}

fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let all_digits = |range: std::ops::Range<usize>| {
        value[range].chars().all(|c| c.is_ascii_digit())
    };
    if !all_digits(0..4) || !all_digits(5..7) || !all_digits(8..10) {
        return false;
    }
    let month: u32 = value[5..7].parse().unwrap_or(0);
    let day: u32 = value[8..10].parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Booking form for the asset named by the `:asset_id` route parameter.
#[component]
pub fn CreateRentalPage() -> impl IntoView {
    let params = use_params_map();
    let asset_id = Memo::new(move |_| {
        params
            .get()
            .get("asset_id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let asset = LocalResource::new(move || {
        let id = asset_id.get();
        async move {
            match id {
                Some(id) => api::fetch_asset(id).await,
                None => None,
            }
        }
    });

    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = asset_id.get() else {
            info.set("Об'єкт не знайдено.".to_owned());
            return;
        };
        let start = start_date.get();
        let end = end_date.get();
        if let Err(msg) = validate_rental_dates(&start, &end) {
            info.set(msg.to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let payload = CreateRental {
                    asset_id: id,
                    start_date: start,
                    end_date: end,
                };
                match api::create_rental(&payload).await {
                    Ok(()) => navigate("/rentals", NavigateOptions::default()),
                    Err(msg) => {
                        info.set(msg);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, start, end, &navigate);
        }
    };

    view! {
        <div class="create-rental-page">
            <h1>"Нова оренда"</h1>
            <Suspense fallback=move || view! { <p>"Завантаження об'єкта..."</p> }>
                {move || {
                    asset
                        .get()
                        .map(|found| match found {
                            Some(asset) => {
                                view! {
                                    <div class="create-rental-page__asset">
                                        <h2>{asset.name}</h2>
                                        <p class="create-rental-page__kind">{asset.kind}</p>
                                        <p class="create-rental-page__price">
                                            {format!("{:.2} грн/день", asset.price_per_day)}
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="create-rental-page__error">"Об'єкт не знайдено."</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <form class="create-rental-page__form" on:submit=on_submit>
                <label>
                    "Дата початку"
                    <input
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Дата завершення"
                    <input
                        type="date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Орендувати"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="create-rental-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
