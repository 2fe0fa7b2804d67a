//! Rentals page listing the user's rentals with cancellation.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Rental;

/// Rental history. Admins see every rental, other users their own; the
/// backend applies that filter. Active rentals can be cancelled here.
#[component]
pub fn RentalsPage() -> impl IntoView {
    let rentals = LocalResource::new(|| api::fetch_rentals());
    let error = RwSignal::new(String::new());

    let on_cancel = move |rental_id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::cancel_rental(rental_id).await {
                Ok(()) => {
                    error.set(String::new());
                    rentals.refetch();
                }
                Err(msg) => error.set(msg),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = rental_id;
        }
    };

    view! {
        <div class="rentals-page">
            <h1>"Оренди"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="rentals-page__error">{move || error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Завантаження оренд..."</p> }>
                {move || {
                    rentals
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="rentals-page__empty">"Оренд поки немає."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="rentals-page__table">
                                        <thead>
                                            <tr>
                                                <th>"Об'єкт"</th>
                                                <th>"Користувач"</th>
                                                <th>"Період"</th>
                                                <th>"Вартість"</th>
                                                <th>"Статус"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|rental| rental_row(&rental, on_cancel))
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

fn rental_row<T: Fn(i64) + Copy + 'static>(rental: &Rental, on_cancel: T) -> impl IntoView + use<T> {
    let id = rental.id;
    let can_cancel = rental.is_active();
    let period = match &rental.end_date {
        Some(end) => format!("{} — {}", rental.start_date, end),
        None => format!("{} — ...", rental.start_date),
    };
    let cost = rental
        .total_cost
        .map_or_else(|| "—".to_owned(), |cost| format!("{cost:.2} грн"));

    view! {
        <tr>
            <td>{rental.asset_name.clone()}</td>
            <td>{rental.username.clone()}</td>
            <td>{period}</td>
            <td>{cost}</td>
            <td>{rental.status.clone()}</td>
            <td>
                {can_cancel.then(|| view! {
                    <button class="btn btn--danger" on:click=move |_| on_cancel(id)>
                        "Скасувати"
                    </button>
                })}
            </td>
        </tr>
    }
}
