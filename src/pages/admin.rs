//! Admin page for catalogue management.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Asset, NewAsset};

fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

/// Validate the add-asset form; returns the payload or a display message.
fn validate_new_asset(
    name: &str,
    kind: &str,
    description: &str,
    price: &str,
) -> Result<NewAsset, &'static str> {
    let name = name.trim();
    let kind = kind.trim();
    if name.is_empty() || kind.is_empty() {
        return Err("Вкажіть назву та тип об'єкта.");
    }
    let Some(price_per_day) = parse_price(price) else {
        return Err("Вкажіть коректну ціну за день.");
    };
    Ok(NewAsset {
        name: name.to_owned(),
        kind: kind.to_owned(),
        description: description.trim().to_owned(),
        price_per_day,
    })
}

/// Admin dashboard: full catalogue with lifecycle actions and an
/// add-asset form. Reachable only through the admin-gated route.
#[component]
pub fn AdminPage() -> impl IntoView {
    let assets = LocalResource::new(|| api::fetch_assets());
    let info = RwSignal::new(String::new());

    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match validate_new_asset(
            &name.get(),
            &kind.get(),
            &description.get(),
            &price.get(),
        ) {
            Ok(payload) => payload,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::add_asset(&payload).await {
                Ok(()) => {
                    info.set(String::new());
                    name.set(String::new());
                    kind.set(String::new());
                    description.set(String::new());
                    price.set(String::new());
                    assets.refetch();
                }
                Err(msg) => info.set(msg),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &payload;
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Адміністрування об'єктів"</h1>
            <Show when=move || !info.get().is_empty()>
                <p class="admin-page__message">{move || info.get()}</p>
            </Show>

            <form class="admin-page__form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Назва"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Тип"
                    prop:value=move || kind.get()
                    on:input=move |ev| kind.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Опис"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Ціна за день"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Додати об'єкт"</button>
            </form>

            <Suspense fallback=move || view! { <p>"Завантаження об'єктів..."</p> }>
                {move || {
                    assets
                        .get()
                        .map(|list| {
                            view! {
                                <table class="admin-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Назва"</th>
                                            <th>"Тип"</th>
                                            <th>"Статус"</th>
                                            <th>"Ціна/день"</th>
                                            <th>"Дії"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|asset| asset_row(&asset, assets, info))
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn asset_row(
    asset: &Asset,
    assets: LocalResource<Vec<Asset>>,
    info: RwSignal<String>,
) -> impl IntoView + use<> {
    let id = asset.id;
    let available = asset.is_available();
    let in_maintenance = asset.in_maintenance();

    let run = move |action: AdminAction| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match action {
                AdminAction::Maintenance => api::set_asset_maintenance(id).await,
                AdminAction::Available => api::set_asset_available(id).await,
                AdminAction::Delete => api::delete_asset(id).await,
            };
            match result {
                Ok(()) => {
                    info.set(String::new());
                    assets.refetch();
                }
                Err(msg) => info.set(msg),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = action;
        }
    };

    view! {
        <tr>
            <td>{asset.name.clone()}</td>
            <td>{asset.kind.clone()}</td>
            <td>{asset.status.clone()}</td>
            <td>{format!("{:.2}", asset.price_per_day)}</td>
            <td class="admin-page__actions">
                {available.then(|| view! {
                    <button class="btn" on:click=move |_| run(AdminAction::Maintenance)>
                        "На обслуговування"
                    </button>
                })}
                {in_maintenance.then(|| view! {
                    <button class="btn" on:click=move |_| run(AdminAction::Available)>
                        "Зробити доступним"
                    </button>
                })}
                <button class="btn btn--danger" on:click=move |_| run(AdminAction::Delete)>
                    "Видалити"
                </button>
            </td>
        </tr>
    }
}

#[derive(Clone, Copy)]
enum AdminAction {
    Maintenance,
    Available,
    Delete,
}
