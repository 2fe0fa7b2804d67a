//! Asset catalogue page.

use leptos::prelude::*;

use crate::components::asset_card::AssetCard;
use crate::net::api;

/// Catalogue of rentable assets. Admins receive every asset, other users
/// only the available ones; the backend applies that filter.
#[component]
pub fn AssetsPage() -> impl IntoView {
    let assets = LocalResource::new(|| api::fetch_assets());

    view! {
        <div class="assets-page">
            <h1>"Об'єкти оренди"</h1>
            <Suspense fallback=move || view! { <p>"Завантаження об'єктів..."</p> }>
                {move || {
                    assets
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="assets-page__empty">
                                        "Наразі немає доступних об'єктів."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="assets-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|asset| view! { <AssetCard asset=asset/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
