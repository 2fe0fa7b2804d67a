//! Reusable card component for catalogue entries.

use leptos::prelude::*;

use crate::net::types::Asset;

/// A card showing one asset, with a rent action while it is available.
#[component]
pub fn AssetCard(asset: Asset) -> impl IntoView {
    let rent_href = format!("/rentals/create/{}", asset.id);
    let available = asset.is_available();

    view! {
        <div class="asset-card">
            <div class="asset-card__header">
                <span class="asset-card__name">{asset.name}</span>
                <span class="asset-card__kind">{asset.kind}</span>
            </div>
            <p class="asset-card__description">{asset.description.unwrap_or_default()}</p>
            <div class="asset-card__footer">
                <span class="asset-card__price">
                    {format!("{:.2} грн/день", asset.price_per_day)}
                </span>
                <span class="asset-card__status">{asset.status}</span>
                {available.then(|| view! {
                    <a class="btn btn--primary" href=rent_href>"Орендувати"</a>
                })}
            </div>
        </div>
    }
}
