//! Top navigation bar with session-aware links.

use leptos::prelude::*;

use crate::state::session::SessionStore;

/// Application navigation. Link visibility follows the session snapshot;
/// logging out relies on the route guard to move the user off any page
/// that no longer admits them.
#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Orenda"</a>
            <div class="navbar__links">
                <a href="/features">"Можливості"</a>
                <a href="/how">"Як це працює"</a>
                <a href="/faq">"Питання"</a>
                <Show when=move || store.is_authenticated()>
                    <a href="/dashboard">"Панель"</a>
                    <a href="/assets">"Об'єкти"</a>
                    <a href="/rentals">"Оренди"</a>
                    <a href="/financial-summary">"Фінанси"</a>
                </Show>
                <Show when=move || store.snapshot().is_admin()>
                    <a href="/admin">"Адміністрування"</a>
                </Show>
            </div>
            <div class="navbar__session">
                <Show
                    when=move || store.is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="navbar__login" href="/login">"Увійти"</a>
                            <a class="navbar__register" href="/registration">"Реєстрація"</a>
                        }
                    }
                >
                    <span class="navbar__user">
                        {move || store.user().map(|u| u.username).unwrap_or_default()}
                    </span>
                    <button class="navbar__logout" on:click=move |_| store.logout()>
                        "Вийти"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
