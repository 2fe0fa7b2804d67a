//! Login page with a username/password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::Credentials;
use crate::state::session::SessionStore;

/// Validate the login form; returns the payload or a display message.
///
/// The username is trimmed; the password is passed through untouched.
fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Введіть ім'я користувача та пароль.");
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(payload) => payload,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = store.login(&credentials).await;
            info.set(outcome.message);
            busy.set(false);
            // On success the route guard moves us off this guest page.
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&credentials, &store);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Вхід"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Ім'я користувача"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Пароль"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Увійти"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__hint">
                    "Ще немає облікового запису? "
                    <a href="/registration">"Зареєструйтеся"</a>
                </p>
            </div>
        </div>
    }
}
