//! Registration page with an account-creation form.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use leptos::prelude::*;

use crate::net::types::Registration;
use crate::state::session::SessionStore;

/// Validate the registration form; returns the payload or a display
/// message. Mirrors the backend's required-field checks so obvious
/// mistakes never leave the browser.
fn validate_registration_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Заповніть усі поля форми.");
    }
    if !email.contains('@') {
        return Err("Вкажіть коректну електронну адресу.");
    }
    Ok(Registration {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload =
            match validate_registration_input(&username.get(), &email.get(), &password.get()) {
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
            let outcome = store.register(&payload).await;
            info.set(outcome.message);
            busy.set(false);
            // On success the route guard moves us off this guest page.
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&payload, &store);
        }
    };

    view! {
        <div class="registration-page">
            <div class="login-card">
                <h1>"Реєстрація"</h1>
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
                        type="email"
                        placeholder="Електронна адреса"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Пароль"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Створити обліковий запис"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__hint">
                    "Вже зареєстровані? "
                    <a href="/login">"Увійдіть"</a>
                </p>
            </div>
        </div>
    }
}
