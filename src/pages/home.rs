//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Оренда майна без зайвих дзвінків"</h1>
            <p class="home-page__lead">
                "Обирайте техніку й транспорт, бронюйте онлайн та слідкуйте за витратами в одному кабінеті."
            </p>
            <div class="home-page__actions">
                <a class="btn btn--primary" href="/registration">"Почати"</a>
                <a class="btn" href="/features">"Дізнатися більше"</a>
            </div>
        </section>
    }
}
