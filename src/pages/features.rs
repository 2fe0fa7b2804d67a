//! Public features overview page.

use leptos::prelude::*;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <section class="features-page">
            <h1>"Можливості"</h1>
            <ul class="features-page__list">
                <li>"Каталог об'єктів з актуальними статусами"</li>
                <li>"Онлайн-бронювання на обраний період"</li>
                <li>"Історія оренд і скасування в один клік"</li>
                <li>"Щомісячні фінансові підсумки"</li>
            </ul>
        </section>
    }
}
