//! Public how-it-works page.

use leptos::prelude::*;

#[component]
pub fn HowPage() -> impl IntoView {
    view! {
        <section class="how-page">
            <h1>"Як це працює"</h1>
            <ol class="how-page__steps">
                <li>"Створіть обліковий запис."</li>
                <li>"Оберіть доступний об'єкт у каталозі."</li>
                <li>"Вкажіть дати початку та завершення оренди."</li>
                <li>"Слідкуйте за орендами та витратами в кабінеті."</li>
            </ol>
        </section>
    }
}
