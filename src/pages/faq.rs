//! Public FAQ page.

use leptos::prelude::*;

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <section class="faq-page">
            <h1>"Часті питання"</h1>
            <dl class="faq-page__list">
                <dt>"Як орендувати об'єкт?"</dt>
                <dd>
                    "Зареєструйтеся, оберіть доступний об'єкт у каталозі та вкажіть період оренди."
                </dd>
                <dt>"Чи можна скасувати оренду?"</dt>
                <dd>"Так, активну оренду можна скасувати на сторінці «Оренди»."</dd>
                <dt>"Як формується вартість?"</dt>
                <dd>"Вартість — це ціна за день, помножена на кількість днів оренди."</dd>
            </dl>
        </section>
    }
}
