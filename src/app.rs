//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::navbar::Navbar;
use crate::pages::{
    admin::AdminPage, assets::AssetsPage, create_rental::CreateRentalPage,
    dashboard::DashboardPage, faq::FaqPage, features::FeaturesPage,
    financial_summary::FinancialSummaryPage, home::HomePage, how::HowPage, login::LoginPage,
    registration::RegistrationPage, rentals::RentalsPage,
};
use crate::router::Guarded;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="uk">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store as context and keeps the router hidden until
/// the persisted session has been restored, so the first guard evaluation
/// always sees a settled session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    provide_context(session);

    let ready = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.initialize().await;
        ready.set(true);
    });
    #[cfg(not(feature = "hydrate"))]
    ready.set(true);

    view! {
        <Stylesheet id="leptos" href="/pkg/orenda.css"/>
        <Title text="Orenda"/>

        <Show
            when=move || ready.get()
            fallback=|| view! { <p class="app-loading">"Завантаження..."</p> }
        >
            <Router>
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <Redirect path="/"/> }>
                        <Route path=path!("/") view=|| view! { <Guarded><HomePage/></Guarded> }/>
                        <Route
                            path=path!("/dashboard")
                            view=|| view! { <Guarded><DashboardPage/></Guarded> }
                        />
                        <Route
                            path=path!("/login")
                            view=|| view! { <Guarded><LoginPage/></Guarded> }
                        />
                        <Route
                            path=path!("/registration")
                            view=|| view! { <Guarded><RegistrationPage/></Guarded> }
                        />
                        <Route path=path!("/faq") view=|| view! { <Guarded><FaqPage/></Guarded> }/>
                        <Route
                            path=path!("/features")
                            view=|| view! { <Guarded><FeaturesPage/></Guarded> }
                        />
                        <Route path=path!("/how") view=|| view! { <Guarded><HowPage/></Guarded> }/>
                        <Route
                            path=path!("/assets")
                            view=|| view! { <Guarded><AssetsPage/></Guarded> }
                        />
                        <Route
                            path=path!("/rentals")
                            view=|| view! { <Guarded><RentalsPage/></Guarded> }
                        />
                        <Route
                            path=path!("/rentals/create/:asset_id")
                            view=|| view! { <Guarded><CreateRentalPage/></Guarded> }
                        />
                        <Route
                            path=path!("/financial-summary")
                            view=|| view! { <Guarded><FinancialSummaryPage/></Guarded> }
                        />
                        <Route
                            path=path!("/admin")
                            view=|| view! { <Guarded><AdminPage/></Guarded> }
                        />
                    </Routes>
                </main>
            </Router>
        </Show>
    }
}
