//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::state::applications::ApplicationsState;
use crate::state::jobs::JobsState;
use crate::state::ui::UiState;
use crate::state::view::DashboardView;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides all shared state contexts and sets up client-side routing.
/// The dashboard is the only route; its listing/detail split is modeled
/// as in-page view state, not as URLs.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let jobs = RwSignal::new(JobsState::default());
    let applications = RwSignal::new(ApplicationsState::default());
    let view_state = RwSignal::new(DashboardView::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(jobs);
    provide_context(applications);
    provide_context(view_state);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/talentboard.css"/>
        <Title text="TalentBoard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
