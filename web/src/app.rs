//! Cyber Clan Web App - Leptos Frontend
//!
//! Router setup and the settings context shared by every page.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::pages::{FybStudentsPage, FybWeekPage, HomePage, VotePage};
use crate::state::settings::provide_settings_context;

#[component]
pub fn App() -> impl IntoView {
    provide_settings_context();

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/fyb-students") view=FybStudentsPage/>
                    <Route path=path!("/fyb-week") view=FybWeekPage/>
                    <Route path=path!("/vote") view=VotePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-container">
            <div class="card page-card" style="text-align: center;">
                <h1 class="page-title">"404 - Page Not Found"</h1>
                <p class="page-text">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
