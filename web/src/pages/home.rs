//! Landing Page - association branding and gated actions
//!
//! The two feature buttons (FYB Week, Award Voting) are operator gated: an
//! active feature navigates to its page, an inactive one opens an
//! informational notice instead. The "Meet the Cyber Clan" link is always
//! live.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::{
    AssociationLogoPlaceholder, NoticeDialog, SchoolLogoPlaceholder, ThemeToggle,
};
use crate::state::gate::{evaluate, FeatureGate};
use crate::state::settings::use_settings_context;
use crate::utils::constants::{FYB_STUDENTS_ROUTE, FYB_WEEK_ROUTE, VOTE_ROUTE};

#[component]
pub fn HomePage() -> impl IntoView {
    let settings = use_settings_context();

    // One controller per gated feature; the two never interact.
    let fyb_week_gate = RwSignal::new(FeatureGate::new(FYB_WEEK_ROUTE));
    let voting_gate = RwSignal::new(FeatureGate::new(VOTE_ROUTE));

    let navigate = use_navigate();

    let activate_fyb_week = {
        let navigate = navigate.clone();
        move |_: web_sys::MouseEvent| {
            let mut nav = |destination: &str| navigate(destination, Default::default());
            fyb_week_gate.update(|gate| gate.activate(settings.fyb_week_active(), &mut nav));
        }
    };
    let activate_voting = {
        let navigate = navigate.clone();
        move |_: web_sys::MouseEvent| {
            let mut nav = |destination: &str| navigate(destination, Default::default());
            voting_gate.update(|gate| gate.activate(settings.voting_active(), &mut nav));
        }
    };

    // Re-evaluated on every render so the styling always matches the flags.
    let fyb_week_enabled = move || evaluate(settings.fyb_week_active()).is_enabled();
    let voting_enabled = move || evaluate(settings.voting_active()).is_enabled();

    view! {
        <NoticeDialog
            visible=Signal::derive(move || voting_gate.with(|gate| gate.is_notice_visible()))
            title="Voting Not Yet Open"
            message="The voting session has not started yet. Please check back later for updates."
            on_close=Callback::new(move |_| voting_gate.update(|gate| gate.dismiss()))
        />
        <NoticeDialog
            visible=Signal::derive(move || fyb_week_gate.with(|gate| gate.is_notice_visible()))
            title="Coming Soon!"
            message="The FYB Week schedule is not yet available. Please check back later."
            on_close=Callback::new(move |_| fyb_week_gate.update(|gate| gate.dismiss()))
        />

        <div class="home-container">
            <div class="card home-card">
                <header class="home-header">
                    <div class="logo-row">
                        <div class="logo-slot">
                            {move || match settings.association_logo() {
                                Some(src) => view! {
                                    <img src=src alt="Association Logo" class="logo-image"/>
                                }.into_any(),
                                None => view! { <AssociationLogoPlaceholder/> }.into_any(),
                            }}
                        </div>
                        <div class="logo-slot">
                            {move || match settings.school_logo() {
                                Some(src) => view! {
                                    <img src=src alt="School Logo" class="logo-image"/>
                                }.into_any(),
                                None => view! { <SchoolLogoPlaceholder/> }.into_any(),
                            }}
                        </div>
                    </div>
                    <h1 class="home-title">"Cyber Clan"</h1>
                    <p class="home-subtitle">"Nigerian Association of Computing Students (NACOS)"</p>
                    <p class="home-chapter">"Federal University Lokoja Chapter"</p>
                </header>

                <div class="home-actions">
                    <A href=FYB_STUDENTS_ROUTE>
                        <span class="btn primary-action">"Meet the Cyber Clan"</span>
                    </A>
                    <div class="action-grid">
                        <button
                            class="action-btn"
                            class:live=fyb_week_enabled
                            class:muted=move || !fyb_week_enabled()
                            on:click=activate_fyb_week
                        >
                            "FYB Week"
                        </button>
                        <button
                            class="action-btn voting"
                            class:live=voting_enabled
                            class:muted=move || !voting_enabled()
                            on:click=activate_voting
                        >
                            "Award Voting"
                        </button>
                    </div>
                </div>
            </div>

            <footer class="home-footer">
                <ThemeToggle/>
                <p class="footer-copy">"© 2025 NACOS. All rights reserved."</p>
            </footer>
        </div>
    }
}
