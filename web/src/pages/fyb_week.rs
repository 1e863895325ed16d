//! FYB Week Page - events schedule
//!
//! Reachable only while the operator has FYB Week switched on; the landing
//! page gates navigation here.

use leptos::prelude::*;

#[component]
pub fn FybWeekPage() -> impl IntoView {
    view! {
        <div class="page-container">
            <div class="card page-card">
                <h1 class="page-title">"FYB Week"</h1>
                <p class="page-text">
                    "A week of send-off activities for the final year brethren:
                    jersey day, cultural day, dinner night and the award ceremony."
                </p>
                <ul class="page-list">
                    <li>"Monday - Jersey Day"</li>
                    <li>"Tuesday - Cultural Day"</li>
                    <li>"Wednesday - Old School Day"</li>
                    <li>"Thursday - Dinner Night"</li>
                    <li>"Friday - Awards and Send-off"</li>
                </ul>
            </div>
        </div>
    }
}
