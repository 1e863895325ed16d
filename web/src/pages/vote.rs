//! Award Voting Page
//!
//! Reachable only while the operator has voting switched on; the landing
//! page gates navigation here.

use leptos::prelude::*;

#[component]
pub fn VotePage() -> impl IntoView {
    view! {
        <div class="page-container">
            <div class="card page-card">
                <h1 class="page-title">"Award Voting"</h1>
                <p class="page-text">
                    "Vote for your colleagues across the award categories. Each
                    student votes once per category; results are announced on
                    awards night."
                </p>
                <ul class="page-list">
                    <li>"Most Influential"</li>
                    <li>"Best Dressed"</li>
                    <li>"Most Likely to Succeed"</li>
                    <li>"Best Programmer"</li>
                </ul>
            </div>
        </div>
    }
}
