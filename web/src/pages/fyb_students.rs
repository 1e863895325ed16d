//! FYB Students Page - Meet the Cyber Clan

use leptos::prelude::*;

#[component]
pub fn FybStudentsPage() -> impl IntoView {
    view! {
        <div class="page-container">
            <div class="card page-card">
                <h1 class="page-title">"Meet the Cyber Clan"</h1>
                <p class="page-text">
                    "The final year brethren of the Nigerian Association of Computing
                    Students, Federal University Lokoja chapter. Profiles of the
                    graduating set are published here by the association admins."
                </p>
                <p class="page-text">
                    "Check back during FYB Week for the full roster, nicknames and
                    parting words from every member of the clan."
                </p>
            </div>
        </div>
    }
}
