//! Notice Dialog Component
//!
//! Modal notice shown when an inactive feature is clicked. Visibility is
//! owned by that feature's controller; this component only renders it and
//! reports the close click.

use leptos::prelude::*;

#[component]
pub fn NoticeDialog(
    visible: Signal<bool>,
    title: &'static str,
    message: &'static str,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="dialog-overlay">
                <div class="card dialog">
                    <h2 class="dialog-title">{title}</h2>
                    <p class="dialog-message">{message}</p>
                    <div class="dialog-footer">
                        <button class="btn" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
