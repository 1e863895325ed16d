//! Theme Toggle Component
//!
//! Light/dark toggle. The choice is applied as a class on the document root
//! and persisted to browser storage so it survives reloads.

use leptos::prelude::*;

use crate::utils::constants::THEME_STORAGE_KEY;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (dark, set_dark) = signal(stored_theme_is_dark());

    Effect::new(move || apply_theme(dark.get()));

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| set_dark.update(|d| *d = !*d)
        >
            {move || if dark.get() { "Switch to light mode" } else { "Switch to dark mode" }}
        </button>
    }
}

fn stored_theme_is_dark() -> bool {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return false,
    };
    match window.local_storage() {
        Ok(Some(storage)) => matches!(storage.get_item(THEME_STORAGE_KEY), Ok(Some(v)) if v == "dark"),
        _ => false,
    }
}

/// Toggle the `dark` class on the document root and persist the choice.
fn apply_theme(dark: bool) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let class_list = root.class_list();
        let result = if dark {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
        if result.is_err() {
            log::warn!("failed to update theme class on document root");
        }
    }

    if let Ok(Some(storage)) = window.local_storage() {
        storage
            .set_item(THEME_STORAGE_KEY, if dark { "dark" } else { "light" })
            .ok();
    }
}
