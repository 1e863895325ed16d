//! Logo Placeholder Components
//!
//! Inline SVG placeholders shown until the admins upload real logos.

use leptos::prelude::*;

#[component]
pub fn AssociationLogoPlaceholder() -> impl IntoView {
    view! {
        <svg class="logo-placeholder" viewBox="0 0 64 64" fill="none" xmlns="http://www.w3.org/2000/svg">
            <circle cx="32" cy="32" r="30" stroke="currentColor" stroke-width="3"/>
            <path d="M20 40 L32 18 L44 40 Z" stroke="currentColor" stroke-width="3" fill="none"/>
            <circle cx="32" cy="34" r="4" fill="currentColor"/>
        </svg>
    }
}

#[component]
pub fn SchoolLogoPlaceholder() -> impl IntoView {
    view! {
        <svg class="logo-placeholder" viewBox="0 0 64 64" fill="none" xmlns="http://www.w3.org/2000/svg">
            <circle cx="32" cy="32" r="30" stroke="currentColor" stroke-width="3"/>
            <path d="M16 28 L32 20 L48 28 L32 36 Z" fill="currentColor"/>
            <path d="M24 33 V42 C24 42 28 46 32 46 C36 46 40 42 40 42 V33" stroke="currentColor" stroke-width="3" fill="none"/>
        </svg>
    }
}
