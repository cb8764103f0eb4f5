//! Reddit Stats Dashboard
//!
//! Client-side dashboard for Reddit account statistics, built with Leptos (WASM).
//!
//! # Features
//!
//! - OAuth2 login against a remote backend (the backend owns the Reddit API)
//! - Karma totals and account statistics
//! - Submitted posts and comments with sort and page-size controls
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All authentication and Reddit API access happens in a remote
//! backend service; this app holds only an opaque session token (persisted in
//! localStorage) and renders what the backend returns.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod session;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
