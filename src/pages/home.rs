//! Home Page
//!
//! Drives the session bootstrap: reads the OAuth callback parameters and the
//! persisted session, runs the profile fetch the controller asks for, and
//! renders whichever screen the resulting auth state calls for.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use leptos_router::{use_navigate, use_query_map, NavigateOptions};

use crate::api;
use crate::components::{ErrorView, LoadingScreen, LoginScreen};
use crate::pages::Dashboard;
use crate::session::bootstrap::{AuthState, BootstrapController, BootstrapStep, NavContext};
use crate::session::store::{LocalStorageStore, SessionToken};
use crate::state::global::GlobalState;

type Controller = Rc<RefCell<BootstrapController<LocalStorageStore>>>;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let controller: Controller =
        Rc::new(RefCell::new(BootstrapController::new(LocalStorageStore)));

    let query = use_query_map();
    let navigate = use_navigate();

    // Single bootstrap pass on activation. The effect re-fires when the
    // query map changes (it does, right after the callback parameters are
    // cleared below); the controller's re-entrancy guard keeps that second
    // observation from starting another fetch.
    {
        let state = state.clone();
        let controller = Rc::clone(&controller);
        create_effect(move |_| {
            let nav = NavContext {
                session: query.with(|q| q.get("session").cloned()),
                error: query.with(|q| q.get("error").cloned()),
            };

            let step = controller.borrow_mut().begin(&nav);
            match step {
                Some(BootstrapStep::Settled(next)) => state.auth.set(next),
                Some(BootstrapStep::Fetch {
                    token,
                    consume_callback,
                }) => {
                    if consume_callback {
                        // One-shot consumption: strip `?session=` from the
                        // visible URL so a reload cannot replay the callback
                        navigate(
                            "/",
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    run_fetch(state.clone(), Rc::clone(&controller), token);
                }
                None => {}
            }
        });
    }

    let on_logout = {
        let state = state.clone();
        let controller = Rc::clone(&controller);
        Callback::new(move |_: ()| {
            // Best-effort backend invalidation with the token being dropped;
            // the local session is cleared no matter what the call returns
            if let AuthState::Authenticated { session, .. } = state.auth.get_untracked() {
                spawn_local(async move {
                    api::client::logout(&session).await;
                });
            }
            state.auth.set(controller.borrow_mut().logout());
            state.show_success("Logged out");
        })
    };

    let on_retry = {
        let state = state.clone();
        let controller = Rc::clone(&controller);
        Callback::new(move |_: ()| {
            let step = controller.borrow_mut().retry();
            match step {
                Some(BootstrapStep::Settled(next)) => state.auth.set(next),
                Some(BootstrapStep::Fetch { token, .. }) => {
                    run_fetch(state.clone(), Rc::clone(&controller), token);
                }
                None => {}
            }
        })
    };

    let on_back = {
        let state = state.clone();
        let controller = Rc::clone(&controller);
        Callback::new(move |_: ()| {
            state.auth.set(controller.borrow_mut().back_to_login());
        })
    };

    let auth = state.auth;
    view! {
        {move || match auth.get() {
            AuthState::Loading => view! { <LoadingScreen /> }.into_view(),
            AuthState::LoginRequired => view! { <LoginScreen /> }.into_view(),
            AuthState::Error(message) => view! {
                <ErrorView message on_retry on_back />
            }.into_view(),
            AuthState::Authenticated { profile, session } => view! {
                <Dashboard profile session on_logout />
            }.into_view(),
        }}
    }
}

/// Run the profile fetch the controller asked for and apply the outcome.
/// A stale completion (the controller returns `None`) is dropped.
fn run_fetch(state: GlobalState, controller: Controller, token: SessionToken) {
    state.auth.set(AuthState::Loading);

    spawn_local(async move {
        let result = api::client::fetch_profile(&token).await;
        let next = controller.borrow_mut().on_profile(&token, result);
        if let Some(next) = next {
            if matches!(next, AuthState::Authenticated { .. }) {
                state.mark_refreshed();
            }
            state.auth.set(next);
        }
    });
}
