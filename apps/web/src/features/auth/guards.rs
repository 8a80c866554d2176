use crate::components::Spinner;
use crate::features::auth::state::use_auth;
use fintrack_core::session::Route;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders children only for a signed-in visitor; others are sent to the login page
/// once hydration has finished.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let is_loading = auth.is_loading;
    let is_authenticated = auth.is_authenticated;

    Effect::new(move |_| {
        if !is_loading.get() && !is_authenticated.get() {
            navigate(Route::Login.path(), Default::default());
        }
    });

    view! {
        <Show
            when=move || is_authenticated.get()
            fallback=|| view! { <div class="flex justify-center py-12"><Spinner /></div> }
        >
            {children()}
        </Show>
    }
}

/// Sends a signed-in visitor straight to the dashboard.
#[component]
pub fn RedirectIfSignedIn(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let is_authenticated = auth.is_authenticated;

    Effect::new(move |_| {
        if is_authenticated.get() {
            navigate(Route::Dashboard.path(), Default::default());
        }
    });

    view! { {children()} }
}
