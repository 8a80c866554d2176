//! Shared layout wrapper with the header navigation and content container.
//! Navigation is client-side only.

use crate::app_lib::{build_info, config::AppConfig};
use crate::features::auth::state::use_auth;
use fintrack_core::session::Route;
use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

const NAV_LINK: &str = "block py-2 px-3 text-slate-900 rounded-md hover:bg-slate-100 md:hover:bg-transparent md:hover:text-indigo-700 md:p-0 dark:text-white md:dark:hover:text-indigo-400";

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let app_name = AppConfig::load().app_name;
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let navigate = use_navigate();
    let next_route = RwSignal::new(None::<Route>);

    Effect::new(move |_| {
        if let Some(route) = next_route.get() {
            navigate(route.path(), Default::default());
        }
    });

    let on_sign_out = move |_: MouseEvent| next_route.set(Some(auth.logout()));

    view! {
        <div class="min-h-screen flex flex-col bg-slate-50 dark:bg-slate-900">
            <header class="border-b border-slate-200 dark:border-slate-700">
                <nav class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="font-semibold text-lg whitespace-nowrap dark:text-white">
                        {app_name}
                    </A>
                    <ul class="font-medium flex flex-row space-x-6">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=|| {
                                view! {
                                    <li>
                                        <A href="/login" {..} class=NAV_LINK>
                                            "Sign In"
                                        </A>
                                    </li>
                                    <li>
                                        <A href="/signup" {..} class=NAV_LINK>
                                            "Sign Up"
                                        </A>
                                    </li>
                                }
                            }
                        >
                            <li>
                                <A href="/dashboard" {..} class=NAV_LINK>
                                    "Dashboard"
                                </A>
                            </li>
                            <li>
                                <button type="button" class=NAV_LINK on:click=on_sign_out.clone()>
                                    "Sign Out"
                                </button>
                            </li>
                        </Show>
                    </ul>
                </nav>
            </header>
            <main class="flex-1">{children()}</main>
            <footer class="py-4 text-center text-xs text-slate-400">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
