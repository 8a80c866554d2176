use crate::components::AppShell;
use crate::styles::{button_class, ButtonVariant, Size};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let go_back = move |_| {
        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
            let _ = history.back();
        }
    };

    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-7xl font-black text-slate-200 dark:text-slate-700 select-none">
                    "404"
                </h1>
                <p class="mt-2 text-2xl font-bold text-slate-900 dark:text-white">
                    "Page not found"
                </p>
                <div class="mt-6 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" {..} class=button_class(ButtonVariant::Primary, Size::Md, false)>
                        "Go Home"
                    </A>
                    <button
                        type="button"
                        class=button_class(ButtonVariant::Outline, Size::Md, false)
                        on:click=go_back
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
