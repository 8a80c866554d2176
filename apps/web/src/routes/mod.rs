mod dashboard;
mod home;
mod login;
mod not_found;
mod signup;

pub(crate) use dashboard::DashboardPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use signup::SignUpPage;

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

/// Inline message under a form field, shown when `error` belongs to `field`.
#[component]
fn FieldMessage(error: ReadSignal<Option<AppError>>, field: &'static str) -> impl IntoView {
    move || {
        error
            .get()
            .filter(|err| err.field_id() == Some(field))
            .map(|err| view! { <span class="text-red-500 text-sm">{err.to_string()}</span> })
    }
}

/// Whether `error` belongs to `field`.
fn has_error(error: ReadSignal<Option<AppError>>, field: &'static str) -> Signal<bool> {
    Signal::derive(move || {
        error
            .get()
            .is_some_and(|err| err.field_id() == Some(field))
    })
}

/// Banner for errors that are not tied to a field.
#[component]
fn FormAlert(error: ReadSignal<Option<AppError>>) -> impl IntoView {
    move || {
        error
            .get()
            .filter(|err| err.field_id().is_none())
            .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
    }
}
