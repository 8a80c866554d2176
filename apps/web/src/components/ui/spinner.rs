use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum SpinnerSize {
    /// Fits inside a button label.
    Inline,
    #[default]
    Block,
}

#[component]
pub fn Spinner(#[prop(optional)] size: SpinnerSize) -> impl IntoView {
    let class = match size {
        SpinnerSize::Inline => {
            "inline-block h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"
        }
        SpinnerSize::Block => {
            "inline-block h-7 w-7 animate-spin rounded-full border-4 border-indigo-200 border-t-indigo-600"
        }
    };

    view! { <div class=class role="status" aria-live="polite" aria-label="Loading"></div> }
}
