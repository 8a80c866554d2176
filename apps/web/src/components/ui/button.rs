use super::spinner::SpinnerSize;
use super::Spinner;
use crate::styles::{button_class, ButtonVariant, Size};
use leptos::{ev::MouseEvent, prelude::*};

/// Button with style variants. While `is_loading` is set the label is
/// replaced by a spinner and the button is disabled.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: Size,
    #[prop(optional)] block: bool,
    #[prop(optional, into, default = Signal::from(false))] is_loading: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let class = button_class(variant, size, block);

    view! {
        <button
            type=button_type
            class=class
            disabled=move || disabled.get() || is_loading.get()
            aria-busy=move || is_loading.get().to_string()
            on:click=move |event| {
                if let Some(on_click) = on_click {
                    on_click.run(event);
                }
            }
        >
            {move || {
                if is_loading.get() {
                    view! { <Spinner size=SpinnerSize::Inline /> }.into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
