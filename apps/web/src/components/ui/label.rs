use crate::styles::{label_class, FieldVariant, Size};
use leptos::prelude::*;

#[component]
pub fn Label(
    for_id: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] size: Size,
    #[prop(optional, into, default = Signal::from(false))] invalid: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        let variant = if invalid.get() {
            FieldVariant::Error
        } else {
            FieldVariant::Default
        };
        label_class(variant, size, required)
    };

    view! {
        <label for=for_id class=class>
            {children()}
        </label>
    }
}
