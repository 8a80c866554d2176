use crate::styles::{input_class, FieldVariant, Size};
use leptos::prelude::*;

/// Text input bound to `value`. `invalid` switches to the error style and
/// sets `aria-invalid`.
#[component]
pub fn Input(
    id: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] size: Size,
    #[prop(optional, into, default = Signal::from(false))] invalid: Signal<bool>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let class = move || {
        let variant = if invalid.get() {
            FieldVariant::Error
        } else {
            FieldVariant::Default
        };
        input_class(variant, size)
    };

    view! {
        <input
            id=id
            name=id
            type=input_type
            class=class
            autocomplete=autocomplete
            placeholder=placeholder
            aria-invalid=move || invalid.get().to_string()
            prop:value=move || value.get()
            on:input=move |event| value.set(event_target_value(&event))
        />
    }
}
