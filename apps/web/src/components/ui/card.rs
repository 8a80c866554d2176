use crate::styles::{
    card_class, card_content_class, card_footer_class, card_header_class, CardVariant, Padding,
};
use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: Padding,
    #[prop(optional)] hover: bool,
    #[prop(optional)] interactive: bool,
    #[prop(optional)] id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = card_class(variant, padding, hover, interactive);
    let tabindex = interactive.then_some("0");

    view! {
        <div id=id class=class tabindex=tabindex>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(default = true)] divider: bool, children: Children) -> impl IntoView {
    view! { <div class=card_header_class(divider)>{children()}</div> }
}

#[component]
pub fn CardContent(#[prop(optional)] padding: Padding, children: Children) -> impl IntoView {
    view! { <div class=card_content_class(padding)>{children()}</div> }
}

#[component]
pub fn CardFooter(
    #[prop(default = true)] divider: bool,
    #[prop(default = true)] muted: bool,
    children: Children,
) -> impl IntoView {
    view! { <div class=card_footer_class(divider, muted)>{children()}</div> }
}
