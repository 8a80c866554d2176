//! Class strings for the UI kit. Components stay thin wrappers around these
//! functions so the variant mapping can be tested without a DOM.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldVariant {
    #[default]
    Default,
    Error,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Outlined,
    Elevated,
    Filled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:opacity-50 disabled:pointer-events-none ring-offset-slate-50 dark:ring-offset-slate-900";

pub fn button_class(variant: ButtonVariant, size: Size, block: bool) -> String {
    let variant = match variant {
        ButtonVariant::Primary => {
            "bg-indigo-600 text-white hover:bg-indigo-700 focus-visible:ring-indigo-500"
        }
        ButtonVariant::Secondary => {
            "bg-slate-200 text-slate-900 hover:bg-slate-300 focus-visible:ring-slate-400 dark:bg-slate-700 dark:text-slate-50 dark:hover:bg-slate-600"
        }
        ButtonVariant::Outline => {
            "border border-slate-300 bg-transparent hover:bg-slate-100 focus-visible:ring-slate-400 dark:border-slate-600 dark:hover:bg-slate-800"
        }
        ButtonVariant::Ghost => {
            "bg-transparent hover:bg-slate-100 focus-visible:ring-slate-400 dark:hover:bg-slate-800"
        }
        ButtonVariant::Link => {
            "text-indigo-600 underline-offset-4 hover:underline dark:text-indigo-400 focus-visible:ring-indigo-500"
        }
    };
    let size = match size {
        Size::Sm => "h-8 px-3 text-xs",
        Size::Md => "h-10 py-2 px-4",
        Size::Lg => "h-12 px-6 text-lg",
    };

    join(&[BUTTON_BASE, variant, size, if block { "w-full" } else { "" }])
}

pub fn input_class(variant: FieldVariant, size: Size) -> String {
    let variant = match variant {
        FieldVariant::Default => "border-gray-300 focus:ring-indigo-500 focus:border-indigo-500",
        FieldVariant::Error => "border-red-500 focus:ring-red-500 focus:border-red-500",
    };
    let size = match size {
        Size::Sm => "px-3 py-1 text-sm",
        Size::Md => "px-3 py-2 text-base",
        Size::Lg => "px-4 py-3 text-lg",
    };

    join(&[
        "flex w-full rounded-md border bg-transparent focus:outline-none focus:ring-2 transition-colors",
        variant,
        size,
    ])
}

pub fn label_class(variant: FieldVariant, size: Size, required: bool) -> String {
    let variant = match variant {
        FieldVariant::Default => "text-gray-700 dark:text-gray-300",
        FieldVariant::Error => "text-red-600 dark:text-red-400",
    };
    let size = match size {
        Size::Sm => "text-sm mb-1",
        Size::Md => "text-base mb-1.5",
        Size::Lg => "text-lg mb-2",
    };
    let marker = if required {
        "after:content-['*'] after:ml-0.5 after:text-red-500"
    } else {
        ""
    };

    join(&["block font-medium transition-colors", variant, size, marker])
}

pub fn card_class(variant: CardVariant, padding: Padding, hover: bool, interactive: bool) -> String {
    let variant_class = match variant {
        CardVariant::Default => "bg-white border border-gray-200 shadow-sm",
        CardVariant::Outlined => "bg-white border border-gray-300",
        CardVariant::Elevated => "bg-white border border-gray-200 shadow-lg",
        CardVariant::Filled => "bg-gray-50 border border-gray-200",
    };
    let padding = match padding {
        Padding::None => "p-0",
        Padding::Sm => "p-3",
        Padding::Md => "p-4",
        Padding::Lg => "p-6",
        Padding::Xl => "p-8",
    };
    let hover_class = match (hover, variant) {
        (false, _) => "",
        (true, CardVariant::Elevated) => "hover:shadow-xl",
        (true, _) => "hover:shadow-md",
    };
    let interactive_class = match (interactive, variant) {
        (false, _) => "",
        (true, CardVariant::Outlined) => {
            "cursor-pointer hover:border-gray-300 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2"
        }
        (true, _) => {
            "cursor-pointer focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2"
        }
    };

    join(&[
        "rounded-lg overflow-hidden transition-all duration-200",
        variant_class,
        padding,
        hover_class,
        interactive_class,
    ])
}

pub fn card_header_class(divider: bool) -> String {
    join(&["px-6 py-4", if divider { "border-b border-gray-200" } else { "" }])
}

pub fn card_content_class(padding: Padding) -> &'static str {
    match padding {
        Padding::None => "p-0",
        Padding::Sm => "px-3 py-2",
        Padding::Md => "px-6 py-4",
        Padding::Lg => "px-6 py-6",
        Padding::Xl => "px-8 py-8",
    }
}

pub fn card_footer_class(divider: bool, muted: bool) -> String {
    join(&[
        "px-6 py-4",
        if divider { "border-t border-gray-200" } else { "" },
        if muted { "bg-gray-50" } else { "bg-white" },
    ])
}

fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
