//! Busy spinner

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Caption under the spinner.
    #[prop_or_default]
    pub text: Option<String>,
    /// Smaller ring for inline placement.
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    let ring = if props.compact {
        "w-5 h-5 border-2"
    } else {
        "w-10 h-10 border-4"
    };
    html! {
        <div class="text-center p-6">
            <div class={classes!(ring, "border-slate-200", "border-t-sky-600", "rounded-full", "animate-spin", "mx-auto")}></div>
            if let Some(text) = &props.text {
                <p class="text-slate-500 text-sm mt-3 m-0">{text}</p>
            }
        </div>
    }
}
