//! Site footer

use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-slate-900 text-slate-400">
            <div class="max-w-6xl mx-auto px-4 py-8 flex flex-col sm:flex-row items-center justify-between gap-2 text-sm">
                <p class="m-0">{"© 2026 TechPoa. Training, software and community from Nairobi."}</p>
                <p class="m-0">{"info@techpoa.com"}</p>
            </div>
        </footer>
    }
}
