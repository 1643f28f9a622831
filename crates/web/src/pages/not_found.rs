use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="max-w-md mx-auto px-4 py-24 text-center">
            <p class="text-6xl font-bold text-sky-600 mb-4">{"404"}</p>
            <h1 class="text-2xl font-bold text-slate-900 mb-2">{"Page not found"}</h1>
            <p class="text-slate-600 mb-8">
                {"The page you are looking for does not exist or has moved."}
            </p>
            <Link<Route>
                to={Route::Home}
                classes="inline-block px-6 py-3 bg-sky-600 hover:bg-sky-700 text-white font-medium rounded-lg"
            >
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
