//! Landing page: hero, launch countdown, newsletter signup

use chrono::{DateTime, Utc};
use gloo::timers::callback::Interval;
use techpoa_client::{Ack, LaunchInfo};
use techpoa_frontend_common::FormsService;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Days/hours/minutes/seconds until `until`, or `None` once it has passed.
fn countdown_parts(now: DateTime<Utc>, until: DateTime<Utc>) -> Option<(i64, i64, i64, i64)> {
    let secs = (until - now).num_seconds();
    if secs <= 0 {
        return None;
    }
    Some((secs / 86_400, (secs / 3_600) % 24, (secs / 60) % 60, secs % 60))
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let launch = use_state(|| Option::<LaunchInfo>::None);
    let now = use_state(Utc::now);
    let email = use_state(String::new);
    let submitting = use_state(|| false);
    let ack = use_state(|| Option::<Ack>::None);

    // Fetch launch timing once
    {
        let launch = launch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let info = FormsService::shared().launch_info().await;
                launch.set(Some(info));
            });
            || ()
        });
    }

    // Tick the countdown every second
    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(1_000, move || now.set(Utc::now()));
            move || drop(interval)
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_subscribe = {
        let email = email.clone();
        let submitting = submitting.clone();
        let ack = ack.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = (*email).clone();
            if address.is_empty() || *submitting {
                return;
            }
            let email = email.clone();
            let submitting = submitting.clone();
            let ack = ack.clone();
            submitting.set(true);
            spawn_local(async move {
                let result = FormsService::shared().subscribe_newsletter(&address).await;
                if result.success {
                    email.set(String::new());
                }
                ack.set(Some(result));
                submitting.set(false);
            });
        })
    };

    let countdown = (*launch)
        .as_ref()
        .and_then(|info| countdown_parts(*now, info.launch_at));
    let launch_message = (*launch).as_ref().and_then(|info| info.message.clone());

    html! {
        <div>
            <section class="bg-gradient-to-br from-sky-700 to-slate-900 text-white">
                <div class="max-w-6xl mx-auto px-4 py-24 text-center">
                    <h1 class="text-4xl sm:text-5xl font-bold mb-4">
                        {"Learn. Build. Launch."}
                    </h1>
                    <p class="text-lg text-sky-100 max-w-2xl mx-auto mb-8">
                        {"TechPoa brings hands-on tech training, custom software and a
                          builder community together in one place."}
                    </p>
                    <Link<Route>
                        to={Route::Signup}
                        classes="inline-block px-6 py-3 bg-white text-sky-700 font-semibold rounded-lg hover:bg-sky-50"
                    >
                        {"Create your account"}
                    </Link<Route>>
                </div>
            </section>

            <section class="max-w-6xl mx-auto px-4 py-16 text-center">
                {match countdown {
                    Some((days, hours, minutes, seconds)) => html! {
                        <>
                            <h2 class="text-2xl font-bold text-slate-900 mb-2">
                                {launch_message.unwrap_or_else(|| "Full platform launch".to_string())}
                            </h2>
                            <div class="flex justify-center gap-6 mt-6">
                                {[("Days", days), ("Hours", hours), ("Minutes", minutes), ("Seconds", seconds)]
                                    .into_iter()
                                    .map(|(label, value)| html! {
                                        <div key={label} class="w-20">
                                            <div class="text-3xl font-bold text-sky-700">{value}</div>
                                            <div class="text-xs uppercase tracking-wide text-slate-500">{label}</div>
                                        </div>
                                    })
                                    .collect::<Html>()}
                            </div>
                        </>
                    },
                    None => html! {
                        <h2 class="text-2xl font-bold text-slate-900">
                            {launch_message.unwrap_or_else(|| "The platform is live".to_string())}
                        </h2>
                    },
                }}
            </section>

            <section class="bg-slate-50 border-t border-slate-200">
                <div class="max-w-xl mx-auto px-4 py-16 text-center">
                    <h2 class="text-2xl font-bold text-slate-900 mb-2">{"Stay in the loop"}</h2>
                    <p class="text-slate-600 mb-6">
                        {"Course launches, events and product updates. No spam."}
                    </p>
                    <form class="flex gap-3" onsubmit={on_subscribe}>
                        <input
                            type="email"
                            class="flex-1 px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email_input}
                        />
                        <button
                            type="submit"
                            class="px-6 py-3 bg-sky-600 hover:bg-sky-700 text-white font-medium rounded-lg disabled:opacity-50"
                            disabled={*submitting}
                        >
                            {if *submitting { "Subscribing..." } else { "Subscribe" }}
                        </button>
                    </form>
                    {match (*ack).as_ref() {
                        Some(ack) if ack.success => html! {
                            <p class="mt-4 text-sm text-green-700">
                                {ack.message.clone().unwrap_or_else(|| "You're subscribed!".to_string())}
                            </p>
                        },
                        Some(ack) => html! {
                            <p class="mt-4 text-sm text-red-600">
                                {ack.message.clone().unwrap_or_else(|| "Something went wrong. Please try again.".to_string())}
                            </p>
                        },
                        None => html! {},
                    }}
                </div>
            </section>
        </div>
    }
}
