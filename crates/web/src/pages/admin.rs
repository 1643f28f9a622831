//! Hidden admin console
//!
//! Not linked from anywhere; reached by typing the path. The access code
//! gate and its persistence live in [`AdminGate`], this page is only the
//! view over it.

use std::rc::Rc;

use techpoa_client::{ContactRecord, QuoteRecord, SiteStats, Subscriber};
use techpoa_frontend_common::{AdminGate, WebVault};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Subscribers,
    Quotes,
    Messages,
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let gate = use_memo((), |_| AdminGate::shared(Rc::new(WebVault::new())));

    let authorized = use_state(|| gate.is_authorized());
    let tab = use_state(|| AdminTab::Subscribers);
    let code = use_state(String::new);
    let verify_error = use_state(|| Option::<String>::None);
    let busy = use_state(|| false);
    let fetching = use_state(|| false);
    let stats = use_state(SiteStats::default);
    let subscribers = use_state(Vec::<Subscriber>::new);
    let quotes = use_state(Vec::<QuoteRecord>::new);
    let contact_messages = use_state(Vec::<ContactRecord>::new);

    let load = {
        let gate = gate.clone();
        let fetching = fetching.clone();
        let stats = stats.clone();
        let subscribers = subscribers.clone();
        let quotes = quotes.clone();
        let contact_messages = contact_messages.clone();
        Callback::from(move |_: ()| {
            let gate = (*gate).clone();
            let fetching = fetching.clone();
            let stats = stats.clone();
            let subscribers = subscribers.clone();
            let quotes = quotes.clone();
            let contact_messages = contact_messages.clone();
            fetching.set(true);
            spawn_local(async move {
                stats.set(gate.stats().await);
                subscribers.set(gate.subscribers().await);
                quotes.set(gate.quotes().await);
                contact_messages.set(gate.messages().await);
                fetching.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with(*authorized, move |authorized| {
            if *authorized {
                load.emit(());
            }
        });
    }

    let on_code = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            code.set(input.value());
        })
    };

    let on_verify = {
        let gate = gate.clone();
        let code = code.clone();
        let busy = busy.clone();
        let authorized = authorized.clone();
        let verify_error = verify_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let gate = (*gate).clone();
            let entered = (*code).clone();
            let code = code.clone();
            let busy = busy.clone();
            let authorized = authorized.clone();
            let verify_error = verify_error.clone();
            busy.set(true);
            verify_error.set(None);
            spawn_local(async move {
                let ack = gate.verify(&entered).await;
                if ack.success {
                    code.set(String::new());
                    authorized.set(true);
                } else {
                    verify_error.set(Some(ack.message.unwrap_or_else(|| {
                        "That code was not accepted.".to_string()
                    })));
                }
                busy.set(false);
            });
        })
    };

    let on_refresh = {
        let load = load.clone();
        Callback::from(move |_: MouseEvent| load.emit(()))
    };

    let on_sign_out = {
        let gate = gate.clone();
        let authorized = authorized.clone();
        Callback::from(move |_: MouseEvent| {
            gate.sign_out();
            authorized.set(false);
        })
    };

    let totals = *stats;

    html! {
        <div class="max-w-5xl mx-auto px-4 py-12">
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-2xl font-bold text-slate-900 m-0">{"Admin console"}</h1>
                if *authorized {
                    <button
                        onclick={on_sign_out}
                        class="px-4 py-2 text-sm border border-slate-300 hover:bg-slate-50 text-slate-700 rounded-lg"
                    >
                        {"Lock console"}
                    </button>
                }
            </div>

            {if *authorized {
                html! {
                    <>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
                            {[
                                ("Subscribers", totals.subscribers),
                                ("Quotes", totals.quotes),
                                ("Messages", totals.messages),
                                ("Visitors", totals.visitors),
                            ]
                            .into_iter()
                            .map(|(label, value)| html! {
                                <div key={label} class="bg-white border border-slate-200 rounded-xl shadow-sm p-4">
                                    <p class="text-xs font-semibold text-slate-500 uppercase m-0">{label}</p>
                                    <p class="text-2xl font-bold text-slate-900 m-0">{value}</p>
                                </div>
                            })
                            .collect::<Html>()}
                        </div>

                        <div class="flex items-center justify-between border-b border-slate-200 mb-4">
                            <div class="flex">
                                {[
                                    (AdminTab::Subscribers, format!("Subscribers ({})", subscribers.len())),
                                    (AdminTab::Quotes, format!("Quotes ({})", quotes.len())),
                                    (AdminTab::Messages, format!("Messages ({})", contact_messages.len())),
                                ]
                                .into_iter()
                                .map(|(id, label)| {
                                    let active = *tab == id;
                                    let onclick = {
                                        let tab = tab.clone();
                                        Callback::from(move |_: MouseEvent| tab.set(id))
                                    };
                                    html! {
                                        <button
                                            key={label.clone()}
                                            {onclick}
                                            class={if active {
                                                "px-4 py-2 text-sm font-medium border-b-2 border-sky-600 text-sky-700"
                                            } else {
                                                "px-4 py-2 text-sm font-medium border-b-2 border-transparent text-slate-500 hover:text-slate-700"
                                            }}
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect::<Html>()}
                            </div>
                            <button
                                onclick={on_refresh}
                                disabled={*fetching}
                                class="px-3 py-1.5 text-sm border border-slate-300 hover:bg-slate-50 disabled:text-slate-400 text-slate-700 rounded-lg mb-2"
                            >
                                {if *fetching { "Refreshing..." } else { "Refresh" }}
                            </button>
                        </div>

                        <div class="bg-white border border-slate-200 rounded-xl shadow-sm overflow-x-auto">
                            {match *tab {
                                AdminTab::Subscribers => html! {
                                    <table class="w-full text-left">
                                        <thead>
                                            <tr class="border-b border-slate-200">
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Email"}</th>
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Subscribed"}</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {if subscribers.is_empty() {
                                                html! {
                                                    <tr>
                                                        <td colspan="2" class="py-6 px-4 text-center text-sm text-slate-500">
                                                            {"No subscribers yet."}
                                                        </td>
                                                    </tr>
                                                }
                                            } else {
                                                subscribers
                                                    .iter()
                                                    .map(|subscriber| html! {
                                                        <tr key={subscriber.email.clone()} class="border-b border-slate-100">
                                                            <td class="py-3 px-4 text-sm text-slate-900">{subscriber.email.clone()}</td>
                                                            <td class="py-3 px-4 text-sm text-slate-600">
                                                                {subscriber.subscribed_at.format("%Y-%m-%d").to_string()}
                                                            </td>
                                                        </tr>
                                                    })
                                                    .collect::<Html>()
                                            }}
                                        </tbody>
                                    </table>
                                },
                                AdminTab::Quotes => html! {
                                    <table class="w-full text-left">
                                        <thead>
                                            <tr class="border-b border-slate-200">
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Name"}</th>
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Email"}</th>
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Service"}</th>
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Budget"}</th>
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Details"}</th>
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Date"}</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {if quotes.is_empty() {
                                                html! {
                                                    <tr>
                                                        <td colspan="6" class="py-6 px-4 text-center text-sm text-slate-500">
                                                            {"No quote requests yet."}
                                                        </td>
                                                    </tr>
                                                }
                                            } else {
                                                quotes
                                                    .iter()
                                                    .map(|quote| html! {
                                                        <tr key={quote.id.clone()} class="border-b border-slate-100 align-top">
                                                            <td class="py-3 px-4 text-sm text-slate-900">{quote.name.clone()}</td>
                                                            <td class="py-3 px-4 text-sm text-slate-600">{quote.email.clone()}</td>
                                                            <td class="py-3 px-4 text-sm text-slate-600">{quote.service.clone()}</td>
                                                            <td class="py-3 px-4 text-sm text-slate-600">
                                                                {quote.budget.clone().unwrap_or_else(|| "-".to_string())}
                                                            </td>
                                                            <td class="py-3 px-4 text-sm text-slate-600 max-w-xs truncate" title={quote.details.clone()}>
                                                                {quote.details.clone()}
                                                            </td>
                                                            <td class="py-3 px-4 text-sm text-slate-600">
                                                                {quote.submitted_at.format("%Y-%m-%d").to_string()}
                                                            </td>
                                                        </tr>
                                                    })
                                                    .collect::<Html>()
                                            }}
                                        </tbody>
                                    </table>
                                },
                                AdminTab::Messages => html! {
                                    <table class="w-full text-left">
                                        <thead>
                                            <tr class="border-b border-slate-200">
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Name"}</th>
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Email"}</th>
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Subject"}</th>
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Message"}</th>
                                                <th class="py-3 px-4 text-xs font-semibold text-slate-500 uppercase">{"Date"}</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {if contact_messages.is_empty() {
                                                html! {
                                                    <tr>
                                                        <td colspan="5" class="py-6 px-4 text-center text-sm text-slate-500">
                                                            {"No messages yet."}
                                                        </td>
                                                    </tr>
                                                }
                                            } else {
                                                contact_messages
                                                    .iter()
                                                    .map(|message| html! {
                                                        <tr key={message.id.clone()} class="border-b border-slate-100 align-top">
                                                            <td class="py-3 px-4 text-sm text-slate-900">{message.name.clone()}</td>
                                                            <td class="py-3 px-4 text-sm text-slate-600">{message.email.clone()}</td>
                                                            <td class="py-3 px-4 text-sm text-slate-600">{message.subject.clone()}</td>
                                                            <td class="py-3 px-4 text-sm text-slate-600 max-w-xs truncate" title={message.message.clone()}>
                                                                {message.message.clone()}
                                                            </td>
                                                            <td class="py-3 px-4 text-sm text-slate-600">
                                                                {message.received_at.format("%Y-%m-%d").to_string()}
                                                            </td>
                                                        </tr>
                                                    })
                                                    .collect::<Html>()
                                            }}
                                        </tbody>
                                    </table>
                                },
                            }}
                        </div>
                    </>
                }
            } else {
                html! {
                    <div class="max-w-md mx-auto">
                        <div class="bg-white border border-slate-200 rounded-xl shadow-sm p-6">
                            <h2 class="text-lg font-semibold text-slate-900 mb-1">{"Restricted area"}</h2>
                            <p class="text-sm text-slate-600 mb-6">
                                {"Enter the admin access code to continue."}
                            </p>

                            if let Some(error) = (*verify_error).clone() {
                                <div class="bg-red-50 border border-red-200 rounded-lg p-3 mb-4">
                                    <p class="text-sm text-red-700 m-0">{error}</p>
                                </div>
                            }

                            <form class="space-y-4" onsubmit={on_verify}>
                                <input
                                    type="password"
                                    placeholder="Access code"
                                    class="w-full px-4 py-3 border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500 focus:border-sky-500"
                                    value={(*code).clone()}
                                    oninput={on_code}
                                />
                                <button
                                    type="submit"
                                    disabled={*busy}
                                    class="w-full px-4 py-3 bg-sky-600 hover:bg-sky-700 disabled:bg-slate-400 text-white font-medium rounded-lg"
                                >
                                    {if *busy { "Checking..." } else { "Unlock" }}
                                </button>
                            </form>
                        </div>
                    </div>
                }
            }}
        </div>
    }
}
