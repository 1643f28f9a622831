//! Application root
//!
//! Provider order matters: the loading signal must exist before the
//! session store that reports into it, and the router must exist before
//! the guard that navigates through it. The overlay sits outside the
//! guard so redirects never unmount it mid-animation.

use techpoa_frontend_common::{LoadingOverlay, LoadingProvider, SessionProvider};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Footer, Navbar};
use crate::guard::RouteGuard;
use crate::pages::{
    AdminPage, DashboardPage, ForgotPasswordPage, HomePage, LoginPage, NotFoundPage,
    ResetPasswordPage, SignupPage, VerifyEmailPage,
};
use crate::routes::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::ResetPassword => html! { <ResetPasswordPage /> },
        Route::VerifyEmail => html! { <VerifyEmailPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <LoadingProvider>
            <BrowserRouter>
                <SessionProvider>
                    <RouteGuard>
                        <div class="min-h-screen flex flex-col bg-slate-50">
                            <Navbar />
                            <main class="flex-1">
                                <Switch<Route> render={switch} />
                            </main>
                            <Footer />
                        </div>
                    </RouteGuard>
                    <LoadingOverlay />
                </SessionProvider>
            </BrowserRouter>
        </LoadingProvider>
    }
}
