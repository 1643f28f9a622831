pub mod app;
pub mod components;
pub mod guard;
pub mod pages;
pub mod routes;

pub use app::App;
pub use guard::RouteGuard;
pub use routes::Route;
