//! Degrade-to-default services over the site API

pub mod admin;
pub mod forms;

pub use admin::AdminGate;
pub use forms::FormsService;
