pub mod error;
pub mod store;
pub mod prefs;
pub mod i18n;
pub mod config;
pub mod model;
pub mod net;
pub mod view;

// Page state
pub mod tabs;
pub mod accordion;
pub mod controller;

pub use controller::PageController;
