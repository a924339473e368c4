pub mod api;
pub mod components;
pub mod ops;
pub mod panel;
pub mod prompt;
pub mod state;
