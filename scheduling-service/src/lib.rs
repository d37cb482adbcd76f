pub mod api;
pub mod infrastructure;
pub mod presentation;
