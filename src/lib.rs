pub mod carousel;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod icons;
pub mod models;
pub mod sink;
pub mod slides;
pub mod state;
pub mod validation;
