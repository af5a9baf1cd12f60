pub mod app;
pub mod assistant;
pub mod carrier;
pub mod clock;
pub mod config;
pub mod contact;
pub mod data;
pub mod errors;
pub mod model;
pub mod scoring;
pub mod selector;
pub mod session;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::MedQuizApp;
