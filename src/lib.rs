pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod model;
pub mod progress;
pub mod questions;
pub mod session;
pub mod sound;
pub mod storage;
pub mod ui;
pub mod view_models;

pub use app::CourseApp;
