pub mod app;
pub mod backend;
pub mod canvas;
pub mod config;
pub mod data;
pub mod gamification;
pub mod model;
pub mod scoring;
pub mod tasks;
pub mod ui;
pub mod view_models;

pub use app::ArtTutorApp;
