pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
