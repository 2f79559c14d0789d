pub mod config;
pub mod models;
pub mod service;
pub mod view;
