pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod palette;
pub mod store;
pub mod theme;
pub mod validation;
