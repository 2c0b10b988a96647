//! Application service layer - config, auth gate, dealership facade

pub mod auth;
pub mod config;
pub mod service;

pub use service::DealershipService;
