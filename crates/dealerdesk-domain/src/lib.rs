//! Domain layer for dealerdesk: record models, repository traits,
//! and the search/report services

pub mod model;
pub mod repository;
pub mod service;
