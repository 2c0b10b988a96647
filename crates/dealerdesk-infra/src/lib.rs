//! Infrastructure layer for dealerdesk

pub mod export;
