//! Login gate shown before the main screen
//!
//! A single fixed credential pair, kept verbatim from the legacy system.
//! This is a demo gate, not an authentication system.

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";

pub fn authenticate(username: &str, password: &str) -> bool {
    username == DEFAULT_USERNAME && password == DEFAULT_PASSWORD
}
