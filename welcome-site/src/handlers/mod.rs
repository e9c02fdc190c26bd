mod pages;

pub use pages::{about, contact, error, health_check, index};
