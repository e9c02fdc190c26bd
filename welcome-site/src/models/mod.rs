mod welcome;

pub use welcome::{WelcomeRecord, WELCOME_KEY, WELCOME_MESSAGE};
