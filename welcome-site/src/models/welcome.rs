use serde::{Deserialize, Serialize};

/// Fixed identifier of the single demo document.
pub const WELCOME_KEY: &str = "thekey";

/// Payload written on every Index visit.
pub const WELCOME_MESSAGE: &str = "Welcome to my app.";

/// The one document this application stores. Overwritten on every Index
/// visit, read on every About visit; never cached by the controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WelcomeRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "welcomeMsg")]
    pub welcome_msg: String,
}

impl WelcomeRecord {
    pub fn new(welcome_msg: impl Into<String>) -> Self {
        Self {
            id: WELCOME_KEY.to_string(),
            welcome_msg: welcome_msg.into(),
        }
    }
}
