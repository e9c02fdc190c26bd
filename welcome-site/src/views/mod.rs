use askama::Template;
use axum::response::{IntoResponse, Response};

/// Target view of a controller action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    About,
    Contact,
    Error,
}

/// Output of a controller action: which view to render plus an optional
/// message slot. Constructed per request and consumed immediately by the
/// view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDirective {
    pub view: View,
    pub message: Option<String>,
}

impl RenderDirective {
    pub fn view(view: View) -> Self {
        Self {
            view,
            message: None,
        }
    }

    pub fn with_message(view: View, message: impl Into<String>) -> Self {
        Self {
            view,
            message: Some(message.into()),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    message: String,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    message: String,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    detail: String,
}

impl IntoResponse for RenderDirective {
    fn into_response(self) -> Response {
        let message = self.message.unwrap_or_default();
        match self.view {
            View::Index => IndexTemplate {}.into_response(),
            View::About => AboutTemplate { message }.into_response(),
            View::Contact => ContactTemplate { message }.into_response(),
            View::Error => ErrorTemplate { detail: message }.into_response(),
        }
    }
}
