use crate::error::AppError;
use crate::models::{WelcomeRecord, WELCOME_MESSAGE};
use crate::services::WelcomeStore;
use crate::views::{RenderDirective, View};
use std::sync::Arc;

/// The page controller. Each action is a stateless, single-shot operation
/// performing at most one store call and returning a render directive.
///
/// The store client is passed in explicitly by the composition root; the
/// controller never caches the welcome document.
#[derive(Clone)]
pub struct HomeController {
    store: Arc<dyn WelcomeStore>,
}

impl HomeController {
    pub fn new(store: Arc<dyn WelcomeStore>) -> Self {
        Self { store }
    }

    /// Overwrites the welcome document on every visit. The payload is
    /// fixed, so repeated calls are idempotent in effect, but the write
    /// happens unconditionally.
    pub async fn index(&self) -> Result<RenderDirective, AppError> {
        self.store.put(WelcomeRecord::new(WELCOME_MESSAGE)).await?;
        Ok(RenderDirective::view(View::Index))
    }

    /// Reads the welcome document and surfaces its message. Fails with
    /// `NotFound` when About is visited before any Index visit.
    pub async fn about(&self) -> Result<RenderDirective, AppError> {
        let record = self.store.get().await?;
        Ok(RenderDirective::with_message(View::About, record.welcome_msg))
    }

    /// Pure: no store interaction.
    pub async fn contact(&self) -> Result<RenderDirective, AppError> {
        Ok(RenderDirective::with_message(
            View::Contact,
            "Your contact page.",
        ))
    }

    /// Pure: no store interaction. Rendered by the fault path at the
    /// request boundary.
    pub async fn error(&self) -> Result<RenderDirective, AppError> {
        Ok(RenderDirective::view(View::Error))
    }
}
