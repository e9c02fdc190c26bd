use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use welcome_site::controllers::HomeController;
use welcome_site::error::AppError;
use welcome_site::models::WelcomeRecord;
use welcome_site::services::WelcomeStore;
use welcome_site::views::View;

/// Store double that counts calls and records write order.
#[derive(Default)]
struct RecordingStore {
    puts: AtomicUsize,
    gets: AtomicUsize,
    writes: Mutex<Vec<WelcomeRecord>>,
}

#[async_trait]
impl WelcomeStore for RecordingStore {
    async fn put(&self, record: WelcomeRecord) -> Result<(), AppError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.writes.lock().await.push(record);
        Ok(())
    }

    async fn get(&self) -> Result<WelcomeRecord, AppError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.writes
            .lock()
            .await
            .last()
            .cloned()
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("empty store")))
    }

    async fn health(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store double whose every call fails, simulating an unreachable backend.
struct UnavailableStore;

#[async_trait]
impl WelcomeStore for UnavailableStore {
    async fn put(&self, _record: WelcomeRecord) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("backend down")))
    }

    async fn get(&self) -> Result<WelcomeRecord, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("backend down")))
    }

    async fn health(&self) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("backend down")))
    }
}

#[tokio::test]
async fn index_writes_once_and_returns_index_view() {
    let store = Arc::new(RecordingStore::default());
    let controller = HomeController::new(store.clone());

    let directive = controller.index().await.unwrap();

    assert_eq!(directive.view, View::Index);
    assert_eq!(directive.message, None);
    assert_eq!(store.puts.load(Ordering::SeqCst), 1);
    assert_eq!(store.gets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn about_after_index_returns_welcome_message() {
    let store = Arc::new(RecordingStore::default());
    let controller = HomeController::new(store.clone());

    controller.index().await.unwrap();
    let directive = controller.about().await.unwrap();

    assert_eq!(directive.view, View::About);
    assert_eq!(directive.message.as_deref(), Some("Welcome to my app."));
}

#[tokio::test]
async fn about_on_empty_store_is_not_found() {
    let store = Arc::new(RecordingStore::default());
    let controller = HomeController::new(store);

    let err = controller.about().await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn index_is_idempotent_in_effect() {
    let store = Arc::new(RecordingStore::default());
    let controller = HomeController::new(store.clone());

    controller.index().await.unwrap();
    let once = controller.about().await.unwrap();

    for _ in 0..4 {
        controller.index().await.unwrap();
    }
    let many = controller.about().await.unwrap();

    assert_eq!(once.message, many.message);
    // Every visit writes, even though the payload never changes
    assert_eq!(store.puts.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn last_write_wins() {
    let store = Arc::new(RecordingStore::default());

    store.put(WelcomeRecord::new("first")).await.unwrap();
    store.put(WelcomeRecord::new("second")).await.unwrap();

    let writes = store.writes.lock().await;
    assert_eq!(writes.len(), 2);
    assert_eq!(writes.last().unwrap().welcome_msg, "second");
    drop(writes);

    let record = store.get().await.unwrap();
    assert_eq!(record.welcome_msg, "second");
}

#[tokio::test]
async fn contact_and_error_never_touch_the_store() {
    let store = Arc::new(RecordingStore::default());
    let controller = HomeController::new(store.clone());

    let contact = controller.contact().await.unwrap();
    let error = controller.error().await.unwrap();

    assert_eq!(contact.view, View::Contact);
    assert_eq!(contact.message.as_deref(), Some("Your contact page."));
    assert_eq!(error.view, View::Error);
    assert_eq!(error.message, None);
    assert_eq!(store.puts.load(Ordering::SeqCst), 0);
    assert_eq!(store.gets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn contact_succeeds_even_when_the_store_is_down() {
    let controller = HomeController::new(Arc::new(UnavailableStore));

    let directive = controller.contact().await.unwrap();
    assert_eq!(directive.message.as_deref(), Some("Your contact page."));
}

#[tokio::test]
async fn store_failures_propagate_unchanged() {
    let controller = HomeController::new(Arc::new(UnavailableStore));

    let err = controller.index().await.unwrap_err();
    assert!(matches!(err, AppError::DatabaseError(_)));

    let err = controller.about().await.unwrap_err();
    assert!(matches!(err, AppError::DatabaseError(_)));
}
