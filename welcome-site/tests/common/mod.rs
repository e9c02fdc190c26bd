use welcome_site::config::{Settings, StoreBackend, StoreSettings};
use welcome_site::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawns the application on a random port with the in-memory store
    /// backend, so tests need no external services.
    pub async fn spawn() -> Self {
        let config = Settings {
            port: 0,
            store: StoreSettings {
                backend: StoreBackend::Memory,
                mongodb: None,
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
