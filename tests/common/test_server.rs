use std::sync::Arc;

use pokedex::server::{AppState, create_router};
use pokedex::store::{SqliteStore, Store};
use serde_json::{Value, json};
use tokio::task::JoinHandle;

pub struct TestServer {
    pub base_url: String,
    pub store: Arc<SqliteStore>,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serves the full router over a fresh seeded in-memory database.
    pub async fn start() -> Self {
        let store = SqliteStore::in_memory().expect("open store");
        store.initialize().expect("initialize store");
        store.seed_lookups().expect("seed lookups");
        let store = Arc::new(store);

        let state = Arc::new(AppState::new(store.clone() as Arc<dyn Store>));
        let app = create_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let port = listener.local_addr().expect("local addr").port();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            store,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Creates a pokemon with a new species and returns its id.
    pub async fn create_pokemon(&self, identifier: &str, order: i64) -> i64 {
        let resp = self
            .client
            .post(self.url("/api/pokemons/"))
            .json(&json!({
                "identifier": identifier,
                "height": 7,
                "weight": 69,
                "base_experience": 64,
                "order": order,
                "is_default": true,
                "evolves_from_species_id": null,
                "generation_id": 1,
                "color_id": 5,
                "shape_id": 8,
                "capture_rate": 45,
                "type_ids": [12, 4]
            }))
            .send()
            .await
            .expect("create pokemon");
        assert_eq!(resp.status(), 201);

        let body: Value = resp.json().await.expect("parse create response");
        body["pokemon"]["id"].as_i64().expect("pokemon id")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
