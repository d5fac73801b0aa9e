//! # Pokedex
//!
//! A JSON API over Pokemon records joined with their species, usable both as
//! a standalone binary and as a library.
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pokedex::server::{AppState, create_router};
//! use pokedex::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new("./data/pokedex.db").unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState::new(Arc::new(store)));
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `pokedex` binary. Disable with `default-features = false`.

pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
