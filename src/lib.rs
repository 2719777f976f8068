//! Three small HTTP services over axum: a greeter, an in-memory to-do list
//! and a SQLite-backed to-do list. One process serves one of them, picked by
//! [`config::ServiceVariant`].

pub mod api_doc;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod routes;
pub mod sqlite;
pub mod state;
