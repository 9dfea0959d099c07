// Persona engine: extraction, structuring and reconciliation of model-written
// persona text, plus the service and HTTP surface around it.

pub mod backend;
pub mod bio;
pub mod error;
pub mod export;
pub mod extractor;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod reconcile;
pub mod service;
pub mod store;
pub mod structure;
