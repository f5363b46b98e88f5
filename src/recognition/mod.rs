use crate::state::AppState;
use axum::Router;

mod client;
mod dto;
pub mod handlers;

pub use client::{ClarifaiClient, Recognizer};

pub fn router() -> Router<AppState> {
    handlers::router()
}
