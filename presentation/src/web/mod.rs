//! Web surface
//!
//! A static landing page at `GET /` and the JSON endpoint `POST /ask`.

mod routes;
mod server;

pub use routes::{AppState, AskRequest, AskResponse, ErrorResponse, router};
pub use server::serve;
