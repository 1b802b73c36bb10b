use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::clothing;
use crate::state::AppState;

/// Routes mounted at `/clothing`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(clothing::list).post(clothing::create))
        .route("/{id}", delete(clothing::delete))
}
