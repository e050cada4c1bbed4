use crate::presentation::handlers::teachers;
use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::state::AppState;

/// Teacher routes - CRUD plus lastname filtering on the collection
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(teachers::create_teacher).get(teachers::list_teachers))
        .route(
            "/{id}",
            get(teachers::get_teacher)
                .put(teachers::update_teacher)
                .delete(teachers::delete_teacher),
        )
}
