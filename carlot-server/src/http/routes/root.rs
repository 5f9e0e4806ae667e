//! Welcome endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = concat!(
    "Welcome to my REST API! 🎉",
    "👉🏻 Visit `/api/cars` to list all the cars in the database",
    "👉🏻 Visit `/api/cars/:id` to get a specific car by its id",
    "👉🏻 Post a json to `/api/cars/` to add a new car to the database",
    " Thanks for visiting! 🙏🏻",
);

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET /
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn welcome_lists_routes() {
        let Json(body) = welcome().await;
        assert!(body.message.starts_with("Welcome to my REST API!"));
        assert!(body.message.contains("/api/cars/:id"));
    }
}
