//! Service info handler

pub const WELCOME: &str =
    "Welcome to the Movie Recommendation Service. Choose a genre to get started!";

pub async fn info() -> &'static str {
    WELCOME
}
