//! MCP tool parameter structs with schemars-derived JSON schemas.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RaceParams {
    #[schemars(description = "Title of the starting article (spaces allowed)")]
    pub start: String,
    #[schemars(description = "Title of the destination article (spaces allowed)")]
    pub destination: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ArticleKeyParams {
    #[schemars(description = "Article title")]
    pub title: String,
}
