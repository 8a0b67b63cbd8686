//! Typed wrappers for the recipe backend's endpoints.
//!
//! Every call runs through the fixed abort window: a request that outlives
//! the window is dropped and its eventual result ignored.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::http::{with_deadline, HttpClient};
use crate::types::{Recipe, TopRecipe, TopUser};

const RECIPE_PATH: &str = "/api/user/get/recipe";
const USERS_COUNT_PATH: &str = "/api/users/count";
const RECIPES_COUNT_PATH: &str = "/api/recipes/count";
const TOP_RECIPES_PATH: &str = "/api/recipes/top-liked";
const TOP_USERS_PATH: &str = "/api/users/top-liked";
const LOGIN_PATH: &str = "/api/user/login";

/// Envelope for the recipe endpoint: the backend nests the recipe under a
/// stringly-keyed "0" slot.
#[derive(Debug, Deserialize)]
struct RecipeEnvelope {
    #[serde(rename = "mostRecentRecipe", default)]
    most_recent_recipe: HashMap<String, Recipe>,
}

/// Shape of the two count endpoints; the backend also sends a `status`
/// field, which nothing reads.
#[derive(Debug, Deserialize)]
struct CountResponse {
    #[serde(default)]
    count: u64,
}

#[derive(Debug, Deserialize)]
struct TopRecipesResponse {
    #[serde(rename = "topLikedRecipes", default)]
    top_liked_recipes: Vec<TopRecipe>,
}

#[derive(Debug, Deserialize)]
struct TopUsersResponse {
    #[serde(rename = "topLikedUsers", default)]
    top_liked_users: Vec<TopUser>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    username: String,
}

/// Client for the recipe backend.
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { http, config }
    }

    fn endpoint(&self, path: &str) -> Result<String, FetchError> {
        self.config
            .base_url
            .join(path)
            .map(|url| url.to_string())
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint(path)?;
        let value = with_deadline(self.config.abort_window, self.http.get_json(&url)).await?;
        decode(value)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, FetchError> {
        let url = self.endpoint(path)?;
        let value = with_deadline(self.config.abort_window, self.http.post_json(&url, body)).await?;
        decode(value)
    }

    /// Fetch one recipe by identifier.
    ///
    /// Returns `Ok(None)` when the envelope's "0" slot is empty: an absent
    /// recipe is not an error, the screen just keeps its empty render.
    pub async fn recipe(&self, id: &str) -> Result<Option<Recipe>, FetchError> {
        let mut envelope: RecipeEnvelope = self.post(RECIPE_PATH, json!({ "_id": id })).await?;
        Ok(envelope.most_recent_recipe.remove("0"))
    }

    /// Total registered users.
    pub async fn users_count(&self) -> Result<u64, FetchError> {
        let response: CountResponse = self.get(USERS_COUNT_PATH).await?;
        Ok(response.count)
    }

    /// Total stored recipes.
    pub async fn recipes_count(&self) -> Result<u64, FetchError> {
        let response: CountResponse = self.get(RECIPES_COUNT_PATH).await?;
        Ok(response.count)
    }

    /// Ranked list of the most-liked recipes.
    pub async fn top_liked_recipes(&self) -> Result<Vec<TopRecipe>, FetchError> {
        let response: TopRecipesResponse = self.get(TOP_RECIPES_PATH).await?;
        Ok(response.top_liked_recipes)
    }

    /// Ranked list of the users with the most total likes.
    pub async fn top_liked_users(&self) -> Result<Vec<TopUser>, FetchError> {
        let response: TopUsersResponse = self.get(TOP_USERS_PATH).await?;
        Ok(response.top_liked_users)
    }

    /// Submit a username/password pair and return whatever username the
    /// backend echoes; the session decides what that echo is worth.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, FetchError> {
        let response: LoginResponse = self
            .post(
                LOGIN_PATH,
                json!({ "username": username, "password": password }),
            )
            .await?;
        Ok(response.username)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::InvalidJson(e.to_string()))
}
