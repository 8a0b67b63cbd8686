//! Display fields for the admin dashboard screen.

use crate::api::ApiClient;
use crate::error::FetchError;
use crate::types::{TopRecipe, TopUser};

/// Flat display fields for the dashboard.
///
/// Each slot is filled by its own fetch and falls back to its own default;
/// one failing call never disturbs the others.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub total_users: u64,
    pub total_recipes: u64,
    pub top_recipes: Vec<TopRecipe>,
    pub top_users: Vec<TopUser>,
}

impl DashboardView {
    /// Run the four mount fetches concurrently and collect whatever
    /// succeeded. Never fails: a fetch that errors leaves its slot at the
    /// default.
    pub async fn load(api: &ApiClient) -> Self {
        let (users, recipes, top_recipes, top_users) = tokio::join!(
            api.users_count(),
            api.recipes_count(),
            api.top_liked_recipes(),
            api.top_liked_users(),
        );

        let mut view = Self::default();

        match users {
            Ok(count) => view.total_users = count,
            Err(err) => log_failure("user count", &err),
        }
        match recipes {
            Ok(count) => view.total_recipes = count,
            Err(err) => log_failure("recipe count", &err),
        }
        match top_recipes {
            Ok(list) => view.top_recipes = list,
            Err(err) => log_failure("top-liked recipes", &err),
        }
        match top_users {
            Ok(list) => view.top_users = list,
            Err(err) => log_failure("top-liked users", &err),
        }

        view
    }
}

fn log_failure(what: &str, err: &FetchError) {
    if err.is_abort() {
        tracing::debug!(what, "dashboard fetch aborted");
    } else {
        tracing::warn!(what, error = %err, "dashboard fetch failed");
    }
}
