//! Display fields for the public recipe screen.

use crate::api::ApiClient;
use crate::types::{Comment, Recipe};

/// Uppercase first letters of the space-separated tokens of `name`, joined
/// with no separator. An empty name yields an empty string.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Author block: display name, handle, and either an avatar URL or an
/// initials badge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorView {
    pub name: String,
    pub handle: String,
    pub avatar: Option<String>,
    pub initials: String,
}

/// A method step ready for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodView {
    pub number: i64,
    pub text: String,
    pub image: Option<String>,
}

/// A comment ready for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentView {
    pub author: String,
    pub initials: String,
    pub avatar: Option<String>,
    pub body: String,
}

impl CommentView {
    fn derive(comment: &Comment) -> Self {
        let full_name = format!(
            "{} {}",
            comment.commenter.first_name, comment.commenter.last_name
        );

        Self {
            initials: initials(&full_name),
            avatar: non_empty(&comment.commenter.image),
            body: comment.comment.clone(),
            author: full_name,
        }
    }
}

/// Flat display fields for the recipe screen.
///
/// The default value is the empty render shown before the first successful
/// fetch; every field degrades to "no content" rather than failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeView {
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub image: Option<String>,
    /// Clamped at zero; a negative stored count is never shown.
    pub likes: u64,
    pub author: AuthorView,
    pub ingredients: Vec<String>,
    /// Sorted ascending by step number.
    pub methods: Vec<MethodView>,
    /// In the order received, no sorting or dedup.
    pub comments: Vec<CommentView>,
}

impl RecipeView {
    /// Derive display fields from a fetched recipe.
    ///
    /// Methods are sorted on a copy; the order stored in `recipe` stays as
    /// received.
    pub fn derive(recipe: &Recipe) -> Self {
        let mut methods: Vec<_> = recipe.methods.iter().collect();
        methods.sort_by_key(|step| step.number);

        Self {
            title: recipe.title.clone(),
            description: recipe.info.clone(),
            categories: recipe.categories.clone(),
            image: non_empty(&recipe.image),
            likes: recipe.likes.max(0) as u64,
            author: AuthorView {
                name: recipe.author.name.clone(),
                handle: recipe.author.username.clone(),
                avatar: non_empty(&recipe.user.image),
                initials: initials(&recipe.author.name),
            },
            ingredients: recipe
                .ingredients
                .iter()
                .map(|item| item.value.clone())
                .collect(),
            methods: methods
                .into_iter()
                .map(|step| MethodView {
                    number: step.number,
                    text: step.value.clone(),
                    image: step.secure_url.clone(),
                })
                .collect(),
            comments: recipe.comments.iter().map(CommentView::derive).collect(),
        }
    }

    /// Fetch the recipe and derive its view; any failure keeps the empty
    /// render.
    pub async fn load(api: &ApiClient, id: &str) -> Self {
        match api.recipe(id).await {
            Ok(Some(recipe)) => Self::derive(&recipe),
            Ok(None) => {
                tracing::debug!(id, "recipe response had no content");
                Self::default()
            }
            Err(err) if err.is_abort() => {
                tracing::debug!(id, "recipe fetch aborted");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "recipe fetch failed");
                Self::default()
            }
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
