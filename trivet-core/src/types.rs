//! Wire shapes for the recipe backend's JSON.
//!
//! Every field carries a serde default so absent or null-ish fields degrade
//! to empty values instead of failing the screen.

use serde::{Deserialize, Serialize};

/// Recipe author summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub image: String,
}

/// Avatar holder attached to the recipe's owning user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvatarRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub image: String,
}

/// A single ingredient line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub value: String,
    #[serde(rename = "_id", default)]
    pub id: String,
}

/// A numbered method step, optionally carrying an image reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodStep {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub number: i64,
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
}

/// Commenter summary embedded in a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Commenter {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub image: String,
}

/// A comment left on a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub comment: String,
    #[serde(rename = "user_id", default)]
    pub commenter: Commenter,
    /// Present in the shape, displayed nowhere.
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// A full recipe as the recipe endpoint returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub methods: Vec<MethodStep>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// May be negative on the wire; clamped at display time.
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub author: Author,
    #[serde(rename = "userId", default)]
    pub user: AvatarRef,
    #[serde(rename = "comments_id", default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_public_id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// Entry in the dashboard's top-liked recipe list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopRecipe {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Author,
}

/// Entry in the dashboard's top-liked user list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopUser {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "totalLikes", default)]
    pub total_likes: i64,
}
