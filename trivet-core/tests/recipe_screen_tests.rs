//! Recipe screen behavior, driven end to end through a mock transport.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use trivet_core::{ApiClient, ApiConfig, MockClient, RecipeView};

const BASE: &str = "https://recipe.test";

fn client(mock: MockClient) -> ApiClient {
    let config = ApiConfig::new(BASE, Duration::from_millis(100)).unwrap();
    ApiClient::new(config, Arc::new(mock))
}

fn recipe_url() -> String {
    format!("{BASE}/api/user/get/recipe")
}

fn recipe_payload() -> serde_json::Value {
    json!({
        "mostRecentRecipe": {
            "0": {
                "_id": "r1",
                "title": "Shakshuka",
                "info": "Eggs poached in spiced tomato sauce.",
                "likes": -3,
                "categories": ["breakfast", "vegetarian"],
                "image": "https://img.test/shakshuka.jpg",
                "author": { "name": "dana cohen", "username": "dana", "image": "" },
                "userId": { "_id": "u1", "image": "" },
                "ingredients": [
                    { "value": "6 eggs", "_id": "i1" },
                    { "value": "1 can tomatoes", "_id": "i2" }
                ],
                "methods": [
                    { "value": "Crack in the eggs", "number": 3, "_id": "m3" },
                    { "value": "Soften the onions", "number": 1, "_id": "m1" },
                    {
                        "value": "Add the tomatoes",
                        "number": 2,
                        "_id": "m2",
                        "secure_url": "https://img.test/m2.jpg"
                    }
                ],
                "comments_id": [
                    {
                        "_id": "c1",
                        "comment": "Came out great",
                        "user_id": {
                            "_id": "u2",
                            "firstName": "omer",
                            "lastName": "levi",
                            "image": ""
                        },
                        "createdAt": "2024-01-01T00:00:00Z",
                        "updatedAt": "2024-01-01T00:00:00Z"
                    },
                    {
                        "_id": "c2",
                        "comment": "Too spicy for me",
                        "user_id": {
                            "_id": "u3",
                            "firstName": "noa",
                            "lastName": "bar",
                            "image": "https://img.test/u3.png"
                        },
                        "createdAt": "2024-01-02T00:00:00Z",
                        "updatedAt": "2024-01-02T00:00:00Z"
                    }
                ]
            }
        }
    })
}

#[tokio::test]
async fn loads_and_derives_display_fields() {
    let api = client(MockClient::new().with_json(&recipe_url(), recipe_payload()));
    let view = RecipeView::load(&api, "r1").await;

    assert_eq!(view.title, "Shakshuka");
    assert_eq!(view.description, "Eggs poached in spiced tomato sauce.");
    assert_eq!(view.categories, vec!["breakfast", "vegetarian"]);
    assert_eq!(view.image.as_deref(), Some("https://img.test/shakshuka.jpg"));

    // Negative stored count clamps to zero.
    assert_eq!(view.likes, 0);

    assert_eq!(view.author.name, "dana cohen");
    assert_eq!(view.author.handle, "dana");
    assert_eq!(view.author.avatar, None);
    assert_eq!(view.author.initials, "DC");

    assert_eq!(view.ingredients, vec!["6 eggs", "1 can tomatoes"]);

    let numbers: Vec<i64> = view.methods.iter().map(|m| m.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(view.methods[1].image.as_deref(), Some("https://img.test/m2.jpg"));

    // Comments stay in received order; avatar wins over initials when set.
    assert_eq!(view.comments[0].author, "omer levi");
    assert_eq!(view.comments[0].initials, "OL");
    assert_eq!(view.comments[0].avatar, None);
    assert_eq!(view.comments[1].avatar.as_deref(), Some("https://img.test/u3.png"));
}

#[tokio::test]
async fn stalled_fetch_keeps_the_prefetch_default() {
    let api = client(MockClient::new().with_stall(&recipe_url()));
    let view = RecipeView::load(&api, "r1").await;
    assert_eq!(view, RecipeView::default());
}

#[tokio::test]
async fn failed_fetch_keeps_the_prefetch_default() {
    let api = client(MockClient::new().with_error(&recipe_url(), "connection refused"));
    let view = RecipeView::load(&api, "r1").await;
    assert_eq!(view, RecipeView::default());
}

#[tokio::test]
async fn empty_envelope_keeps_the_prefetch_default() {
    let api = client(MockClient::new().with_json(&recipe_url(), json!({ "mostRecentRecipe": {} })));
    let view = RecipeView::load(&api, "r1").await;
    assert_eq!(view, RecipeView::default());
}

#[tokio::test]
async fn sparse_payload_degrades_to_defaults() {
    let api = client(MockClient::new().with_json(
        &recipe_url(),
        json!({ "mostRecentRecipe": { "0": { "title": "Plain toast" } } }),
    ));
    let view = RecipeView::load(&api, "r1").await;

    assert_eq!(view.title, "Plain toast");
    assert_eq!(view.likes, 0);
    assert!(view.ingredients.is_empty());
    assert!(view.methods.is_empty());
    assert!(view.comments.is_empty());
    assert_eq!(view.author.initials, "");
}
