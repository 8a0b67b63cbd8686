//! Plain-text rendering of the two screens.

use trivet_core::{ApiClient, DashboardView, LoginOutcome, RecipeView, Session};

/// The public recipe screen: one fetch, then render whatever we have.
pub async fn recipe(api: &ApiClient, id: &str) {
    let view = RecipeView::load(api, id).await;
    render_recipe(&view);
}

fn render_recipe(view: &RecipeView) {
    println!("Recipes");
    println!();

    if !view.description.is_empty() {
        println!("{}", view.description);
        println!();
    }
    if !view.categories.is_empty() {
        println!("[{}]", view.categories.join("] ["));
        println!();
    }
    if let Some(image) = &view.image {
        println!("image: {image}");
    }
    if !view.title.is_empty() {
        println!("{}", view.title);
        println!("Likes: {}", view.likes);
    }
    println!();

    match &view.author.avatar {
        Some(avatar) => println!("{} (avatar: {avatar})", view.author.name),
        None => println!("{} ({})", view.author.name, view.author.initials),
    }
    if !view.author.handle.is_empty() {
        println!("@{}", view.author.handle);
    }
    println!();

    println!("Ingredients");
    for item in &view.ingredients {
        println!("- {item}");
    }
    println!();

    println!("Methods");
    for step in &view.methods {
        println!("{}. {}", step.number, step.text);
        if let Some(image) = &step.image {
            println!("   image: {image}");
        }
    }
    println!();

    println!("Recipe Feedbacks");
    for comment in &view.comments {
        match &comment.avatar {
            Some(avatar) => println!("{} (avatar: {avatar})", comment.author),
            None => println!("{} ({})", comment.author, comment.initials),
        }
        println!("  {}", comment.body);
    }
}

/// The admin dashboard: the mount fetches run regardless, but the cards
/// render only once the backend echoes the admin sentinel.
pub async fn dashboard(api: &ApiClient, username: &str, password: &str) {
    let view = DashboardView::load(api).await;

    let mut session = Session::default();
    match api.login(username, password).await {
        Ok(echoed) => {
            if session.apply_login(&echoed) == LoginOutcome::Denied {
                eprintln!("Username or password is wrong");
            }
        }
        Err(err) if err.is_abort() => tracing::debug!("login aborted"),
        Err(err) => tracing::warn!(error = %err, "login failed"),
    }

    if !session.is_authenticated() {
        println!("Login");
        return;
    }

    println!("Dashboard");
    println!();
    println!("Total Users: {}", view.total_users);
    println!("Total Recipes: {}", view.total_recipes);
    println!();

    println!("Top Liked Recipes");
    for recipe in &view.top_recipes {
        println!("- {} (by {})", recipe.title, recipe.author.name);
    }
    println!();

    println!("Top Recommended Users");
    for user in &view.top_users {
        println!("- {}: {} likes", user.id, user.total_likes);
    }
}
