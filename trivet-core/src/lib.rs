pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod types;
pub mod view;

pub use api::ApiClient;
pub use config::{ApiConfig, DEFAULT_ABORT_WINDOW_MS, DEFAULT_BASE_URL};
pub use error::{ConfigError, FetchError};
pub use http::{
    with_deadline, HttpClient, MockClient, MockResponse, NetworkClient, NetworkClientBuilder,
};
pub use session::{LoginOutcome, Session, ADMIN_USERNAME};
pub use types::{
    Author, AvatarRef, Comment, Commenter, Ingredient, MethodStep, Recipe, TopRecipe, TopUser,
};
pub use view::{initials, AuthorView, CommentView, DashboardView, MethodView, RecipeView};
