//! View-state derivation: JSON responses mapped into flat display fields.
//!
//! Screens hold one of these values, rebuilt from scratch on every mount;
//! rendering code never needs per-field fallbacks because defaults are
//! filled here and in the wire types.

mod dashboard;
mod recipe;

pub use dashboard::DashboardView;
pub use recipe::{initials, AuthorView, CommentView, MethodView, RecipeView};
