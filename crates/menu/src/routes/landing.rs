//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Static hero content for the landing page.
#[derive(Clone)]
pub struct Hero {
    pub eyebrow: &'static str,
    pub tagline: &'static str,
    pub button_text: &'static str,
    pub button_url: &'static str,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            eyebrow: "Dine-in reimagined",
            tagline: "Browse the menu, preview dishes, and order from your table.",
            button_text: "View Menu",
            button_url: "/menu",
        }
    }
}

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub restaurant_name: String,
    pub hero: Hero,
}

/// Display the landing page.
#[instrument(skip(state))]
pub async fn landing(State(state): State<AppState>) -> impl IntoResponse {
    LandingTemplate {
        restaurant_name: state.config().restaurant_name.clone(),
        hero: Hero::default(),
    }
}
