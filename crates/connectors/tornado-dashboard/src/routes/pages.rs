//! The dashboard pages, served as-is from the templates directory.

use std::io;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tokio::fs;

use crate::error::ServerError;
use crate::state::AppState;

/// Route and template name of every page.
const PAGES: &[(&str, &str)] = &[
    ("/", "home"),
    ("/dashboard1", "dashboard1"),
    ("/dashboard2", "dashboard2"),
    ("/map", "map"),
    ("/about-us", "about-us"),
    ("/work-cited", "work-cited"),
];

pub(super) fn router() -> Router<AppState> {
    PAGES.iter().fold(Router::new(), |router, &(path, template)| {
        router.route(
            path,
            get(move |State(state): State<AppState>| async move {
                get_page(&state, template).await
            }),
        )
    })
}

async fn get_page(state: &AppState, template: &str) -> Result<Html<String>, ServerError> {
    let path = state.pages.templates_dir.join(format!("{template}.html"));
    match fs::read_to_string(&path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            Err(ServerError::TemplateNotFound(path))
        }
        Err(error) => Err(ServerError::Internal(format!(
            "unable to read {}: {error}",
            path.display()
        ))),
    }
}
