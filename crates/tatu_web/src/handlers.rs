use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tatu_feeds::{FeedManager, FeedSource, Services};
use tracing::error;

use crate::render;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// 1-based page; missing, zero or unparsable values mean the first page.
    pub fn page_number(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1)
    }
}

pub async fn hacker_news(State(state): State<Arc<AppState>>, Query(query): Query<PageQuery>) -> Response {
    render_feed(&state, FeedSource::HackerNews, query.page_number()).await
}

pub async fn the_verge(State(state): State<Arc<AppState>>, Query(query): Query<PageQuery>) -> Response {
    render_feed(&state, FeedSource::TheVerge, query.page_number()).await
}

pub async fn not_found(uri: Uri) -> Response {
    (StatusCode::NOT_FOUND, Html(render::not_found_page(uri.path()))).into_response()
}

async fn render_feed(state: &AppState, source: FeedSource, page: usize) -> Response {
    let services = match Services::from_environment(&state.environment, state.http.clone()) {
        Ok(services) => services,
        Err(e) => {
            error!("Route {} failed: {}", source.path(), e);
            return server_error(&e.to_string());
        }
    };

    let manager = FeedManager::new(&services, state.settings);
    match manager.render(source, page).await {
        Ok(result) => Html(render::feed_page(source, &result)).into_response(),
        Err(e) => {
            error!("Route {} failed: {}", source.path(), e);
            server_error(&e.to_string())
        }
    }
}

fn server_error(message: &str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(render::error_page(message))).into_response()
}
