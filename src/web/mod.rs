pub mod api;
pub mod views;

use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::models::Config;
use crate::store::{MemoryStore, SectionStore};

#[derive(Clone)]
pub struct AppState {
    pub(crate) store: Arc<dyn SectionStore>,
}

pub fn router(store: Arc<dyn SectionStore>) -> Router {
    let state = AppState { store };
    Router::new()
        .route("/", get(views::home))
        .route("/api/sections", post(api::create_section))
        .route("/api/sections/{passcode}", get(api::view_section))
        .route("/api/sections/{passcode}/verify", get(api::verify_passcode))
        .route(
            "/api/sections/{passcode}/students",
            post(api::join_section).get(api::student_list),
        )
        .route(
            "/api/sections/{passcode}/students/{student_id}/schedule",
            get(api::view_schedule).put(api::update_schedule),
        )
        .route(
            "/api/sections/{passcode}/students/{student_id}/group_cumulative",
            get(api::group_cumulative),
        )
        .route(
            "/api/sections/{passcode}/students/{student_id}/group_consecutive",
            get(api::group_consecutive),
        )
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

pub async fn serve(config: Config, addr: &str) -> Result<()> {
    let store = Arc::new(MemoryStore::new(config.service));
    let app = router(store);

    let listener = TcpListener::bind(addr).await?;
    info!("groupmatch listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
