/// Router assembly and HTTP serving
use crate::{api, config::ServerConfig, middleware, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use roster_core::UserStore;
use std::{net::SocketAddr, sync::Arc, time::Duration};

/// Build the route table wrapped in the middleware chain
pub fn create_router(app_state: AppState, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .route(
            "/users",
            post(api::users::create_user).get(api::users::list_users),
        )
        .route(
            "/users/:id",
            get(api::users::get_user)
                .put(api::users::update_user)
                .delete(api::users::delete_user),
        )
        .with_state(app_state);

    middleware::layered(routes, request_timeout)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM
pub async fn serve(config: &ServerConfig, store: Arc<dyn UserStore>) -> anyhow::Result<()> {
    let app_state = AppState::new(store, config.http.max_body_bytes);
    let app = create_router(app_state, config.request_timeout());

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down gracefully"),
    }
}
