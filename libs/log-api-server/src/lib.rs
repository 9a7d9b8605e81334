pub mod error;
pub mod http;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use log_store::Log;

pub use error::ApiError;
pub use http::{ReadRequest, ReadResponse, WriteRequest, WriteResponse};

/// Shared handler state. Owns the one log served by this gateway.
#[derive(Clone)]
pub struct AppState {
    log: Arc<Log>,
}

impl AppState {
    pub fn new(log: Log) -> Self {
        Self { log: Arc::new(log) }
    }

    pub fn log(&self) -> &Log {
        &self.log
    }
}

/// `POST /` appends, `GET /` reads. Both take a JSON body.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handle_read).post(http::handle_write))
        .with_state(state)
}

/// Bind `addr` and serve `log` until `shutdown` is cancelled.
pub async fn run(addr: &str, log: Log, shutdown: CancellationToken) -> Result<(), ApiError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    serve(listener, AppState::new(log), shutdown).await
}

/// Serve on an already bound listener. In-flight requests are drained on
/// shutdown.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), ApiError> {
    if let Ok(local) = listener.local_addr() {
        tracing::info!(addr = %local, "log api listening, server ready");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(ApiError::Serve)
}
