// Axum start-up code for the frame server. Everything is stateless per
// request; the shared state is configuration plus the compiled templates.

pub mod error;
pub mod handlers;
pub mod request_url;
pub mod routes;
pub mod state;
pub mod templates;

use axum::Router;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::WebConfig;
use state::AppState;

const LISTEN_BACKLOG: i32 = 1024;

pub fn app(state: Arc<AppState>) -> Router {
    routes::frame_routes()
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: &WebConfig, state: Arc<AppState>) -> io::Result<()> {
    let address = tokio::net::lookup_host((config.host.as_str(), config.port))
        .await?
        .next()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("Could not resolve {}:{}", config.host, config.port),
            )
        })?;

    let listener = bind_listener(address)?;
    info!("Server is running on port {}", listener.local_addr()?.port());

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

fn bind_listener(address: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(address), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&address.into())?;
    socket.listen(LISTEN_BACKLOG)?;

    TcpListener::from_std(socket.into())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
