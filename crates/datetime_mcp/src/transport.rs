use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::{Json, Router, extract::State, routing::get};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::core::utils::normalize_prefix;
use crate::server::DateTimeService;

/// Static descriptor served by the SSE-mode info route
#[derive(Debug, Clone, Serialize)]
struct TransportInfo {
    name: &'static str,
    version: &'static str,
    transport: &'static str,
    endpoints: TransportEndpoints,
}

#[derive(Debug, Clone, Serialize)]
struct TransportEndpoints {
    sse: String,
    message: String,
    info: String,
}

/// Serve over stdio; blocks until the client disconnects
pub async fn run_stdio(service: DateTimeService) -> Result<(), Box<dyn std::error::Error>> {
    use rmcp::{ServiceExt, transport::stdio};

    let server = service.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    server.waiting().await?;
    Ok(())
}

/// Serve over HTTP/SSE; blocks until SIGINT/SIGTERM
///
/// Each inbound SSE connection gets its own session-keyed transport, so
/// concurrent clients are isolated from one another.
pub async fn run_sse(
    service: DateTimeService,
    port: u16,
    prefix: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let prefix = normalize_prefix(prefix);
    let sse_path = format!("{prefix}/sse");
    let post_path = format!("{prefix}/message");
    let info_path = format!("{prefix}/info");

    let bind = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port);
    let (sse_server, sse_router) = SseServer::new(SseServerConfig {
        bind,
        sse_path: sse_path.clone(),
        post_path: post_path.clone(),
        ct: CancellationToken::new(),
        sse_keep_alive: None,
    });

    let info = TransportInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        transport: "sse",
        endpoints: TransportEndpoints {
            sse: sse_path,
            message: post_path,
            info: info_path.clone(),
        },
    };
    let app = sse_router.merge(
        Router::new()
            .route(&info_path, get(transport_info))
            .with_state(info),
    );

    // Bind failure is fatal; the caller exits non-zero.
    let listener = tokio::net::TcpListener::bind(bind).await.inspect_err(|e| {
        tracing::error!("failed to bind {}: {}", bind, e);
    })?;
    tracing::info!("SSE transport listening on http://{}{}", bind, prefix);

    let http_ct = sse_server.config.ct.child_token();
    let http_server = axum::serve(listener, app).with_graceful_shutdown(async move {
        http_ct.cancelled().await;
        tracing::info!("HTTP listener shutting down");
    });
    tokio::spawn(async move {
        if let Err(e) = http_server.await {
            tracing::error!("HTTP listener terminated with error: {}", e);
        }
    });

    let service_ct = sse_server.with_service(move || service.clone());

    shutdown_signal().await?;
    tracing::info!("shutdown signal received, closing transports");
    service_ct.cancel();
    Ok(())
}

async fn transport_info(State(info): State<TransportInfo>) -> Json<TransportInfo> {
    Json(info)
}

/// Resolves on SIGINT or, on unix, SIGTERM
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        let mut terminate =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result?,
            _ = terminate.recv() => {}
        }
    }
    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await?;

    Ok(())
}
