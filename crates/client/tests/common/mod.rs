//! Shared harness for client integration tests.
//!
//! Spins up a stub of the Strapi backend (an axum router speaking the
//! same envelope conventions) on an ephemeral port, so the real
//! [`StrapiClient`] request path — auth injection, query encoding,
//! envelope parsing, error classification — is exercised end to end.

use axum::Router;

use xtrawrkx_client::{ClientConfig, Session, StrapiClient};

/// Serve `router` on an ephemeral local port; returns the base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub backend");
    });
    format!("http://{addr}")
}

/// Build a client pointed at the stub backend.
pub fn client(base_url: &str, session: Session) -> StrapiClient {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
    };
    StrapiClient::with_session(&config, session).expect("build client")
}
