//! In-process mock backend for async tests.

use axum::Router;
use reqwest::Client;
use tokio::{net::TcpListener, task::JoinHandle};
use url::Url;

use crate::{api::ToxiGuardClient, config::ApiConfig};

pub struct MockBackend {
    pub base_url: Url,
    handle: JoinHandle<()>,
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn spawn_backend(router: Router) -> MockBackend {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    MockBackend {
        base_url: Url::parse(&format!("http://{addr}")).unwrap(),
        handle,
    }
}

/// A loopback URL nothing is listening on.
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}

pub fn client_for(base_url: Option<Url>) -> ToxiGuardClient {
    ToxiGuardClient::new(
        Client::new(),
        ApiConfig {
            base_url,
            request_timeout: None,
        },
    )
}
