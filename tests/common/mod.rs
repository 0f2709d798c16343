//! Shared utilities for integration testing.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use tempfile::TempDir;
use tokio::net::TcpListener;

use docsite::config::SiteConfig;
use docsite::http::HttpServer;
use docsite::theme::ThemeMode;

/// A config suitable for tests: fixed theme, metrics off, content in `root`.
pub fn test_config(root: &Path, theme: ThemeMode) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.content.root = root.to_path_buf();
    config.theme.mode = theme;
    config.observability.metrics_enabled = false;
    config
}

/// Write a page body under `root/<locale>/<file>`.
pub fn write_page(root: &Path, locale: &str, file: &str, body: &str) {
    let path = root.join(locale).join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

/// A content directory with pages for both default locales.
pub fn seeded_content() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_page(dir.path(), "zh", "index.html", "<p>首页</p>");
    write_page(dir.path(), "zh", "docs/getting-started.html", "<p>入门</p>");
    write_page(dir.path(), "en", "docs/getting-started.html", "<p>Getting started</p>");
    dir
}

/// Boot the site on an ephemeral port and return its address.
pub async fn start_site(config: SiteConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}

/// HTTP client that does not follow redirects, so 3xx responses are
/// observable.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
