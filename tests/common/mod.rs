// Test utility module for starroster integration tests
#![allow(dead_code)]

use starroster::core::{FetchError, Item, Locator, Page};
use starroster::io::Fetcher;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Fetcher answering from fixed tables and recording every request.
#[derive(Default)]
pub struct ScriptedFetcher {
    pages: HashMap<String, Result<Page, u16>>,
    details: HashMap<String, Result<String, u16>>,
    page_requests: Mutex<Vec<String>>,
    detail_requests: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page whose items point at `<name>-home`.
    pub fn page(self, cursor: &str, names: &[&str], next: Option<&str>) -> Self {
        let items: Vec<_> = names
            .iter()
            .map(|name| (*name, format!("{name}-home")))
            .collect();
        let pairs: Vec<_> = items.iter().map(|(n, h)| (*n, h.as_str())).collect();
        self.page_with_homes(cursor, &pairs, next)
    }

    pub fn page_with_homes(
        mut self,
        cursor: &str,
        people: &[(&str, &str)],
        next: Option<&str>,
    ) -> Self {
        let items = people
            .iter()
            .map(|(name, home)| Item::new(*name, *home))
            .collect();
        self.pages.insert(
            cursor.to_string(),
            Ok(Page::new(items, next.map(Locator::new))),
        );
        self
    }

    pub fn failing_page(mut self, cursor: &str, status: u16) -> Self {
        self.pages.insert(cursor.to_string(), Err(status));
        self
    }

    pub fn detail(mut self, locator: &str, label: &str) -> Self {
        self.details
            .insert(locator.to_string(), Ok(label.to_string()));
        self
    }

    pub fn failing_detail(mut self, locator: &str, status: u16) -> Self {
        self.details.insert(locator.to_string(), Err(status));
        self
    }

    pub fn page_requests(&self) -> Vec<String> {
        self.page_requests.lock().unwrap().clone()
    }

    pub fn detail_requests(&self) -> usize {
        self.detail_requests.load(Ordering::SeqCst)
    }
}

impl Fetcher for ScriptedFetcher {
    async fn fetch_page(&self, cursor: &Locator) -> Result<Page, FetchError> {
        self.page_requests
            .lock()
            .unwrap()
            .push(cursor.as_str().to_string());
        match self.pages.get(cursor.as_str()) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(status)) => Err(FetchError::status(cursor.clone(), *status)),
            None => Err(FetchError::status(cursor.clone(), 404)),
        }
    }

    async fn fetch_detail(&self, locator: &Locator) -> Result<String, FetchError> {
        self.detail_requests.fetch_add(1, Ordering::SeqCst);
        match self.details.get(locator.as_str()) {
            Some(Ok(label)) => Ok(label.clone()),
            Some(Err(status)) => Err(FetchError::status(locator.clone(), *status)),
            None => Err(FetchError::status(locator.clone(), 404)),
        }
    }
}

/// A canned HTTP response keyed by request path (including query).
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(path: &str, body: &str) -> Self {
        Self {
            path: path.to_string(),
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(path: &str, status: u16) -> Self {
        Self {
            path: path.to_string(),
            status,
            body: String::new(),
        }
    }
}

/// Serve `routes` on an ephemeral local port; returns `http://127.0.0.1:<port>`.
///
/// Unknown paths answer 404. Every response closes its connection.
pub async fn serve(routes: Vec<Route>) -> String {
    serve_with(move |_| routes).await
}

/// Like [`serve`], for routes whose bodies link back to the server itself.
pub async fn serve_with(routes: impl FnOnce(&str) -> Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let routes = routes(&base);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let path = read_request_path(&mut socket).await;
                let (status, body) = routes
                    .iter()
                    .find(|route| Some(route.path.as_str()) == path.as_deref())
                    .map(|route| (route.status, route.body.clone()))
                    .unwrap_or((404, String::new()));
                let response = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    base
}

async fn read_request_path(socket: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let request = String::from_utf8_lossy(&buf);
    request
        .lines()
        .next()?
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
}
