use std::collections::HashMap;

use crate::core::GlassError;

use super::http::{Fetch, Request, Response, ResponseKind};

/// Bumped whenever the precached assets change
pub const CACHE_NAME: &str = "glass-break-v1";

/// Everything needed to run the page with no network
pub const PRECACHE_URLS: [&str; 6] = [
    "./",
    "./index.html",
    "./styles.css",
    "./pkg/glassbreak_engine.js",
    "./pkg/glassbreak_engine_bg.wasm",
    "./manifest.json",
];

/// Served to failed navigations
pub const OFFLINE_PAGE: &str = "./index.html";

const UNCACHEABLE_SCHEME: &str = "chrome-extension://";

/// One named cache of URL -> response
#[derive(Debug)]
pub struct OfflineCache {
    name: String,
    entries: HashMap<String, Response>,
}

impl Default for OfflineCache {
    fn default() -> Self {
        Self::new(CACHE_NAME)
    }
}

impl OfflineCache {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, url: &str) -> Option<&Response> {
        self.entries.get(url)
    }

    pub fn put(&mut self, url: impl Into<String>, response: Response) {
        self.entries.insert(url.into(), response);
    }

    /// Precache [`PRECACHE_URLS`]. Either every asset is stored or, on the
    /// first failure, nothing is.
    pub fn install<F: Fetch>(&mut self, fetcher: &mut F) -> Result<(), GlassError> {
        self.install_urls(&PRECACHE_URLS, fetcher)
    }

    pub fn install_urls<F: Fetch>(&mut self, urls: &[&str], fetcher: &mut F) -> Result<(), GlassError> {
        let mut staged = Vec::with_capacity(urls.len());
        for url in urls {
            let response = fetcher.fetch(&Request::get(*url))?;
            if !response.is_success() {
                return Err(GlassError::Network {
                    url: url.to_string(),
                    reason: format!("status {}", response.status),
                });
            }
            staged.push((url.to_string(), response));
        }

        self.entries.extend(staged);
        log::info!("cache {} installed with {} assets", self.name, urls.len());
        Ok(())
    }

    /// Names of caches left over from earlier versions, to be deleted
    pub fn activate<'a>(&self, existing: &[&'a str]) -> Vec<&'a str> {
        let stale: Vec<&str> = existing
            .iter()
            .copied()
            .filter(|name| *name != self.name)
            .collect();
        if !stale.is_empty() {
            log::info!("dropping stale caches: {:?}", stale);
        }
        stale
    }

    /// Cache first, then network. Fresh same-origin 200s are stored on the
    /// way through. When the network fails, navigations get the offline
    /// page and everything else gets nothing.
    pub fn respond<F: Fetch>(&mut self, request: &Request, fetcher: &mut F) -> Option<Response> {
        if let Some(hit) = self.entries.get(&request.url) {
            return Some(hit.clone());
        }

        match fetcher.fetch(request) {
            Ok(response) => {
                if Self::cacheable(request, &response) {
                    self.entries.insert(request.url.clone(), response.clone());
                }
                Some(response)
            }
            Err(err) => {
                log::warn!("{}", err);
                if request.is_navigation() {
                    self.entries.get(OFFLINE_PAGE).cloned()
                } else {
                    None
                }
            }
        }
    }

    fn cacheable(request: &Request, response: &Response) -> bool {
        response.status == 200
            && response.kind == ResponseKind::Basic
            && !request.url.starts_with(UNCACHEABLE_SCHEME)
    }
}
