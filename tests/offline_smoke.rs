use std::collections::HashMap;

use glassbreak_engine::offline::{Fetch, OfflineCache, Request, Response, CACHE_NAME, PRECACHE_URLS};
use glassbreak_engine::GlassError;

struct Site {
    pages: HashMap<String, Response>,
    up: bool,
}

impl Fetch for Site {
    fn fetch(&mut self, request: &Request) -> Result<Response, GlassError> {
        if !self.up {
            return Err(GlassError::Network {
                url: request.url.clone(),
                reason: "offline".into(),
            });
        }
        Ok(self
            .pages
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Response::new(404, glassbreak_engine::offline::ResponseKind::Basic, "")))
    }
}

#[test]
fn offline_smoke_install_then_lose_network() {
    let mut site = Site {
        pages: PRECACHE_URLS
            .iter()
            .map(|url| (url.to_string(), Response::ok(format!("body of {}", url))))
            .collect(),
        up: true,
    };

    let mut cache = OfflineCache::default();
    cache.install(&mut site).unwrap();
    assert!(cache.activate(&[CACHE_NAME, "glass-break-v0"]) == vec!["glass-break-v0"]);

    site.up = false;
    let wasm = cache.respond(&Request::get("./pkg/glassbreak_engine_bg.wasm"), &mut site).unwrap();
    assert_eq!(wasm.status, 200);

    let page = cache.respond(&Request::navigate("./about"), &mut site).unwrap();
    assert_eq!(page.body, b"body of ./index.html".to_vec());
    assert!(cache.respond(&Request::get("./about.png"), &mut site).is_none());
}
