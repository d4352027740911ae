//! Offline asset cache: the precache/activate/respond strategy a service
//! worker runs for the page, with network access behind [`Fetch`].

mod cache;
mod http;

pub use cache::{OfflineCache, CACHE_NAME, OFFLINE_PAGE, PRECACHE_URLS};
pub use http::{Fetch, Request, RequestMode, Response, ResponseKind};
