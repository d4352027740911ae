use crate::core::GlassError;

/// Fetch mode of an intercepted request. Only navigations fall back to the
/// offline page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestMode {
    Navigate,
    #[default]
    SameOrigin,
    NoCors,
    Cors,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub mode: RequestMode,
}

impl Request {
    pub fn new(url: impl Into<String>, mode: RequestMode) -> Self {
        Self { url: url.into(), mode }
    }

    /// Plain same-origin GET
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(url, RequestMode::SameOrigin)
    }

    pub fn navigate(url: impl Into<String>) -> Self {
        Self::new(url, RequestMode::Navigate)
    }

    pub fn is_navigation(&self) -> bool {
        self.mode == RequestMode::Navigate
    }
}

/// Response type as the fetch API reports it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    /// Same-origin
    Basic,
    Cors,
    Opaque,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub kind: ResponseKind,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, kind: ResponseKind, body: impl Into<Vec<u8>>) -> Self {
        Self { status, kind, body: body.into() }
    }

    /// 200, same-origin
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, ResponseKind::Basic, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network access. `Err` means the request never produced a response
/// (offline, DNS, CORS failure); HTTP error statuses come back as `Ok`.
pub trait Fetch {
    fn fetch(&mut self, request: &Request) -> Result<Response, GlassError>;
}
