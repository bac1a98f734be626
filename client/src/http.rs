//! Plain-data HTTP request and response types.
//!
//! # Design
//! The client never performs I/O. It produces `HttpRequest` values for
//! the host to execute and consumes the `HttpResponse` the host got
//! back. Keeping the round-trip outside the crate makes every build and
//! parse step deterministic and trivially testable. All fields are
//! owned so values can be moved freely between the two halves.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A request described as data, to be executed by the host.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// The host's view of what came back, handed to `parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
