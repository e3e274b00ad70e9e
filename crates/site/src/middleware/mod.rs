//! Request middleware: security headers, rate limiting, page-view recording.

pub mod page_view;
pub mod rate_limit;
pub mod security_headers;

pub use page_view::page_view_middleware;
pub use rate_limit::inquiry_rate_limiter;
pub use security_headers::security_headers_middleware;
