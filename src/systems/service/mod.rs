mod http;

pub use http::{HttpSearchService, ServiceSettings};
