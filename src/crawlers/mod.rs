pub mod crawler;
pub mod http;
pub mod web;

pub use crawler::{FetchResponse, Fetcher};
pub use http::HttpFetcher;
pub use web::WebDriverFetcher;
