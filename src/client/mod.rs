pub mod http;
pub mod source;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpPortfolioSource;
pub use source::PortfolioSource;
