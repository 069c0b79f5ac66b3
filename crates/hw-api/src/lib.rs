mod error;
pub use error::ApiError;

mod http;
pub use http::HttpApi;
