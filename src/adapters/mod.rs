// Adapters layer: concrete implementations for external systems (http, files, report output).

pub mod http;
pub mod report;
pub mod source;
pub mod storage;

pub use http::ReqwestFetcher;
pub use source::InputSource;
pub use storage::LocalStorage;
