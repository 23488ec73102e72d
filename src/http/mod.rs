//! HTTP protocol layer module
//!
//! Response builders, content types and `ETag` helpers used by the dev server.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use response::{
    build_304_response, build_404_response, build_405_response, build_api_response,
    build_file_response, build_options_response,
};
