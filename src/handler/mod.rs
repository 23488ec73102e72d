//! Request handler module
//!
//! Dev server dispatch: the playlist API prefix goes to the API router,
//! everything else is served from the static root.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
