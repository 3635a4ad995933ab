/// HTTP handlers for the marketing-site endpoints
///
/// - Channels: public channel showcase listing
/// - Demo: demo-request form submission
/// - Diagnostics: root health probe and database connectivity report
/// - Schemas: record-shape catalog for the external database viewer
pub mod channels;
pub mod demo;
pub mod diagnostics;
pub mod schemas;

// Re-export handler functions at module level
pub use channels::list_channels;
pub use demo::request_demo;
pub use diagnostics::{read_root, test_database};
pub use schemas::list_schemas;
