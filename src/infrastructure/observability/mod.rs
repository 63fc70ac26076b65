mod init_tracing;
mod request_id;
mod text_sanitizer;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware, resolve_request_id};
pub use text_sanitizer::{MAX_VISIBLE_CHARS, sanitize_text};
pub use tracing_config::TracingConfig;
