pub mod panic;
pub mod request_tracking;

pub use panic::handle_panic;
pub use request_tracking::{REQUEST_ID_HEADER, extract_request_id, request_tracking_middleware};
