pub mod request_id;
pub mod request_body_log;
pub mod response_log;
