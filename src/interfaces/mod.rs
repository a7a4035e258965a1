// HTTP routes and response envelopes
pub mod http;
