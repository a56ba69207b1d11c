pub mod api;
pub mod logging;

pub use api::ApiSubmitter;
pub use logging::LoggingSubmitter;
