mod client;
mod error;
mod response;

pub use client::ToxiGuardClient;
pub use error::ApiError;
