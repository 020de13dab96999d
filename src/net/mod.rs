pub mod client;
pub mod worker;

pub use client::{ApiClient, ApiError};
pub use worker::{NetEvent, NetRequest, Worker};
