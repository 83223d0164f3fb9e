pub mod error;
mod mapper;
pub(crate) mod response;
