//! Email dispatch module.

mod errors;
mod request;
mod service;

pub use errors::SendMailError;
pub use request::SendMailRequest;
pub use service::DispatchService;
