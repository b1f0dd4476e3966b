//! Adapters to the outside world: environment configuration and the SMTP transport.

pub mod email;
