//! Domain logic: what gets sent, to whom, and with which attachment.

pub mod communication;
