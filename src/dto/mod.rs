//! View payloads assembled by the service layer.

pub mod main;
