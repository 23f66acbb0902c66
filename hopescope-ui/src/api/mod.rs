//! API Module
//!
//! Network access to the HopeScope server.

pub mod client;

pub use client::FetchTransport;
