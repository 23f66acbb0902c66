//! State Management
//!
//! Client-side persistence for page state.

pub mod storage;

pub use storage::LocalStore;
