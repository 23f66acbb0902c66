//! Page behaviors
//!
//! Each module binds one behavior to the server-rendered markup.

pub mod chart;
pub mod chat;
pub mod flash;
pub mod nav;
pub mod reveal;

pub use chat::DomChatView;
