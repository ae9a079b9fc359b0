//! Provider module for Foliochat
//!
//! This module contains the completion provider abstraction and the Together
//! AI implementation used by the chat proxy.

pub mod base;
pub mod together;

pub use base::{CompletionProvider, Message};
pub use together::TogetherProvider;
