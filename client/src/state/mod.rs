//! Session seams backed by reactive state and host page elements.

pub mod chat;
#[cfg(feature = "csr")]
pub mod input;
