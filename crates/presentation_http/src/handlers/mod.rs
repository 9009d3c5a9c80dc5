//! HTTP request handlers

pub mod chat;
pub mod message;
pub mod question;
pub mod root;
