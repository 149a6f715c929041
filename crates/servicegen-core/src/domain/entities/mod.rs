//! Domain entities

pub mod layout;
pub mod meta;
pub mod service;
pub mod template;
