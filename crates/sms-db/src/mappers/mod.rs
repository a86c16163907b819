//! Entity ↔ model mappers

mod group;
mod member;
mod message;
mod template;
