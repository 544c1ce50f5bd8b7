#![doc = include_str!("../README.md")]

pub mod builder;
mod cache;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::{CacheHandle, CacheMiddleware, CachingConnector};
