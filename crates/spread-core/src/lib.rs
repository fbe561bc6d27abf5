pub mod config;
pub mod logging;

pub mod error;
pub mod export;
pub mod items;
pub mod mapping;
pub mod pipeline;
pub mod resolver;
pub mod tier;
