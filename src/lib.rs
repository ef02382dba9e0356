//! food_tracker - Query pipeline and HTTP API over the San Francisco
//! mobile food facility permit dataset

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod source;
pub mod tracker;
