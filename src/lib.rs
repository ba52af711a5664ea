pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod fleet;
pub mod handlers;
pub mod ingest;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod threshold;
