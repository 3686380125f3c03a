pub mod catalog;
pub mod config;
pub mod coverage;
pub mod optimizer;
pub mod output;
pub mod portfolio;
pub mod server;
