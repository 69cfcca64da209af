pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod model;
pub mod output;
pub mod rank;
pub mod score;
pub mod util;
