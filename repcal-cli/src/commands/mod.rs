pub mod config;
pub mod expand;
pub mod series;
