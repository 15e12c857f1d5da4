pub mod config;
pub mod constants;
pub mod join;
pub mod penalty;
pub mod plot;
pub mod rating_model;
pub mod structures;
pub mod timeline_engine;
