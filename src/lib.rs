pub mod args;
pub mod error;
pub mod model;
pub mod processor;
pub mod report;
pub mod results;
pub mod utils;
