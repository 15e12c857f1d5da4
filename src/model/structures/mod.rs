pub mod match_event;
pub mod options;
pub mod rating;
pub mod snapshot;
