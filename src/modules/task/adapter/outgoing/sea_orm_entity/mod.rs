pub mod bids;
pub mod tasks;
