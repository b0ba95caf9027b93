pub mod dataset;
pub mod migrate;
pub mod verify;
