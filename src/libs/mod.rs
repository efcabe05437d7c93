pub mod config;
pub mod data_storage;
pub mod export;
pub mod ledger;
pub mod messages;
pub mod schedule;
pub mod statistics;
pub mod tracker;
pub mod view;
pub mod visibility;
pub mod weekday;
