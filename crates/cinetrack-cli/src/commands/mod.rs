pub mod browse;
pub mod clear;
pub mod config;
pub mod lists;
pub mod movie;
