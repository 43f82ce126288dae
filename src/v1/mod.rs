pub mod azure;
pub mod config;
pub mod manager;
pub mod resource;
pub mod solutions;
