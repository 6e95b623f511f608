pub mod audit;
pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod logging;
pub mod migration;
pub mod models;
pub mod services;
pub mod state;
