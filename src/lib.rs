pub mod assets;
pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod migration;
pub mod models;
pub mod pagination;
pub mod services;
pub mod state;
pub mod style_code;
pub mod telemetry;
