pub mod config;
pub mod controllers;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod telemetry;
pub mod views;
