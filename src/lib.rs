pub mod api_client;
pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod generator;
pub mod models;
pub mod parsers;
pub mod prompts;
