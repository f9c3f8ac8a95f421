// src/engine/mod.rs
pub mod backend;
pub mod catalog;
pub mod command;
pub mod config;
pub mod scaffold;
