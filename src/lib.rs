// src/lib.rs

//! Internal library for stackforge – not published on crates.io

pub mod app_controller;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    catalog::{CATALOG, DependencyEntry, normalize_selection},
    config::{PackageManager, ScaffoldConfig, ScaffoldConfigBuilder},
    scaffold::DestinationExists,
};
