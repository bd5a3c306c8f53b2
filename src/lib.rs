// lib.rs
// Library modules for the mesa lineup-prediction game

pub mod defs;
pub mod logging;
pub mod config;
pub mod roster;
pub mod catalog;
pub mod board;
pub mod randomizer;
pub mod claim;
pub mod history;
pub mod evaluator;
pub mod loader;
pub mod session;
