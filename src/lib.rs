// Library crate for integration tests.
// main.rs has its own mod declarations; this re-exports all modules.

pub mod cases;
pub mod config;
pub mod error;
pub mod fields;
pub mod forms;
pub mod nav;
pub mod report;
pub mod runner;
pub mod session;
pub mod table;
