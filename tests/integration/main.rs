#[path = "../common/mod.rs"]
mod common;

mod plugin_tests;
