#[path = "../common/mod.rs"]
mod common;

mod recorder_test;
mod tab_resolver_test;
