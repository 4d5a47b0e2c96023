// icongen - lib.rs
//
// Library entry point, exposing the content generator and emitter for
// integration testing.

pub mod app;
pub mod core;
pub mod util;
