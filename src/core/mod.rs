// icongen - core/mod.rs
//
// Core layer: pure content construction, no I/O.

pub mod svg;
