// icongen - app/mod.rs
//
// Application layer: output-path resolution and icon emission.

pub mod emit;
