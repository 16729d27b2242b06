// src/system/mod.rs

// Everything that touches the OS directly: process table, signals,
// filesystem queries.

pub mod fs_view;
pub mod process;
pub mod shutdown;
