//! Abstraction layer: effectful collaborators behind traits.

pub mod console;

pub use console::Console;
