//! Question bank loading
//!
//! The bundled bank is compiled into the binary; `[bank] path` swaps in a
//! JSON file with the same shape.

mod loader;

pub use loader::{BankLoadError, BankLoader};
