pub mod malla;
pub mod docs;

pub use malla::*;
pub use docs::*;
