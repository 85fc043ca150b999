pub mod tablero;
pub mod docs;

pub use tablero::*;
pub use docs::*;
