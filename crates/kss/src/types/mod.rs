//! Core types for colors, lengths, and computed styles.

pub mod color;
pub mod computed;
pub mod length;

mod named;

pub use color::{Color, ColorParseError, Hsl, Oklch};
pub use computed::{ComputedStyle, ROOT_FONT_SIZE};
pub use length::{Length, LineHeight, Unit};
