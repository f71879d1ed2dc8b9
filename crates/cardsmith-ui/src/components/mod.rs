//! Reusable form components for the card editor.

mod button;
mod input;
mod section;
mod segmented;

pub use button::*;
pub use input::*;
pub use section::*;
pub use segmented::*;
