//! Editor components.

mod card_preview;
pub mod images;
mod nav_header;
mod sections;

pub use card_preview::CardPreview;
pub use images::{ImageAspect, ImageUpload};
pub use nav_header::NavHeader;
pub use sections::{InstitutionSection, ReverseSection, StudentSection};
