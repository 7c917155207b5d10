//! Catalog data - the read-only lists the wizard offers.
//!
//! - `AiTarget` - products a prompt can be optimised for
//! - `TextCategory`, `Tone`, `LengthFormat` - text wizard choices
//! - `ImageType`, `ImageStyle` - image wizard choices
//! - `ContentLibrary` - templates, examples and course modules

mod macros;

mod ai_target;
mod choices;
mod image_type;
mod library;
mod text_category;

pub use ai_target::AiTarget;
pub use choices::{ImageStyle, LengthFormat, Tone};
pub use image_type::ImageType;
pub use library::{ContentLibrary, CourseModule, Example, LibraryError, Template, TemplateFilter};
pub use text_category::TextCategory;
