pub mod alpha;
pub mod build;
pub mod colored;
pub mod direction;
pub mod gradient;
pub mod misc;
pub mod surface;
mod value;

// Re-export main types
pub use alpha::{generate_white_black_opacity_classes, Tone, WhiteBlackClasses};
pub use build::{build, generate_css, generate_stylesheet, ClassTables, GenerateError};
pub use colored::{generate_colored_classes, ColoredClasses};
pub use direction::generate_directional_gradients;
pub use gradient::{generate_gradient_classes, generate_percentage_utilities};
pub use misc::{generate_background_image_reset, generate_misc_classes, generate_transparent_classes};
pub use surface::{generate_border_classes, generate_surface_classes, generate_text_classes};
