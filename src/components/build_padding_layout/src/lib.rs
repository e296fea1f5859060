mod builder;
mod check;
mod padding_layout;

pub use builder::PaddingLayoutBuilder;
pub use check::check_padding;
pub use padding_layout::{PaddingKind, PaddingLayout, PaddingLocation};
