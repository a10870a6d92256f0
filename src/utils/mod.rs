pub mod text;

pub use text::{format_updated, language_color, title_from_name};
