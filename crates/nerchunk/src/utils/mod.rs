pub mod html;
pub mod text;

pub use html::html_escape;
pub use text::{char_len, char_windows, preview};
