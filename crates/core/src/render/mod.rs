//! Console and HTML presentation of grid state

pub mod console;
pub mod html;

pub use console::{render_console, ConsoleView};
pub use html::{render_html, HtmlReport};
