pub mod components;
pub mod markup;
pub mod motion;
pub mod page;
pub mod style;

pub use page::{render_page, Page};
pub use style::stylesheet;
