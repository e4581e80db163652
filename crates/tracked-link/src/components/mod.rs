mod link;
mod section;

pub use link::{Link, LinkElement, LinkParts};
pub use section::Section;
