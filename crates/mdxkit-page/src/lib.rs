//! Frontmatter handling and placeholder page templates.
//!
//! Documents carry a leading `---`-delimited YAML frontmatter block followed
//! by body content. This crate splits and reassembles that three-part
//! structure byte-precisely, reads the fields the maintenance tools care
//! about, splices field updates into the block without disturbing the rest,
//! and renders the placeholder template used to fill empty pages.

mod frontmatter;
mod template;

pub use frontmatter::{
    Frontmatter, FrontmatterError, assemble, set_field, split, version_from_path,
};
pub use template::{LAST_UPDATED_PLACEHOLDER, normalize_title, render_page};
