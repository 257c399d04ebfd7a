//! Catalog domain types.
//!
//! - [`Image`] - an uploaded product photo record
//! - [`Section`] and its category containers
//! - [`SectionKey`] - the fixed four-section vocabulary
//! - [`ListScope`] - a resolved image-list target within a section

mod image;
mod section;
mod section_key;

pub use image::Image;
pub use section::{
    FlatCategory, GROUP_IMAGE_CAP, ListScope, NestedCategory, ROOT_IMAGE_CAP, Section,
    SectionCategories, TypeGroup,
};
pub use section_key::SectionKey;
