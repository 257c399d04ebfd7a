//! The four-section catalog and its persisted snapshot form.
//!
//! The catalog owns exactly four sections for the lifetime of the
//! process. Category and clothing-type vocabularies are fixed at startup;
//! nothing creates new ones at runtime. The persisted document is the
//! catalog itself, keyed `main`/`women`/`men`/`kids`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Image, ListScope, Section, SectionKey};

/// Clothing-type skeleton shared by every main-section category.
const MAIN_TYPES: &[(&str, &str)] = &[
    ("t-shirts", "T-shirts"),
    ("dresses", "Dresses"),
    ("crop-tops", "Crop Tops"),
    ("pants", "Pants"),
    ("jeans", "Jeans"),
    ("skirts", "Skirts"),
    ("shorts", "Shorts"),
    ("caps", "Caps"),
];

/// Errors from catalog mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The image id is not present in the resolved list or the section
    /// root list.
    #[error("Image not found")]
    ImageNotFound,
}

/// The full in-memory catalog: four fixed sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub main: Section,
    pub women: Section,
    pub men: Section,
    pub kids: Section,
}

/// Partial persisted form of the catalog.
///
/// Loading replaces each section wholesale when its key is present in
/// the document and keeps the built-in default otherwise, so a document
/// written by an older deployment with fewer sections still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub women: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub men: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids: Option<Section>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Catalog {
    /// Build the startup skeleton: empty image lists, fixed category and
    /// clothing-type vocabularies.
    #[must_use]
    pub fn with_defaults() -> Self {
        let main = Section::nested(
            "Home Page",
            "Main page collection",
            &[
                ("featured", "Featured"),
                ("trending", "Trending"),
                ("sale", "Sale"),
            ],
            MAIN_TYPES,
        );

        let women = Section::flat(
            "Women's Collection",
            "Discover the latest trends in women's fashion",
            "/women",
            &[
                ("crop-tops", "Crop Tops"),
                ("t-shirts", "T-shirts"),
                ("dresses", "Dresses"),
                ("jeans", "Jeans"),
                ("skirts", "Skirts"),
                ("ethical-clothing", "Ethical Clothing"),
            ],
        );

        let men = Section::flat(
            "Men's Collection",
            "Modern fashion for the contemporary man",
            "/men",
            &[
                ("t-shirts", "T-shirts"),
                ("shirts", "Shirts"),
                ("jeans", "Jeans"),
                ("pants", "Pants"),
                ("caps", "Caps"),
            ],
        );

        let kids = Section::flat(
            "Kids' Collection",
            "Adorable outfits for your little ones",
            "/kids",
            &[
                ("t-shirts", "T-shirts"),
                ("tops", "Tops"),
                ("pants", "Pants"),
                ("shorts", "Shorts"),
                ("dresses", "Dresses"),
                ("caps", "Caps"),
            ],
        );

        Self {
            main,
            women,
            men,
            kids,
        }
    }

    /// Build a catalog from a persisted snapshot, falling back to the
    /// default skeleton for any section the snapshot does not carry.
    #[must_use]
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let defaults = Self::with_defaults();
        Self {
            main: snapshot.main.unwrap_or(defaults.main),
            women: snapshot.women.unwrap_or(defaults.women),
            men: snapshot.men.unwrap_or(defaults.men),
            kids: snapshot.kids.unwrap_or(defaults.kids),
        }
    }

    #[must_use]
    pub fn section(&self, key: SectionKey) -> &Section {
        match key {
            SectionKey::Main => &self.main,
            SectionKey::Women => &self.women,
            SectionKey::Men => &self.men,
            SectionKey::Kids => &self.kids,
        }
    }

    pub fn section_mut(&mut self, key: SectionKey) -> &mut Section {
        match key {
            SectionKey::Main => &mut self.main,
            SectionKey::Women => &mut self.women,
            SectionKey::Men => &mut self.men,
            SectionKey::Kids => &mut self.kids,
        }
    }

    /// Append an image to the resolved list of a section.
    ///
    /// Returns the scope the image landed in.
    pub fn append_image(
        &mut self,
        key: SectionKey,
        category: Option<&str>,
        clothing_type: Option<&str>,
        image: Image,
    ) -> ListScope {
        self.section_mut(key)
            .append_image(category, clothing_type, image)
    }

    /// Partially update an image's name/price.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ImageNotFound`] if the id is not in the
    /// resolved list or the section root list.
    pub fn update_image(
        &mut self,
        key: SectionKey,
        category: Option<&str>,
        clothing_type: Option<&str>,
        id: &str,
        name: Option<&str>,
        price: Option<&str>,
    ) -> Result<Image, CatalogError> {
        self.section_mut(key)
            .update_image(category, clothing_type, id, name, price)
            .ok_or(CatalogError::ImageNotFound)
    }

    /// Remove an image, returning the removed record so the caller can
    /// delete the backing file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ImageNotFound`] if the id is not in the
    /// resolved list or the section root list.
    pub fn remove_image(
        &mut self,
        key: SectionKey,
        category: Option<&str>,
        clothing_type: Option<&str>,
        id: &str,
    ) -> Result<Image, CatalogError> {
        self.section_mut(key)
            .remove_image(category, clothing_type, id)
            .ok_or(CatalogError::ImageNotFound)
    }

    /// Partially update a section's title/description and return the
    /// updated section.
    pub fn rename_section(
        &mut self,
        key: SectionKey,
        title: Option<&str>,
        description: Option<&str>,
    ) -> &Section {
        let section = self.section_mut(key);
        section.rename(title, description);
        self.section(key)
    }
}
