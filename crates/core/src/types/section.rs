//! Section tree: categories, clothing types, and capped image lists.
//!
//! A section is a tree of depth 1-2: root images, category images, and -
//! for the main section only - clothing-type images under each category.
//! The shape difference is a tagged variant ([`SectionCategories`]) rather
//! than an optional field, so resolution dispatches on the tag.
//!
//! # List resolution
//!
//! All mutations share one resolution cascade ([`Section::resolve_scope`]):
//!
//! 1. nested section + category + type, both resolvable -> that type's list
//! 2. category given and present -> that category's list
//! 3. otherwise -> the section root list
//!
//! Unknown category or type names never error - they fall through to the
//! next broader scope. The frontend sends whatever hints it has and relies
//! on this leniency.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Image;

/// Maximum retained images in a section root list.
pub const ROOT_IMAGE_CAP: usize = 6;

/// Maximum retained images in a category or clothing-type list.
pub const GROUP_IMAGE_CAP: usize = 10;

/// A clothing-type grouping under a main-section category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeGroup {
    /// Display name (e.g. "T-shirts").
    pub name: String,
    pub images: Vec<Image>,
}

/// A category in the main section, which carries a clothing-type level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedCategory {
    pub name: String,
    pub images: Vec<Image>,
    pub types: BTreeMap<String, TypeGroup>,
}

/// A category in the women/men/kids sections: a flat image list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatCategory {
    pub name: String,
    pub images: Vec<Image>,
}

/// The category map of a section, tagged by shape.
///
/// Serialized untagged so the wire form stays a plain name -> category
/// object map. `Nested` is tried first on deserialization; its required
/// `types` field disambiguates it from `Flat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionCategories {
    Nested(BTreeMap<String, NestedCategory>),
    Flat(BTreeMap<String, FlatCategory>),
}

/// A top-level storefront section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub images: Vec<Image>,
    #[serde(
        rename = "exploreLink",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub explore_link: Option<String>,
    pub categories: SectionCategories,
}

/// A resolved image-list target within a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScope {
    /// The section root list (cap 6).
    Root,
    /// A category list (cap 10).
    Category(String),
    /// A clothing-type list under a main-section category (cap 10).
    Type {
        category: String,
        clothing_type: String,
    },
}

impl ListScope {
    /// The retention cap for this list.
    #[must_use]
    pub const fn cap(&self) -> usize {
        match self {
            Self::Root => ROOT_IMAGE_CAP,
            Self::Category(_) | Self::Type { .. } => GROUP_IMAGE_CAP,
        }
    }
}

/// Treat absent and empty-string parameters the same way: HTML forms
/// send empty strings for fields the user left blank.
fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Section {
    /// Create a flat section (women/men/kids shape).
    #[must_use]
    pub fn flat(
        title: &str,
        description: &str,
        explore_link: &str,
        categories: &[(&str, &str)],
    ) -> Self {
        let categories = categories
            .iter()
            .map(|(key, name)| {
                (
                    (*key).to_string(),
                    FlatCategory {
                        name: (*name).to_string(),
                        images: Vec::new(),
                    },
                )
            })
            .collect();

        Self {
            title: title.to_string(),
            description: description.to_string(),
            images: Vec::new(),
            explore_link: Some(explore_link.to_string()),
            categories: SectionCategories::Flat(categories),
        }
    }

    /// Create a nested section (main shape) where every category carries
    /// the same clothing-type skeleton.
    #[must_use]
    pub fn nested(
        title: &str,
        description: &str,
        categories: &[(&str, &str)],
        types: &[(&str, &str)],
    ) -> Self {
        let categories = categories
            .iter()
            .map(|(key, name)| {
                let types = types
                    .iter()
                    .map(|(type_key, type_name)| {
                        (
                            (*type_key).to_string(),
                            TypeGroup {
                                name: (*type_name).to_string(),
                                images: Vec::new(),
                            },
                        )
                    })
                    .collect();
                (
                    (*key).to_string(),
                    NestedCategory {
                        name: (*name).to_string(),
                        images: Vec::new(),
                        types,
                    },
                )
            })
            .collect();

        Self {
            title: title.to_string(),
            description: description.to_string(),
            images: Vec::new(),
            explore_link: None,
            categories: SectionCategories::Nested(categories),
        }
    }

    /// Resolve the target image list for a category/type hint.
    ///
    /// This is the single cascade shared by append, update, and remove.
    /// Empty strings count as absent. Unknown names fall through to the
    /// next broader scope instead of erroring.
    #[must_use]
    pub fn resolve_scope(
        &self,
        category: Option<&str>,
        clothing_type: Option<&str>,
    ) -> ListScope {
        let category = provided(category);
        let clothing_type = provided(clothing_type);

        match &self.categories {
            SectionCategories::Nested(map) => {
                if let (Some(cat), Some(ty)) = (category, clothing_type)
                    && map.get(cat).is_some_and(|c| c.types.contains_key(ty))
                {
                    return ListScope::Type {
                        category: cat.to_string(),
                        clothing_type: ty.to_string(),
                    };
                }
                if let Some(cat) = category
                    && map.contains_key(cat)
                {
                    return ListScope::Category(cat.to_string());
                }
                ListScope::Root
            }
            SectionCategories::Flat(map) => {
                if let Some(cat) = category
                    && map.contains_key(cat)
                {
                    return ListScope::Category(cat.to_string());
                }
                ListScope::Root
            }
        }
    }

    /// The image list for a resolved scope.
    ///
    /// A scope that no longer matches the tree (which cannot happen for
    /// scopes produced by [`Self::resolve_scope`] on the same section)
    /// reads the root list.
    #[must_use]
    pub fn list(&self, scope: &ListScope) -> &Vec<Image> {
        match scope {
            ListScope::Root => &self.images,
            ListScope::Category(cat) => match &self.categories {
                SectionCategories::Nested(map) => {
                    if let Some(category) = map.get(cat) {
                        &category.images
                    } else {
                        &self.images
                    }
                }
                SectionCategories::Flat(map) => {
                    if let Some(category) = map.get(cat) {
                        &category.images
                    } else {
                        &self.images
                    }
                }
            },
            ListScope::Type {
                category,
                clothing_type,
            } => match &self.categories {
                SectionCategories::Nested(map) => {
                    if let Some(group) = map.get(category).and_then(|c| c.types.get(clothing_type))
                    {
                        &group.images
                    } else {
                        &self.images
                    }
                }
                SectionCategories::Flat(_) => &self.images,
            },
        }
    }

    /// Mutable counterpart of [`Self::list`].
    pub fn list_mut(&mut self, scope: &ListScope) -> &mut Vec<Image> {
        match scope {
            ListScope::Root => &mut self.images,
            ListScope::Category(cat) => match &mut self.categories {
                SectionCategories::Nested(map) => {
                    if let Some(category) = map.get_mut(cat) {
                        &mut category.images
                    } else {
                        &mut self.images
                    }
                }
                SectionCategories::Flat(map) => {
                    if let Some(category) = map.get_mut(cat) {
                        &mut category.images
                    } else {
                        &mut self.images
                    }
                }
            },
            ListScope::Type {
                category,
                clothing_type,
            } => match &mut self.categories {
                SectionCategories::Nested(map) => {
                    if let Some(group) = map
                        .get_mut(category)
                        .and_then(|c| c.types.get_mut(clothing_type))
                    {
                        &mut group.images
                    } else {
                        &mut self.images
                    }
                }
                SectionCategories::Flat(_) => &mut self.images,
            },
        }
    }

    /// Append an image to the resolved list, evicting the oldest entries
    /// past the cap (6 for root, 10 for category/type lists). Insertion
    /// order is preserved among survivors.
    ///
    /// Returns the scope the image landed in.
    pub fn append_image(
        &mut self,
        category: Option<&str>,
        clothing_type: Option<&str>,
        image: Image,
    ) -> ListScope {
        let scope = self.resolve_scope(category, clothing_type);
        let cap = scope.cap();
        let images = self.list_mut(&scope);
        images.push(image);
        if images.len() > cap {
            let excess = images.len() - cap;
            images.drain(..excess);
        }
        scope
    }

    /// Find which list contains `id`, starting from the resolved scope.
    ///
    /// An id missing from a narrower list may still live in the section
    /// root: the frontend sends category hints it cannot verify, so the
    /// lookup falls back to root before reporting not-found.
    #[must_use]
    pub fn locate_image(
        &self,
        category: Option<&str>,
        clothing_type: Option<&str>,
        id: &str,
    ) -> Option<ListScope> {
        let scope = self.resolve_scope(category, clothing_type);
        if self.list(&scope).iter().any(|img| img.id == id) {
            return Some(scope);
        }
        if scope != ListScope::Root && self.images.iter().any(|img| img.id == id) {
            return Some(ListScope::Root);
        }
        None
    }

    /// Partially update an image's display fields.
    ///
    /// Only non-empty provided fields are applied; anything else is left
    /// untouched. Returns the updated image, or `None` if `id` is not in
    /// the resolved list or the root list.
    pub fn update_image(
        &mut self,
        category: Option<&str>,
        clothing_type: Option<&str>,
        id: &str,
        name: Option<&str>,
        price: Option<&str>,
    ) -> Option<Image> {
        let scope = self.locate_image(category, clothing_type, id)?;
        let images = self.list_mut(&scope);
        let image = images.iter_mut().find(|img| img.id == id)?;
        if let Some(name) = provided(name) {
            image.name = name.to_string();
        }
        if let Some(price) = provided(price) {
            image.price = price.to_string();
        }
        Some(image.clone())
    }

    /// Remove an image, preserving the order of the remaining entries.
    ///
    /// Returns the removed record (the caller owns deleting the backing
    /// file), or `None` if `id` is not in the resolved list or the root
    /// list.
    pub fn remove_image(
        &mut self,
        category: Option<&str>,
        clothing_type: Option<&str>,
        id: &str,
    ) -> Option<Image> {
        let scope = self.locate_image(category, clothing_type, id)?;
        let images = self.list_mut(&scope);
        let index = images.iter().position(|img| img.id == id)?;
        Some(images.remove(index))
    }

    /// Partially update the section title and description. Empty strings
    /// are ignored; no content validation.
    pub fn rename(&mut self, title: Option<&str>, description: Option<&str>) {
        if let Some(title) = provided(title) {
            self.title = title.to_string();
        }
        if let Some(description) = provided(description) {
            self.description = description.to_string();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn image(id: &str) -> Image {
        Image {
            id: id.to_string(),
            filename: format!("women-{id}-1.jpg"),
            url: format!("http://localhost:5000/uploads/women-{id}-1.jpg"),
            name: format!("Product {id}"),
            price: "$49.99".to_string(),
            uploaded_at: Utc::now(),
        }
    }

    fn women() -> Section {
        Section::flat(
            "Women's Collection",
            "Discover the latest trends in women's fashion",
            "/women",
            &[("jeans", "Jeans"), ("dresses", "Dresses")],
        )
    }

    fn main_section() -> Section {
        Section::nested(
            "Home Page",
            "Main page collection",
            &[("featured", "Featured"), ("sale", "Sale")],
            &[("t-shirts", "T-shirts"), ("caps", "Caps")],
        )
    }

    fn ids(list: &[Image]) -> Vec<&str> {
        list.iter().map(|img| img.id.as_str()).collect()
    }

    // ------------------------------------------------------------------
    // Resolution cascade
    // ------------------------------------------------------------------

    #[test]
    fn test_resolve_nested_type() {
        let section = main_section();
        let scope = section.resolve_scope(Some("featured"), Some("t-shirts"));
        assert_eq!(
            scope,
            ListScope::Type {
                category: "featured".to_string(),
                clothing_type: "t-shirts".to_string(),
            }
        );
        assert_eq!(scope.cap(), GROUP_IMAGE_CAP);
    }

    #[test]
    fn test_resolve_unknown_type_falls_back_to_category() {
        let section = main_section();
        let scope = section.resolve_scope(Some("featured"), Some("parkas"));
        assert_eq!(scope, ListScope::Category("featured".to_string()));
    }

    #[test]
    fn test_resolve_unknown_category_falls_back_to_root() {
        let section = women();
        assert_eq!(section.resolve_scope(Some("parkas"), None), ListScope::Root);
        assert_eq!(ListScope::Root.cap(), ROOT_IMAGE_CAP);
    }

    #[test]
    fn test_resolve_flat_section_ignores_clothing_type() {
        let section = women();
        let scope = section.resolve_scope(Some("jeans"), Some("t-shirts"));
        assert_eq!(scope, ListScope::Category("jeans".to_string()));
    }

    #[test]
    fn test_resolve_empty_strings_count_as_absent() {
        let section = women();
        assert_eq!(section.resolve_scope(Some(""), Some("")), ListScope::Root);
    }

    // ------------------------------------------------------------------
    // Append and cap eviction
    // ------------------------------------------------------------------

    #[test]
    fn test_append_to_nested_type_list() {
        let mut section = main_section();
        section.append_image(Some("featured"), Some("t-shirts"), image("1"));

        let SectionCategories::Nested(map) = &section.categories else {
            panic!("main section must be nested");
        };
        assert_eq!(map["featured"].types["t-shirts"].images.len(), 1);
        assert!(map["featured"].images.is_empty());
        assert!(section.images.is_empty());
    }

    #[test]
    fn test_root_cap_evicts_oldest_first() {
        let mut section = women();
        for i in 1..=8 {
            section.append_image(None, None, image(&i.to_string()));
        }
        assert_eq!(ids(&section.images), vec!["3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_category_cap_no_eviction_below_cap() {
        let mut section = women();
        for i in 1..=7 {
            section.append_image(Some("jeans"), None, image(&i.to_string()));
        }
        let scope = ListScope::Category("jeans".to_string());
        assert_eq!(section.list(&scope).len(), 7);
    }

    #[test]
    fn test_category_cap_evicts_on_eleventh() {
        let mut section = women();
        for i in 1..=11 {
            section.append_image(Some("jeans"), None, image(&i.to_string()));
        }
        let scope = ListScope::Category("jeans".to_string());
        let list = section.list(&scope);
        assert_eq!(list.len(), 10);
        assert_eq!(list.first().unwrap().id, "2");
        assert_eq!(list.last().unwrap().id, "11");
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    #[test]
    fn test_update_applies_only_provided_fields() {
        let mut section = women();
        section.append_image(None, None, image("1"));

        let updated = section
            .update_image(None, None, "1", Some("Summer Dress"), None)
            .unwrap();
        assert_eq!(updated.name, "Summer Dress");
        assert_eq!(updated.price, "$49.99");
    }

    #[test]
    fn test_update_empty_string_leaves_field_untouched() {
        let mut section = women();
        section.append_image(None, None, image("1"));

        let updated = section
            .update_image(None, None, "1", Some(""), Some("$10.00"))
            .unwrap();
        assert_eq!(updated.name, "Product 1");
        assert_eq!(updated.price, "$10.00");
    }

    #[test]
    fn test_update_unknown_id_leaves_state_unchanged() {
        let mut section = women();
        section.append_image(None, None, image("1"));
        let before = section.clone();

        assert!(section.update_image(None, None, "999", Some("x"), None).is_none());
        assert_eq!(section, before);
    }

    // ------------------------------------------------------------------
    // Remove
    // ------------------------------------------------------------------

    #[test]
    fn test_remove_preserves_order_of_survivors() {
        let mut section = women();
        for i in 1..=3 {
            section.append_image(None, None, image(&i.to_string()));
        }

        let removed = section.remove_image(None, None, "2").unwrap();
        assert_eq!(removed.id, "2");
        assert_eq!(ids(&section.images), vec!["1", "3"]);
    }

    #[test]
    fn test_remove_falls_back_to_root_when_id_not_in_category() {
        let mut section = women();
        section.append_image(None, None, image("1"));
        section.append_image(Some("jeans"), None, image("2"));

        // id "1" lives in root, not jeans; the category hint is wrong but
        // the lookup cascades to root.
        let removed = section.remove_image(Some("jeans"), None, "1").unwrap();
        assert_eq!(removed.id, "1");
        assert!(section.images.is_empty());

        let jeans = ListScope::Category("jeans".to_string());
        assert_eq!(ids(section.list(&jeans)), vec!["2"]);
    }

    #[test]
    fn test_remove_unknown_id_leaves_state_unchanged() {
        let mut section = women();
        section.append_image(Some("jeans"), None, image("1"));
        let before = section.clone();

        assert!(section.remove_image(Some("jeans"), None, "999").is_none());
        assert_eq!(section, before);
    }

    // ------------------------------------------------------------------
    // Rename
    // ------------------------------------------------------------------

    #[test]
    fn test_rename_partial() {
        let mut section = women();
        section.rename(Some("New Arrivals"), None);
        assert_eq!(section.title, "New Arrivals");
        assert_eq!(
            section.description,
            "Discover the latest trends in women's fashion"
        );

        section.rename(None, Some(""));
        assert_eq!(
            section.description,
            "Discover the latest trends in women's fashion"
        );
    }

    // ------------------------------------------------------------------
    // Serde shape
    // ------------------------------------------------------------------

    #[test]
    fn test_flat_section_round_trip() {
        let mut section = women();
        section.append_image(Some("jeans"), None, image("1"));

        let json = serde_json::to_string(&section).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, section);
    }

    #[test]
    fn test_nested_section_round_trip() {
        let mut section = main_section();
        section.append_image(Some("featured"), Some("caps"), image("1"));

        let json = serde_json::to_string(&section).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, section);
        assert!(matches!(back.categories, SectionCategories::Nested(_)));
    }

    #[test]
    fn test_explore_link_serialized_camel_case_and_omitted_when_absent() {
        let flat = serde_json::to_value(women()).unwrap();
        assert_eq!(flat["exploreLink"], "/women");

        let nested = serde_json::to_value(main_section()).unwrap();
        assert!(nested.get("exploreLink").is_none());
    }
}
