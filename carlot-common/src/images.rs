//! Display-ready image list and presentation-time fallbacks

use crate::car::CarRecord;
use std::collections::HashSet;

/// Shown when a car has no usable image
pub const PLACEHOLDER_CAR_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='800' height='500' viewBox='0 0 800 500'%3E%3Crect width='800' height='500' fill='%23f3f4f6'/%3E%3Ctext x='50%25' y='50%25' dominant-baseline='middle' text-anchor='middle' font-family='Arial' font-size='20' fill='%236b7280'%3ECar Image%3C/text%3E%3C/svg%3E";

/// Shown in place of an image that failed to load
pub const PLACEHOLDER_ERROR_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='800' height='500' viewBox='0 0 800 500'%3E%3Crect width='800' height='500' fill='%23fef2f2'/%3E%3Ctext x='50%25' y='50%25' dominant-baseline='middle' text-anchor='middle' font-family='Arial' font-size='20' fill='%23dc2626'%3EImage Error%3C/text%3E%3C/svg%3E";

/// Ordered, never-empty list of image references.
///
/// Only built through [`derive_image_list`] (or [`ImageList::placeholder`]),
/// so `len() >= 1` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageList {
    urls: Vec<String>,
}

impl ImageList {
    /// Single-entry list holding [`PLACEHOLDER_CAR_IMAGE`]
    pub fn placeholder() -> Self {
        Self {
            urls: vec![PLACEHOLDER_CAR_IMAGE.to_string()],
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Whether navigation controls and thumbnails are worth showing
    pub fn has_multiple(&self) -> bool {
        self.urls.len() > 1
    }

    /// Image at `index`, clamped to the last entry
    pub fn get(&self, index: usize) -> &str {
        let idx = index.min(self.urls.len() - 1);
        &self.urls[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    pub fn is_placeholder(&self) -> bool {
        self.urls.len() == 1 && self.urls[0] == PLACEHOLDER_CAR_IMAGE
    }
}

impl Default for ImageList {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Build the gallery's image list from a car record.
///
/// `images` keeps its order and its entries as-is; `image_url` goes first
/// unless `images` already holds it. No usable reference (or no record)
/// yields the placeholder.
pub fn derive_image_list(record: Option<&CarRecord>) -> ImageList {
    let Some(record) = record else {
        return ImageList::placeholder();
    };

    let mut urls: Vec<String> = record.images.clone();

    if let Some(legacy) = &record.image_url {
        if !urls.contains(legacy) {
            urls.insert(0, legacy.clone());
        }
    }

    if urls.is_empty() {
        ImageList::placeholder()
    } else {
        ImageList { urls }
    }
}

/// Where an image is rendered; failures are tracked per slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Main,
    Thumbnail(usize),
    Lightbox,
}

/// Records images that failed to load and substitutes the error placeholder.
///
/// Keyed by slot and source, so a failed main image does not taint the
/// thumbnails and moving the slider to another source shows it normally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageFallbacks {
    failed: HashSet<(ImageSlot, String)>,
}

impl ImageFallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `src` as broken in `slot`. Returns false if already marked.
    pub fn mark_failed(&mut self, slot: ImageSlot, src: &str) -> bool {
        // The error placeholder itself is inline and cannot fail meaningfully.
        if src == PLACEHOLDER_ERROR_IMAGE {
            return false;
        }
        self.failed.insert((slot, src.to_string()))
    }

    /// The source to actually render in `slot`
    pub fn resolve<'a>(&self, slot: ImageSlot, src: &'a str) -> &'a str {
        if self.failed.contains(&(slot, src.to_string())) {
            PLACEHOLDER_ERROR_IMAGE
        } else {
            src
        }
    }

    pub fn clear(&mut self) {
        self.failed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(images: &[&str], image_url: Option<&str>) -> CarRecord {
        CarRecord {
            brand: "Honda".into(),
            model: "City".into(),
            images: images.iter().map(|s| s.to_string()).collect(),
            image_url: image_url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_record_gives_placeholder() {
        let list = derive_image_list(None);
        assert_eq!(list.as_slice(), [PLACEHOLDER_CAR_IMAGE]);
        assert!(list.is_placeholder());
    }

    #[test]
    fn test_no_images_gives_placeholder() {
        let list = derive_image_list(Some(&car(&[], None)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), PLACEHOLDER_CAR_IMAGE);
    }

    #[test]
    fn test_image_url_already_present_is_not_prepended() {
        let list = derive_image_list(Some(&car(&["a.jpg", "b.jpg"], Some("a.jpg"))));
        assert_eq!(list.as_slice(), ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_distinct_image_url_goes_first() {
        let list = derive_image_list(Some(&car(&["b.jpg", "c.jpg"], Some("a.jpg"))));
        assert_eq!(list.as_slice(), ["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_image_url_alone() {
        let list = derive_image_list(Some(&car(&[], Some("only.jpg"))));
        assert_eq!(list.as_slice(), ["only.jpg"]);
        assert!(!list.has_multiple());
        assert!(!list.is_placeholder());
    }

    #[test]
    fn test_repeated_images_are_kept() {
        let list = derive_image_list(Some(&car(&["b.jpg", "b.jpg"], Some("a.jpg"))));
        assert_eq!(list.as_slice(), ["a.jpg", "b.jpg", "b.jpg"]);
    }

    #[test]
    fn test_get_clamps() {
        let list = derive_image_list(Some(&car(&["a.jpg", "b.jpg"], None)));
        assert_eq!(list.get(7), "b.jpg");
    }

    #[test]
    fn test_fallbacks_are_per_slot() {
        let mut fallbacks = ImageFallbacks::new();
        assert!(fallbacks.mark_failed(ImageSlot::Thumbnail(1), "b.jpg"));
        assert!(!fallbacks.mark_failed(ImageSlot::Thumbnail(1), "b.jpg"));

        assert_eq!(
            fallbacks.resolve(ImageSlot::Thumbnail(1), "b.jpg"),
            PLACEHOLDER_ERROR_IMAGE
        );
        assert_eq!(fallbacks.resolve(ImageSlot::Main, "b.jpg"), "b.jpg");
        assert_eq!(fallbacks.resolve(ImageSlot::Thumbnail(0), "a.jpg"), "a.jpg");
    }

    #[test]
    fn test_main_fallback_follows_source() {
        let mut fallbacks = ImageFallbacks::new();
        fallbacks.mark_failed(ImageSlot::Main, "a.jpg");
        assert_eq!(fallbacks.resolve(ImageSlot::Main, "a.jpg"), PLACEHOLDER_ERROR_IMAGE);
        assert_eq!(fallbacks.resolve(ImageSlot::Main, "b.jpg"), "b.jpg");

        fallbacks.clear();
        assert_eq!(fallbacks.resolve(ImageSlot::Main, "a.jpg"), "a.jpg");
    }

    #[test]
    fn test_error_placeholder_never_marked() {
        let mut fallbacks = ImageFallbacks::new();
        assert!(!fallbacks.mark_failed(ImageSlot::Main, PLACEHOLDER_ERROR_IMAGE));
    }
}
