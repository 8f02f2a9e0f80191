//! Photo gallery model: the fixed catalog, the category filter and the
//! lightbox selection.

use std::collections::HashSet;
use std::rc::Rc;

use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    WindowCleaning,
    GutterCleaning,
    PressureWashing,
    ChristmasLights,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::WindowCleaning,
        Category::GutterCleaning,
        Category::PressureWashing,
        Category::ChristmasLights,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::WindowCleaning => "Window Cleaning",
            Category::GutterCleaning => "Gutter Cleaning",
            Category::PressureWashing => "Pressure Washing",
            Category::ChristmasLights => "Christmas Lights",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Filter buttons in display order.
    pub fn options() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(Category::ALL.into_iter().map(Filter::Only))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, image: &GalleryImage) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => image.category == *category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: u32,
    pub category: Category,
    pub src: String,
    pub alt: &'static str,
    pub description: &'static str,
}

const CATALOG: &[(u32, Category, &str, &str, &str)] = &[
    (1, Category::WindowCleaning, "gallery/gallery1.jpg", "High-rise commercial window cleaning", "Professional window cleaning for multi-story buildings"),
    (2, Category::WindowCleaning, "gallery/gallery2.jpg", "Residential window cleaning", "Crystal clear windows for your home"),
    (3, Category::WindowCleaning, "gallery/gallery3.jpg", "Storefront window cleaning", "Retail storefront maintenance"),
    (13, Category::WindowCleaning, "gallery/gallery9.jpg", "Residential window cleaning", "Crystal clear windows for your home"),
    (14, Category::WindowCleaning, "gallery/gallery10.jpg", "Residential window cleaning", "Crystal clear windows for your home"),
    (15, Category::WindowCleaning, "gallery/gallery11.jpg", "Residential window cleaning", "Crystal clear windows for your home"),
    (4, Category::GutterCleaning, "gallery/gallery4.jpg", "Professional gutter cleaning", "Thorough gutter cleaning and maintenance"),
    (5, Category::GutterCleaning, "gallery/gallery5.jpg", "Gutter maintenance and repair", "Gutter inspection and debris removal"),
    (6, Category::GutterCleaning, "gallery/gallery6.jpg", "Leaf removal from gutters", "Seasonal gutter cleaning service"),
    (7, Category::PressureWashing, "gallery/pressure-1.jpg", "Driveway pressure washing", "Deep cleaning of concrete surfaces"),
    (8, Category::PressureWashing, "gallery/pressure-2.jpg", "Deck pressure washing", "Wooden deck restoration and cleaning"),
    (9, Category::PressureWashing, "gallery/pressure-3.jpg", "House siding pressure washing", "Exterior house cleaning service"),
    (10, Category::ChristmasLights, "gallery/gallery7.jpg", "Professional Christmas light installation", "Residential holiday lighting"),
    (11, Category::ChristmasLights, "gallery/gallery8.jpg", "Commercial Christmas lighting", "Business holiday lighting displays"),
    (12, Category::ChristmasLights, "gallery/gallery12.jpg", "Custom holiday light designs", "Custom holiday lighting solutions"),
];

/// The site's photos in catalog order, with sources resolved against the asset base.
pub fn catalog() -> Vec<GalleryImage> {
    CATALOG
        .iter()
        .map(|&(id, category, path, alt, description)| GalleryImage {
            id,
            category,
            src: config::asset_url(path),
            alt,
            description,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lightbox {
    Closed,
    Open(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    SetFilter(Filter),
    Open(u32),
    Close,
    Next,
    Prev,
    ImageLoaded(u32),
}

/// State of one gallery on the page.
///
/// Previous/next walk the full catalog order, not the filtered grid, and stop
/// at either end.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    catalog: Rc<[GalleryImage]>,
    filter: Filter,
    lightbox: Lightbox,
    loaded: HashSet<u32>,
}

impl GalleryView {
    pub fn new(catalog: impl Into<Rc<[GalleryImage]>>) -> Self {
        Self {
            catalog: catalog.into(),
            filter: Filter::All,
            lightbox: Lightbox::Closed,
            loaded: HashSet::new(),
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    pub fn filtered_images(&self) -> Vec<&GalleryImage> {
        self.catalog.iter().filter(|image| self.filter.matches(image)).collect()
    }

    /// Leaves the lightbox alone, even if the open image no longer matches.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn open_image(&mut self, id: u32) {
        if self.index_of(id).is_some() {
            self.lightbox = Lightbox::Open(id);
        }
    }

    pub fn close_image(&mut self) {
        self.lightbox = Lightbox::Closed;
    }

    pub fn selected(&self) -> Option<&GalleryImage> {
        self.selected_index().map(|index| &self.catalog[index])
    }

    pub fn next(&mut self) {
        if let Some(image) = self.selected_index().and_then(|index| self.catalog.get(index + 1)) {
            self.lightbox = Lightbox::Open(image.id);
        }
    }

    pub fn prev(&mut self) {
        if let Some(image) = self
            .selected_index()
            .and_then(|index| index.checked_sub(1))
            .map(|index| &self.catalog[index])
        {
            self.lightbox = Lightbox::Open(image.id);
        }
    }

    pub fn has_next(&self) -> bool {
        self.selected_index()
            .map_or(false, |index| index + 1 < self.catalog.len())
    }

    pub fn has_prev(&self) -> bool {
        self.selected_index().map_or(false, |index| index > 0)
    }

    pub fn mark_loaded(&mut self, id: u32) -> bool {
        self.loaded.insert(id)
    }

    pub fn is_loaded(&self, id: u32) -> bool {
        self.loaded.contains(&id)
    }

    pub fn apply(&mut self, action: GalleryAction) -> bool {
        let before = (self.filter, self.lightbox);
        match action {
            GalleryAction::SetFilter(filter) => self.set_filter(filter),
            GalleryAction::Open(id) => self.open_image(id),
            GalleryAction::Close => self.close_image(),
            GalleryAction::Next => self.next(),
            GalleryAction::Prev => self.prev(),
            GalleryAction::ImageLoaded(id) => return self.mark_loaded(id),
        }
        before != (self.filter, self.lightbox)
    }

    fn selected_index(&self) -> Option<usize> {
        match self.lightbox {
            Lightbox::Closed => None,
            Lightbox::Open(id) => self.index_of(id),
        }
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        self.catalog.iter().position(|image| image.id == id)
    }
}

impl Reducible for GalleryView {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: u32, category: Category) -> GalleryImage {
        GalleryImage {
            id,
            category,
            src: format!("/gallery/{}.jpg", id),
            alt: "test image",
            description: "test description",
        }
    }

    fn ids(images: &[&GalleryImage]) -> Vec<u32> {
        images.iter().map(|image| image.id).collect()
    }

    #[test]
    fn catalog_has_fifteen_unique_images() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 15);
        let unique: HashSet<u32> = catalog.iter().map(|image| image.id).collect();
        assert_eq!(unique.len(), 15);
        assert!(catalog.iter().all(|image| image.src.ends_with(".jpg")));
    }

    #[test]
    fn default_filter_shows_everything() {
        let view = GalleryView::new(catalog());
        assert_eq!(view.filter(), Filter::All);
        assert_eq!(view.filtered_images().len(), 15);
        assert_eq!(view.lightbox(), Lightbox::Closed);
    }

    #[test]
    fn christmas_lights_filter() {
        let mut view = GalleryView::new(catalog());
        view.set_filter(Filter::Only(Category::ChristmasLights));
        assert_eq!(ids(&view.filtered_images()), vec![10, 11, 12]);
    }

    #[test]
    fn gutter_filter_keeps_catalog_order() {
        let mut view = GalleryView::new(catalog());
        view.set_filter(Filter::Only(Category::GutterCleaning));
        let filtered = view.filtered_images();
        assert_eq!(filtered.len(), 3);
        assert_eq!(ids(&filtered), vec![4, 5, 6]);
    }

    #[test]
    fn window_filter_follows_insertion_not_id_order() {
        let mut view = GalleryView::new(catalog());
        view.set_filter(Filter::Only(Category::WindowCleaning));
        assert_eq!(ids(&view.filtered_images()), vec![1, 2, 3, 13, 14, 15]);
    }

    #[test]
    fn empty_filter_result_is_fine() {
        let mut view = GalleryView::new(vec![image(1, Category::WindowCleaning)]);
        view.set_filter(Filter::Only(Category::PressureWashing));
        assert!(view.filtered_images().is_empty());
    }

    #[test]
    fn navigation_uses_full_catalog_under_filter() {
        let mut view = GalleryView::new(vec![
            image(1, Category::WindowCleaning),
            image(2, Category::GutterCleaning),
            image(3, Category::WindowCleaning),
        ]);
        view.set_filter(Filter::Only(Category::WindowCleaning));
        assert_eq!(ids(&view.filtered_images()), vec![1, 3]);

        view.open_image(1);
        view.next();
        assert_eq!(view.lightbox(), Lightbox::Open(2));
        view.prev();
        assert_eq!(view.lightbox(), Lightbox::Open(1));
    }

    #[test]
    fn next_stops_at_last_image() {
        let mut view = GalleryView::new(catalog());
        view.open_image(12);
        assert!(!view.has_next());
        assert!(!view.apply(GalleryAction::Next));
        assert_eq!(view.selected().map(|image| image.id), Some(12));
    }

    #[test]
    fn prev_stops_at_first_image() {
        let mut view = GalleryView::new(catalog());
        view.open_image(1);
        assert!(!view.has_prev());
        assert!(!view.apply(GalleryAction::Prev));
        assert_eq!(view.selected().map(|image| image.id), Some(1));
    }

    #[test]
    fn next_crosses_category_boundary() {
        let mut view = GalleryView::new(catalog());
        view.open_image(15);
        view.next();
        assert_eq!(view.lightbox(), Lightbox::Open(4));
        view.prev();
        view.prev();
        assert_eq!(view.lightbox(), Lightbox::Open(14));
    }

    #[test]
    fn filter_change_keeps_open_image() {
        let mut view = GalleryView::new(catalog());
        view.open_image(7);
        view.set_filter(Filter::Only(Category::ChristmasLights));
        assert_eq!(view.lightbox(), Lightbox::Open(7));
    }

    #[test]
    fn close_returns_to_closed() {
        let mut view = GalleryView::new(catalog());
        assert!(view.apply(GalleryAction::Open(3)));
        assert!(view.apply(GalleryAction::Close));
        assert_eq!(view.lightbox(), Lightbox::Closed);
        assert!(view.selected().is_none());
    }

    #[test]
    fn navigation_while_closed_is_noop() {
        let mut view = GalleryView::new(catalog());
        assert!(!view.apply(GalleryAction::Next));
        assert!(!view.apply(GalleryAction::Prev));
        assert_eq!(view.lightbox(), Lightbox::Closed);
    }

    #[test]
    fn unknown_id_does_not_open() {
        let mut view = GalleryView::new(catalog());
        view.open_image(99);
        assert_eq!(view.lightbox(), Lightbox::Closed);
    }

    #[test]
    fn loading_is_tracked_per_card() {
        let mut view = GalleryView::new(catalog());
        assert!(view.apply(GalleryAction::ImageLoaded(4)));
        assert!(view.is_loaded(4));
        assert!(!view.is_loaded(5));
        assert!(!view.apply(GalleryAction::ImageLoaded(4)));
    }

    #[test]
    fn reducer_open_then_next_walks_catalog() {
        let view = Rc::new(GalleryView::new(catalog()));
        let opened = view.clone().reduce(GalleryAction::Open(15));
        assert!(!Rc::ptr_eq(&view, &opened));
        assert_eq!(opened.lightbox(), Lightbox::Open(15));

        let next = opened.reduce(GalleryAction::Next);
        assert_eq!(next.lightbox(), Lightbox::Open(4));
        assert!(next.has_prev());
    }

    #[test]
    fn reducer_next_at_end_keeps_same_state() {
        let view = Rc::new(GalleryView::new(catalog())).reduce(GalleryAction::Open(12));
        let same = view.clone().reduce(GalleryAction::Next);
        assert!(Rc::ptr_eq(&view, &same));
    }

    #[test]
    fn reducer_records_image_loads() {
        let view = Rc::new(GalleryView::new(catalog()));
        let loaded = view.clone().reduce(GalleryAction::ImageLoaded(7));
        assert!(loaded.is_loaded(7));
        assert!(!view.is_loaded(7));
        let again = loaded.clone().reduce(GalleryAction::ImageLoaded(7));
        assert!(Rc::ptr_eq(&loaded, &again));
    }

    #[test]
    fn filter_options_in_display_order() {
        let labels: Vec<&str> = Filter::options().map(|filter| filter.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Window Cleaning", "Gutter Cleaning", "Pressure Washing", "Christmas Lights"]
        );
    }
}
