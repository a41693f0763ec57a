// SPDX-License-Identifier: MPL-2.0
//! Slide data and the deck a controller navigates over.
//!
//! Each slide carries up to three image sources, mirroring the per-slide
//! attributes the widget consumes: a main `image`, an optional full-size
//! `zoom` override, and an optional `thumb` for the thumbnail strip.

/// One slide element of the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slide {
    /// Main image source.
    pub image: Option<String>,
    /// Full-size source used by the zoom overlay, overriding `image`.
    pub zoom: Option<String>,
    /// Source for the generated thumbnail entry.
    pub thumb: Option<String>,
    /// Sources of images embedded inside the slide's own content, used as
    /// the last-resort zoom fallback.
    pub embedded: Vec<String>,
}

impl Slide {
    /// Creates a slide whose image, zoom, and thumb all point at one source.
    #[must_use]
    pub fn from_image(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            image: Some(source.clone()),
            zoom: None,
            thumb: Some(source),
            embedded: Vec::new(),
        }
    }

    /// Resolves the source shown by the zoom overlay.
    ///
    /// Priority: the `zoom` override, else the `image` source, else the
    /// first embedded image.
    #[must_use]
    pub fn zoom_source(&self) -> Option<&str> {
        self.zoom
            .as_deref()
            .or(self.image.as_deref())
            .or_else(|| self.embedded.first().map(String::as_str))
    }

    /// Resolves the source for this slide's thumbnail entry, falling back to
    /// the main image when no dedicated thumb exists.
    #[must_use]
    pub fn thumb_source(&self) -> Option<&str> {
        self.thumb.as_deref().or(self.image.as_deref())
    }
}

/// The ordered set of slide elements a controller navigates over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Creates an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Number of slide elements (not slide groups).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Builds the deck for a thumbnail strip: one slide per element with a
    /// resolvable thumb source. Elements without any source are dropped
    /// silently rather than producing empty entries.
    #[must_use]
    pub fn thumb_deck(&self) -> SlideDeck {
        let slides = self
            .slides
            .iter()
            .filter_map(|slide| slide.thumb_source().map(Slide::from_image))
            .collect();
        Self { slides }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_source_prefers_zoom_override() {
        let slide = Slide {
            image: Some("image.jpg".into()),
            zoom: Some("zoom.jpg".into()),
            thumb: None,
            embedded: vec!["embedded.jpg".into()],
        };
        assert_eq!(slide.zoom_source(), Some("zoom.jpg"));
    }

    #[test]
    fn zoom_source_falls_back_to_image_then_embedded() {
        let slide = Slide {
            image: Some("image.jpg".into()),
            zoom: None,
            thumb: None,
            embedded: vec!["embedded.jpg".into()],
        };
        assert_eq!(slide.zoom_source(), Some("image.jpg"));

        let embedded_only = Slide {
            image: None,
            zoom: None,
            thumb: None,
            embedded: vec!["embedded.jpg".into(), "second.jpg".into()],
        };
        assert_eq!(embedded_only.zoom_source(), Some("embedded.jpg"));
    }

    #[test]
    fn zoom_source_is_none_when_nothing_resolvable() {
        assert_eq!(Slide::default().zoom_source(), None);
    }

    #[test]
    fn thumb_deck_keeps_one_entry_per_resolvable_slide() {
        let deck = SlideDeck::from_slides(vec![
            Slide::from_image("a.jpg"),
            Slide::default(),
            Slide {
                image: Some("c.jpg".into()),
                thumb: Some("c-thumb.jpg".into()),
                ..Slide::default()
            },
        ]);

        let thumbs = deck.thumb_deck();
        assert_eq!(thumbs.len(), 2);
        assert_eq!(thumbs.get(0).unwrap().image.as_deref(), Some("a.jpg"));
        assert_eq!(thumbs.get(1).unwrap().image.as_deref(), Some("c-thumb.jpg"));
    }
}
