use super::CatalogItem;

/// Shown when an item has no image for the selected colour
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.svg";

/// A gold colour variant offered on every product card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub code: &'static str,
    pub hex: &'static str,
}

pub const COLOR_OPTIONS: [ColorOption; 3] = [
    ColorOption {
        name: "Yellow Gold",
        code: "yellow",
        hex: "#E6CA97",
    },
    ColorOption {
        name: "White Gold",
        code: "white",
        hex: "#D9D9D9",
    },
    ColorOption {
        name: "Rose Gold",
        code: "rose",
        hex: "#E1A4A9",
    },
];

impl Default for ColorOption {
    fn default() -> Self {
        COLOR_OPTIONS[0]
    }
}

/// Image reference for `item` in `color`, or the placeholder.
pub fn image_for<'a>(item: &'a CatalogItem, color: &ColorOption) -> &'a str {
    item.images
        .as_ref()
        .and_then(|images| images.get(color.code))
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn default_is_yellow_gold() {
        assert_eq!(ColorOption::default().code, "yellow");
    }

    #[test]
    fn image_follows_color_and_falls_back() {
        let mut images = BTreeMap::new();
        images.insert("yellow".to_string(), "ring-yellow.jpg".to_string());
        let item = CatalogItem {
            name: "Ring".into(),
            images: Some(images),
            ..Default::default()
        };

        assert_eq!(image_for(&item, &COLOR_OPTIONS[0]), "ring-yellow.jpg");
        assert_eq!(image_for(&item, &COLOR_OPTIONS[2]), PLACEHOLDER_IMAGE);

        let bare = CatalogItem::default();
        assert_eq!(image_for(&bare, &COLOR_OPTIONS[1]), PLACEHOLDER_IMAGE);
    }
}
