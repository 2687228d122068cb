//! Category Presentation
//!
//! Color and glyph per attraction category. Unknown categories use the
//! default style.

/// Known categories in display order
pub const CATEGORIES: &[(&str, CategoryStyle)] = &[
    ("Nature", CategoryStyle { color: "#10b981", glyph: "🌿" }),
    ("Historical", CategoryStyle { color: "#f59e0b", glyph: "🏛️" }),
    ("Religious", CategoryStyle { color: "#8b5cf6", glyph: "⛪" }),
    ("Food", CategoryStyle { color: "#ef4444", glyph: "🍴" }),
];

pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle { color: "#6b7280", glyph: "📍" };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub color: &'static str,
    pub glyph: &'static str,
}

pub fn style_for(category: &str) -> CategoryStyle {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

/// Position of a category in the filter bar; unknown ones sort after known
pub fn display_rank(category: &str) -> usize {
    CATEGORIES
        .iter()
        .position(|(name, _)| *name == category)
        .unwrap_or(CATEGORIES.len())
}

impl CategoryStyle {
    /// 32x40 map pin, anchored at its bottom tip
    pub fn marker_svg(&self) -> String {
        format!(
            r##"<svg width="32" height="40" viewBox="0 0 32 40" xmlns="http://www.w3.org/2000/svg"><path d="M16 0C7.163 0 0 7.163 0 16c0 12 16 24 16 24s16-12 16-24c0-8.837-7.163-16-16-16z" fill="{}" stroke="#fff" stroke-width="2"/><text x="16" y="20" text-anchor="middle" font-size="14" fill="#fff">{}</text></svg>"##,
            self.color, self.glyph
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_styles() {
        assert_eq!(style_for("Nature").color, "#10b981");
        assert_eq!(style_for("Food").color, "#ef4444");
        assert_eq!(style_for("Shopping"), DEFAULT_STYLE);
        // Exact match only
        assert_eq!(style_for("nature"), DEFAULT_STYLE);
    }

    #[test]
    fn test_display_rank() {
        assert_eq!(display_rank("Nature"), 0);
        assert_eq!(display_rank("Food"), 3);
        assert_eq!(display_rank("Shopping"), CATEGORIES.len());
    }

    #[test]
    fn test_marker_svg_uses_color() {
        let svg = style_for("Religious").marker_svg();
        assert!(svg.contains(r##"fill="#8b5cf6""##));
        assert!(svg.starts_with("<svg"));
    }
}
