use bevy::color::Srgba;

/// Semantic grouping of a map pin. Styling is resolved through
/// [`style_for`], never stored per pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinCategory {
    Primary,
    Secondary,
    Tertiary,
    Compass,
}

/// Visual styling for one pin category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStyle {
    /// Base fill colour of the marker disc and its decorations.
    pub fill: Srgba,
    /// Resting opacity. Animated pins pulse between this and zero.
    pub opacity: f32,
}

/// Styling table keyed by category.
pub const CATEGORY_STYLES: &[(PinCategory, CategoryStyle)] = &[
    (
        PinCategory::Primary,
        CategoryStyle {
            fill: Srgba::new(0.85, 0.29, 0.24, 1.0),
            opacity: 0.92,
        },
    ),
    (
        PinCategory::Secondary,
        CategoryStyle {
            fill: Srgba::new(0.18, 0.44, 0.69, 1.0),
            opacity: 0.88,
        },
    ),
    (
        PinCategory::Tertiary,
        CategoryStyle {
            fill: Srgba::new(0.88, 0.66, 0.24, 1.0),
            opacity: 0.85,
        },
    ),
    (
        PinCategory::Compass,
        CategoryStyle {
            fill: Srgba::new(0.14, 0.15, 0.17, 1.0),
            opacity: 0.95,
        },
    ),
];

/// Mid-grey style used when a category has no table entry.
pub const NEUTRAL_STYLE: CategoryStyle = CategoryStyle {
    fill: Srgba::new(0.5, 0.5, 0.5, 1.0),
    opacity: 0.8,
};

/// Look up the styling for a category, falling back to [`NEUTRAL_STYLE`].
pub fn style_for(category: PinCategory) -> &'static CategoryStyle {
    CATEGORY_STYLES
        .iter()
        .find(|(entry, _)| *entry == category)
        .map_or(&NEUTRAL_STYLE, |(_, style)| style)
}
