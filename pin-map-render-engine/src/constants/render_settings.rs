use bevy::color::Srgba;

/// Vertical field of view of the map camera in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 70.0;

/// Near clip plane distance.
pub const CAMERA_NEAR: f32 = 1.0;

/// Far clip plane distance.
pub const CAMERA_FAR: f32 = 10000.0;

/// Forward offset of the spawn pose so the view is not perfectly vertical.
pub const CAMERA_START_PULLBACK: f32 = 40.0;

/// Closest the camera may dolly toward its ground target.
pub const MIN_ZOOM_DISTANCE: f32 = 100.0;

/// Distance change per accumulated scroll unit, as a fraction of the
/// current distance.
pub const ZOOM_STEP: f32 = 0.1;

/// Markers float this far above the ground plane.
pub const MARKER_LIFT: f32 = 3.0;

/// Decorations sit this far above their marker so the two never z-fight.
pub const DECORATION_LIFT: f32 = 0.5;

/// Glyph em height of a label relative to the pin size.
pub const LABEL_HEIGHT_FACTOR: f32 = 0.75;

/// Largest icon dimension relative to the pin size.
pub const ICON_SIZE_FACTOR: f32 = 2.0;

/// Triangle fan resolution of a marker disc.
pub const MARKER_SEGMENTS: usize = 32;

/// Seconds per opacity pulse cycle of an animated pin.
pub const PULSE_PERIOD_SECS: f32 = 2.0;

/// Scene clear colour behind the map quad.
pub const BACKGROUND_COLOR: Srgba = Srgba::new(0.6, 0.6, 0.6, 1.0);

/// Fill colour of label glyph meshes.
pub const LABEL_COLOR: Srgba = Srgba::new(0.08, 0.08, 0.1, 1.0);

/// Key light colour, white from the upper front.
pub const KEY_LIGHT_COLOR: Srgba = Srgba::new(1.0, 1.0, 1.0, 1.0);

/// Cool fill light colour from the opposite corner.
pub const FILL_LIGHT_COLOR: Srgba = Srgba::new(0.0, 0.13, 0.53, 1.0);

/// Ambient light colour.
pub const AMBIENT_LIGHT_COLOR: Srgba = Srgba::new(0.33, 0.33, 0.33, 1.0);

/// Illuminance of both directional lights in lux.
pub const DIRECTIONAL_LIGHT_LUX: f32 = 3000.0;

/// Ambient light brightness.
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

/// Glyph font shipped with the engine assets.
pub const GLYPH_FONT_PATH: &str = "fonts/map_glyphs.typeface.json";

/// Vector icon set shipped with the engine assets.
pub const ICON_SET_PATH: &str = "icons/map_icons.icons.json";

/// Icon drawn for pins without label text, compass included.
pub const COMPASS_ICON: &str = "compass";
