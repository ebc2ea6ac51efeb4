use serde::{Deserialize, Serialize};

/// One filled shape: an outer ring plus optional interior holes.
///
/// Coordinates are in the source document's units with +y up. Rings may
/// repeat their first point at the end; consumers drop the duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outline {
    pub outer: Vec<[f32; 2]>,
    #[serde(default)]
    pub holes: Vec<Vec<[f32; 2]>>,
}

impl Outline {
    /// Axis-aligned bounds of the outer ring as `(min, max)`.
    pub fn bounds(&self) -> ([f32; 2], [f32; 2]) {
        let mut min = [f32::MAX, f32::MAX];
        let mut max = [f32::MIN, f32::MIN];
        for point in &self.outer {
            min[0] = min[0].min(point[0]);
            min[1] = min[1].min(point[1]);
            max[0] = max[0].max(point[0]);
            max[1] = max[1].max(point[1]);
        }
        (min, max)
    }
}
