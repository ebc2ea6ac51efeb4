use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::constants::render_settings::{ICON_SIZE_FACTOR, LABEL_HEIGHT_FACTOR, MARKER_SEGMENTS};
use crate::engine::assets::glyph_font::GlyphFont;
use crate::engine::assets::icon_set::Icon;
use crate::engine::assets::outline::Outline;

/// Flat disc in the XZ plane, +Y normal, centred on the origin.
pub fn flat_disc_mesh(radius: f32) -> Mesh {
    let mut positions = Vec::with_capacity(MARKER_SEGMENTS + 1);
    positions.push([0.0, 0.0, 0.0]);
    for i in 0..MARKER_SEGMENTS {
        let theta = i as f32 / MARKER_SEGMENTS as f32 * std::f32::consts::TAU;
        positions.push([theta.cos() * radius, 0.0, theta.sin() * radius]);
    }

    let mut indices = Vec::with_capacity(MARKER_SEGMENTS * 3);
    for i in 0..MARKER_SEGMENTS as u32 {
        let next = (i + 1) % MARKER_SEGMENTS as u32;
        indices.extend_from_slice(&[0, i + 1, next + 1]);
    }

    flat_triangle_mesh(positions, indices)
}

/// Triangulate one filled outline into its ring points plus triangle
/// indices. Returns `None` for shapes ear clipping cannot resolve.
pub fn triangulate_outline(outline: &Outline) -> Option<(Vec<[f32; 2]>, Vec<u32>)> {
    let mut coords_2d: Vec<f64> = Vec::new();
    let mut hole_indices: Vec<usize> = Vec::new();
    let mut points: Vec<[f32; 2]> = Vec::new();

    for (ring_index, ring) in std::iter::once(&outline.outer)
        .chain(outline.holes.iter())
        .enumerate()
    {
        let mut ring_points: &[[f32; 2]] = ring;
        if ring_points.len() > 1 && ring_points.first() == ring_points.last() {
            ring_points = &ring_points[..ring_points.len() - 1];
        }
        if ring_points.len() < 3 {
            if ring_index == 0 {
                return None;
            }
            continue;
        }
        if ring_index > 0 {
            hole_indices.push(points.len());
        }
        for point in ring_points {
            coords_2d.push(point[0] as f64);
            coords_2d.push(point[1] as f64);
            points.push(*point);
        }
    }

    match earcutr::earcut(&coords_2d, &hole_indices, 2) {
        Ok(triangles) if !triangles.is_empty() => {
            let indices = triangles.into_iter().map(|index| index as u32).collect();
            Some((points, indices))
        }
        Ok(_) => None,
        Err(_) => None,
    }
}

/// Merged flat mesh for a label string, centred on its bounding box.
///
/// Characters the font has no glyph for are skipped. Returns `None`
/// when nothing printable survives.
pub fn label_mesh(text: &str, font: &GlyphFont, size: f32) -> Option<Mesh> {
    let scale = size * LABEL_HEIGHT_FACTOR / font.units_per_em;
    let mut flat: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    let mut pen_x = 0.0_f32;

    for character in text.chars() {
        let Some(glyph) = font.glyph(character) else {
            warn!("Glyph font has no outline for {character:?}, skipping it");
            continue;
        };
        for outline in &glyph.outlines {
            if let Some((points, outline_indices)) = triangulate_outline(outline) {
                let base = flat.len() as u32;
                flat.extend(points.iter().map(|point| [point[0] + pen_x, point[1]]));
                indices.extend(outline_indices.into_iter().map(|index| index + base));
            }
        }
        pen_x += glyph.advance;
    }

    if flat.is_empty() {
        return None;
    }

    let (min, max) = bounds_2d(&flat);
    let centre = [(min[0] + max[0]) * 0.5, (min[1] + max[1]) * 0.5];
    let positions = flat
        .iter()
        .map(|point| {
            [
                (point[0] - centre[0]) * scale,
                0.0,
                // font +y becomes -z so text reads upright from above
                -(point[1] - centre[1]) * scale,
            ]
        })
        .collect();

    Some(flat_triangle_mesh(positions, indices))
}

/// Flat meshes for one vector icon, one per outline so the group keeps
/// its authored structure, re-centred on the icon's nominal box.
pub fn icon_meshes(icon: &Icon, scale: f32) -> Vec<Mesh> {
    let centre = [icon.nominal_size[0] * 0.5, icon.nominal_size[1] * 0.5];
    icon.outlines
        .iter()
        .filter_map(|outline| {
            let (points, indices) = triangulate_outline(outline)?;
            let positions = points
                .iter()
                .map(|point| {
                    [
                        (point[0] - centre[0]) * scale,
                        0.0,
                        -(point[1] - centre[1]) * scale,
                    ]
                })
                .collect();
            Some(flat_triangle_mesh(positions, indices))
        })
        .collect()
}

/// Scale factor mapping an icon's nominal box onto a pin footprint.
pub fn icon_scale(icon: &Icon, size: f32) -> f32 {
    let largest = icon.nominal_size[0].max(icon.nominal_size[1]).max(f32::EPSILON);
    ICON_SIZE_FACTOR * size / largest
}

fn bounds_2d(points: &[[f32; 2]]) -> ([f32; 2], [f32; 2]) {
    let mut min = [f32::MAX, f32::MAX];
    let mut max = [f32::MIN, f32::MIN];
    for point in points {
        min[0] = min[0].min(point[0]);
        min[1] = min[1].min(point[1]);
        max[0] = max[0].max(point[0]);
        max[1] = max[1].max(point[1]);
    }
    (min, max)
}

fn flat_triangle_mesh(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Mesh {
    let mut min = [f32::MAX, f32::MAX];
    let mut max = [f32::MIN, f32::MIN];
    for position in &positions {
        min[0] = min[0].min(position[0]);
        min[1] = min[1].min(position[2]);
        max[0] = max[0].max(position[0]);
        max[1] = max[1].max(position[2]);
    }
    let span = [
        (max[0] - min[0]).max(f32::EPSILON),
        (max[1] - min[1]).max(f32::EPSILON),
    ];
    let uvs: Vec<[f32; 2]> = positions
        .iter()
        .map(|position| {
            [
                (position[0] - min[0]) / span[0],
                (position[2] - min[1]) / span[1],
            ]
        })
        .collect();
    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::render::mesh::VertexAttributeValues;
    use std::collections::HashMap;

    fn square_ring(size: f32) -> Vec<[f32; 2]> {
        vec![[0.0, 0.0], [size, 0.0], [size, size], [0.0, size]]
    }

    fn positions_of(mesh: &Mesh) -> Vec<[f32; 3]> {
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("mesh has no float position attribute");
        };
        positions.clone()
    }

    fn square_glyph_font() -> GlyphFont {
        let glyph = crate::engine::assets::glyph_font::Glyph {
            advance: 1200.0,
            outlines: vec![Outline {
                outer: square_ring(1000.0),
                holes: vec![],
            }],
        };
        GlyphFont {
            units_per_em: 1000.0,
            glyphs: HashMap::from([('I', glyph)]),
        }
    }

    #[test]
    fn disc_is_a_flat_fan_of_marker_segments() {
        let disc = flat_disc_mesh(5.0);
        assert_eq!(disc.count_vertices(), MARKER_SEGMENTS + 1);
        assert_eq!(
            disc.indices().map(|indices| indices.len()),
            Some(MARKER_SEGMENTS * 3)
        );
        for position in positions_of(&disc).iter().skip(1) {
            let radius = (position[0] * position[0] + position[2] * position[2]).sqrt();
            assert_relative_eq!(radius, 5.0, epsilon = 1e-4);
            assert_eq!(position[1], 0.0);
        }
    }

    #[test]
    fn square_outline_becomes_two_triangles() {
        let outline = Outline {
            outer: square_ring(10.0),
            holes: vec![],
        };
        let (points, indices) = triangulate_outline(&outline).expect("square triangulates");
        assert_eq!(points.len(), 4);
        assert_eq!(indices.len(), 6);
    }

    #[test]
    fn closing_duplicate_point_is_dropped() {
        let mut ring = square_ring(10.0);
        ring.push(ring[0]);
        let outline = Outline {
            outer: ring,
            holes: vec![],
        };
        let (points, _) = triangulate_outline(&outline).expect("square triangulates");
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn hole_rings_survive_triangulation() {
        let outline = Outline {
            outer: square_ring(10.0),
            holes: vec![vec![[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0]]],
        };
        let (points, indices) = triangulate_outline(&outline).expect("ring with hole triangulates");
        assert_eq!(points.len(), 8);
        assert!(!indices.is_empty());
        assert_eq!(indices.len() % 3, 0);
        assert!(indices.iter().all(|&index| (index as usize) < points.len()));
    }

    #[test]
    fn degenerate_outer_ring_is_rejected() {
        let outline = Outline {
            outer: vec![[0.0, 0.0], [1.0, 1.0]],
            holes: vec![],
        };
        assert!(triangulate_outline(&outline).is_none());
    }

    #[test]
    fn label_mesh_is_centred_and_scaled() {
        let font = square_glyph_font();
        let mesh = label_mesh("I", &font, 10.0).expect("label builds");
        let positions = positions_of(&mesh);
        let max_x = positions.iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        let min_x = positions.iter().map(|p| p[0]).fold(f32::MAX, f32::min);
        let max_z = positions.iter().map(|p| p[2]).fold(f32::MIN, f32::max);
        let min_z = positions.iter().map(|p| p[2]).fold(f32::MAX, f32::min);
        assert_relative_eq!(max_x, -min_x, epsilon = 1e-4);
        assert_relative_eq!(max_z, -min_z, epsilon = 1e-4);
        // one em tall glyph at size 10 spans 10 * LABEL_HEIGHT_FACTOR
        assert_relative_eq!(max_z - min_z, 10.0 * LABEL_HEIGHT_FACTOR, epsilon = 1e-4);
        assert!(positions.iter().all(|p| p[1] == 0.0));
    }

    #[test]
    fn absent_glyphs_are_skipped() {
        let font = square_glyph_font();
        let with_missing = label_mesh("IX", &font, 10.0).expect("label builds");
        let reference = label_mesh("I", &font, 10.0).expect("label builds");
        assert_eq!(with_missing.count_vertices(), reference.count_vertices());
    }

    #[test]
    fn label_without_any_known_glyph_is_none() {
        let font = square_glyph_font();
        assert!(label_mesh("XYZ", &font, 10.0).is_none());
        assert!(label_mesh("", &font, 10.0).is_none());
    }

    #[test]
    fn icon_meshes_recentre_on_the_nominal_box() {
        let icon = Icon {
            nominal_size: [10.0, 10.0],
            outlines: vec![Outline {
                outer: square_ring(10.0),
                holes: vec![],
            }],
        };
        let meshes = icon_meshes(&icon, 2.0);
        assert_eq!(meshes.len(), 1);
        let positions = positions_of(&meshes[0]);
        let max_x = positions.iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        assert_relative_eq!(max_x, 10.0, epsilon = 1e-4);
        assert!(positions.iter().any(|p| p[0] < 0.0));
    }

    #[test]
    fn icon_scale_tracks_the_largest_dimension() {
        let icon = Icon {
            nominal_size: [600.0, 300.0],
            outlines: vec![],
        };
        assert_relative_eq!(icon_scale(&icon, 12.0), ICON_SIZE_FACTOR * 12.0 / 600.0);
    }
}
