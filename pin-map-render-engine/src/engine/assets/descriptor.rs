use bevy::prelude::*;
use std::collections::HashSet;
use std::sync::mpsc::{Receiver, Sender, channel};
use thiserror::Error;

use crate::constants::category::PinCategory;

/// Write half of the channel picked pin identifiers are reported through.
///
/// The engine only ever writes. A host that dropped its receiver simply
/// stops hearing about picks; reporting never fails the frame.
#[derive(Debug, Clone)]
pub struct SelectionSink {
    sender: Sender<String>,
}

impl SelectionSink {
    /// Create a sink plus the receiving end the host keeps.
    pub fn channel() -> (Self, Receiver<String>) {
        let (sender, receiver) = channel();
        (Self { sender }, receiver)
    }

    /// Report one picked pin identifier.
    pub fn report(&self, uuid: &str) {
        let _ = self.sender.send(uuid.to_string());
    }
}

/// One pin of the map data model.
#[derive(Debug, Clone)]
pub struct PinSpec {
    /// Host-side identifier, unique across the whole descriptor.
    pub uuid: String,
    pub x: f32,
    pub z: f32,
    pub category: PinCategory,
    /// Overrides the descriptor default when present.
    pub size: Option<f32>,
    /// Text drawn above the marker. Empty means the icon decoration
    /// is drawn instead.
    pub label: String,
    /// Animated pins pulse their marker opacity.
    pub animated: bool,
}

impl PinSpec {
    pub fn is_icon(&self) -> bool {
        self.label.is_empty()
    }
}

/// Compass placement plus its initial in-plane rotation in radians.
#[derive(Debug, Clone)]
pub struct CompassSpec {
    pub pin: PinSpec,
    pub initial_rotation: f32,
}

/// Complete description of one map scene, consumed once at startup.
#[derive(Resource, Debug, Clone)]
pub struct MapDescriptor {
    /// Ground texture, resolved relative to the asset root.
    pub image_path: String,
    /// Ground quad extent along x, world units.
    pub width: f32,
    /// Ground quad extent along z, world units.
    pub height: f32,
    /// Marker radius applied to pins without their own size.
    pub default_pin_size: f32,
    pub pins: Vec<PinSpec>,
    pub compass: Option<CompassSpec>,
    pub selection_sink: SelectionSink,
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("map dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("default pin size must be positive and finite, got {0}")]
    InvalidPinSize(f32),
    #[error("duplicate pin identifier `{0}`")]
    DuplicatePinId(String),
}

impl MapDescriptor {
    /// Reject descriptors the engine cannot place: non-positive
    /// dimensions or sizes, and identifier collisions.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(DescriptorError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.default_pin_size.is_finite() || self.default_pin_size <= 0.0 {
            return Err(DescriptorError::InvalidPinSize(self.default_pin_size));
        }
        let mut seen = HashSet::new();
        for pin in self.placements() {
            if !seen.insert(pin.uuid.as_str()) {
                return Err(DescriptorError::DuplicatePinId(pin.uuid.clone()));
            }
        }
        Ok(())
    }

    /// Every placement the engine builds: pins plus the optional compass.
    pub fn placements(&self) -> impl Iterator<Item = &PinSpec> {
        self.pins
            .iter()
            .chain(self.compass.as_ref().map(|compass| &compass.pin))
    }

    /// Per-pin size with the descriptor default as fallback.
    pub fn resolved_size(&self, pin: &PinSpec) -> f32 {
        pin.size.unwrap_or(self.default_pin_size)
    }

    /// Whether any placement renders label text.
    pub fn wants_labels(&self) -> bool {
        self.placements().any(|pin| !pin.is_icon())
    }

    /// Whether any placement renders the icon decoration.
    pub fn wants_icons(&self) -> bool {
        self.placements().any(|pin| pin.is_icon())
    }
}
