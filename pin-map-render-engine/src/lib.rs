//! Interactive 2.5D map viewer.
//!
//! A host hands [`init`] a [`MapDescriptor`]: a ground image, the map
//! extents, a set of labelled or iconic pins and an optional compass.
//! The engine renders the image on a flat quad under a top-down
//! camera, places a marker disc plus decoration per pin, and reports
//! clicked pin identifiers through the descriptor's selection sink.
//! While the viewer runs, the returned [`ControlHandle`] can rotate
//! the compass or shut the viewer down from any thread.

pub mod constants;
pub mod engine;
pub mod host;
pub mod tools;

use bevy::app::{App, AppExit};

use crate::engine::core::app_setup::create_app;

pub use crate::constants::category::PinCategory;
pub use crate::engine::assets::descriptor::{
    CompassSpec, DescriptorError, MapDescriptor, PinSpec, SelectionSink,
};
pub use crate::host::control::ControlHandle;

/// A viewer ready to run: the assembled app plus its control handle.
pub struct MapViewer {
    app: App,
    handle: ControlHandle,
}

impl MapViewer {
    /// Remote for this viewer. Clones stay valid until shutdown.
    pub fn handle(&self) -> ControlHandle {
        self.handle.clone()
    }

    /// Hand the current thread to the frame loop until shutdown.
    pub fn run(mut self) -> AppExit {
        self.app.run()
    }
}

/// Validate a descriptor and assemble a viewer for it.
///
/// Returns immediately. Asset loads and pin placement finish inside
/// the running viewer, after which the scene is live; the handle is
/// usable from the moment this returns and commands issued before the
/// scene is ready queue up.
pub fn init(descriptor: MapDescriptor) -> Result<MapViewer, DescriptorError> {
    descriptor.validate()?;
    let (handle, command_queue) = ControlHandle::new();
    let app = create_app(descriptor, command_queue);
    Ok(MapViewer { app, handle })
}
