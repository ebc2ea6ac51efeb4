use pin_map_render_engine::{
    CompassSpec, MapDescriptor, PinCategory, PinSpec, SelectionSink, init,
};

fn main() {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async {
        run_viewer();
    });

    #[cfg(not(target_arch = "wasm32"))]
    run_viewer();
}

fn run_viewer() {
    let (sink, selections) = SelectionSink::channel();
    let descriptor = harbour_descriptor(sink);

    let viewer = match init(descriptor) {
        Ok(viewer) => viewer,
        Err(error) => {
            eprintln!("Invalid map descriptor: {error}");
            std::process::exit(1);
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    std::thread::spawn(move || {
        for uuid in selections {
            println!("Selected pin {uuid}");
        }
    });
    #[cfg(target_arch = "wasm32")]
    drop(selections);

    viewer.run();
}

/// Small harbour scene exercising labels, icons, sizes, the pulse and
/// the compass.
fn harbour_descriptor(sink: SelectionSink) -> MapDescriptor {
    MapDescriptor {
        image_path: "textures/harbour_map.png".to_string(),
        width: 1200.0,
        height: 800.0,
        default_pin_size: 14.0,
        pins: vec![
            pin("quay-north", -320.0, -180.0, PinCategory::Primary, "DOCK"),
            pin("fort-hill", 260.0, -140.0, PinCategory::Secondary, "FORT"),
            pin("green-park", 180.0, 220.0, PinCategory::Tertiary, "PARK"),
            PinSpec {
                animated: true,
                ..pin("buoy-east", 420.0, 60.0, PinCategory::Primary, "")
            },
            PinSpec {
                size: Some(18.0),
                ..pin("buoy-west", -400.0, 120.0, PinCategory::Secondary, "")
            },
        ],
        compass: Some(CompassSpec {
            pin: pin("compass-rose", -460.0, -300.0, PinCategory::Compass, ""),
            initial_rotation: 0.35,
        }),
        selection_sink: sink,
    }
}

fn pin(uuid: &str, x: f32, z: f32, category: PinCategory, label: &str) -> PinSpec {
    PinSpec {
        uuid: uuid.to_string(),
        x,
        z,
        category,
        size: None,
        label: label.to_string(),
        animated: false,
    }
}
