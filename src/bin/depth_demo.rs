//! Run the hand detector over a recorded depth frame.
//!
//! Usage: `depth_demo <config.json>` — see [`hand_detector::config`] for
//! the config layout. Writes the debug overlay PNG and a JSON diagnostics
//! report.
use hand_detector::config::load_config;
use hand_detector::image::io::{load_depth_image, save_grayscale_u8, write_json_file};
use hand_detector::projection::{CameraPose, PinholeIntrinsics, Transform3D};
use hand_detector::HandDetector;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let depth = load_depth_image(&config.input)?;
    let frame = depth.as_view();

    // No calibration blob in the demo: assume an ideal pinhole with the
    // principal point at the image center.
    let intrinsics = PinholeIntrinsics {
        fx: frame.w as f32,
        fy: frame.w as f32,
        cx: frame.w as f32 * 0.5,
        cy: frame.h as f32 * 0.5,
    };
    let pose = CameraPose {
        view_transform: Transform3D::identity(),
        frame_to_origin: Transform3D::identity(),
    };

    let mut detector = HandDetector::new(config.params.clone());
    detector.set_hand_closed(config.hand_closed);
    detector.show_debug_info(true);

    let report = detector.process_with_diagnostics(frame, &pose, intrinsics);
    println!(
        "found={} depth={:.0}mm latency_ms={:.3}",
        report.hand.found, report.hand.depth_mm, report.hand.latency_ms
    );

    if let Some(overlay) = detector.debug_image() {
        save_grayscale_u8(overlay, &config.output.overlay_image)?;
    }
    write_json_file(&config.output.report_json, &report)?;
    Ok(())
}

fn usage() -> String {
    "usage: depth_demo <config.json>".to_string()
}
