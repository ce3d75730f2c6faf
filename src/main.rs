use hand_detector::image::DepthU16;
use hand_detector::projection::{CameraPose, Transform3D};
use hand_detector::{HandDetector, HandParams};

fn main() {
    // Demo stub: creates a fake depth frame and runs the detector
    let w = 448usize;
    let h = 450usize;
    let stride = w; // tightly packed
    let depth = vec![900u16; w * h];
    let frame = DepthU16 {
        w,
        h,
        stride,
        data: &depth,
    };

    let pose = CameraPose {
        view_transform: Transform3D::identity(),
        frame_to_origin: Transform3D::identity(),
    };

    let mut det = HandDetector::new(HandParams::default());
    let res = det.process(frame, &pose, |_uv: (f32, f32)| (0.0, 0.0));
    println!("found={} latency_ms={:.3}", res.found, res.latency_ms);
}
