use nalgebra::Point3;
use serde::Serialize;

/// Per-frame output of the detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandResult {
    pub found: bool,
    /// 3D hand position in the session's world reference frame (metres).
    pub position: Point3<f32>,
    /// Smoothed 2D anchor in pixel coordinates.
    pub anchor: (f32, f32),
    /// Averaged hand depth in millimetres (0 when invalid).
    pub depth_mm: f32,
    /// Gesture state the frame was processed under.
    pub hand_closed: bool,
    pub latency_ms: f64,
}

impl Default for HandResult {
    fn default() -> Self {
        Self {
            found: false,
            position: Point3::origin(),
            anchor: (0.0, 0.0),
            depth_mm: 0.0,
            hand_closed: false,
            latency_ms: 0.0,
        }
    }
}
