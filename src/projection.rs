//! Camera-geometry back-projection of the 2D anchor into world space.
//!
//! Per frame the sensor collaborator supplies the camera view transform,
//! the frame-to-origin transform and a calibrated pixel→unit-plane
//! mapping. The anchor pixel becomes a camera-space ray on the z = -1
//! plane, is scaled by the sampled depth and rotated into the session's
//! world reference frame from the camera pinhole position.
use log::debug;
use nalgebra::{Matrix3, Matrix4, Point2, Point3, Vector3};

/// Rigid 4×4 transform with the block accessors every caller needs.
#[derive(Clone, Copy, Debug)]
pub struct Transform3D {
    matrix: Matrix4<f32>,
}

impl Transform3D {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    pub fn from_matrix(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &Matrix4<f32> {
        &self.matrix
    }

    /// Translation block (fourth column).
    pub fn translation(&self) -> Vector3<f32> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Upper-left 3×3 rotation block.
    pub fn rotation3x3(&self) -> Matrix3<f32> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// `None` for a singular matrix.
    pub fn inverse(&self) -> Option<Transform3D> {
        self.matrix.try_inverse().map(Self::from_matrix)
    }

    /// `self * other` in column-vector convention.
    pub fn compose(&self, other: &Transform3D) -> Transform3D {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }
}

/// Per-frame camera transforms from the sensor collaborator. Read-only.
#[derive(Clone, Copy, Debug)]
pub struct CameraPose {
    pub view_transform: Transform3D,
    pub frame_to_origin: Transform3D,
}

/// Calibrated mapping from a pixel coordinate to a point on the camera's
/// unit plane (z = -1).
pub trait UnitPlaneMapping {
    fn pixel_to_unit_plane(&self, uv: (f32, f32)) -> (f32, f32);
}

impl<F> UnitPlaneMapping for F
where
    F: Fn((f32, f32)) -> (f32, f32),
{
    fn pixel_to_unit_plane(&self, uv: (f32, f32)) -> (f32, f32) {
        self(uv)
    }
}

/// Ideal pinhole intrinsics, the usual stand-in when no calibration blob
/// is available (demo tooling, tests).
#[derive(Clone, Copy, Debug)]
pub struct PinholeIntrinsics {
    pub fx: f32,
    pub fy: f32,
    pub cx: f32,
    pub cy: f32,
}

impl UnitPlaneMapping for PinholeIntrinsics {
    fn pixel_to_unit_plane(&self, (u, v): (f32, f32)) -> (f32, f32) {
        ((u - self.cx) / self.fx, (v - self.cy) / self.fy)
    }
}

/// Back-project the smoothed anchor and its sampled depth (millimetres)
/// into the world frame. `None` when the view transform is singular.
///
/// The rotation transpose mirrors the convention the estimator was
/// calibrated with on hardware; treat it as a calibration constant rather
/// than derivable algebra.
pub fn project_to_world<M: UnitPlaneMapping>(
    anchor: Point2<f32>,
    depth_mm: f32,
    pose: &CameraPose,
    mapping: &M,
) -> Option<Point3<f32>> {
    let Some(cam_to_ref) = pose.view_transform.inverse() else {
        debug!("view transform is singular; dropping frame");
        return None;
    };
    let cam_to_origin = cam_to_ref.compose(&pose.frame_to_origin);

    let pinhole = cam_to_origin.translation();
    let rotation = cam_to_origin.rotation3x3();

    let (x, y) = mapping.pixel_to_unit_plane((anchor.x, anchor.y));
    let mut dir_cam = Vector3::new(-x, -y, -1.0).normalize();
    dir_cam *= depth_mm * 0.001; // millimetres to metres

    let world_dir = rotation.transpose() * dir_cam;
    Some(Point3::from(pinhole + world_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix4, Point2};

    #[test]
    fn identity_pose_projects_along_negative_z() {
        let pose = CameraPose {
            view_transform: Transform3D::identity(),
            frame_to_origin: Transform3D::identity(),
        };
        let world = project_to_world(
            Point2::new(224.0, 225.0),
            500.0,
            &pose,
            &|_uv: (f32, f32)| (0.0, 0.0),
        )
        .unwrap();
        assert!((world.x).abs() < 1e-6);
        assert!((world.y).abs() < 1e-6);
        assert!((world.z + 0.5).abs() < 1e-6, "z = {}", world.z);
    }

    #[test]
    fn translation_offsets_the_pinhole() {
        let mut view = Matrix4::identity();
        // Camera sits at (1, 2, 3): view transform is the inverse offset.
        view[(0, 3)] = -1.0;
        view[(1, 3)] = -2.0;
        view[(2, 3)] = -3.0;
        let pose = CameraPose {
            view_transform: Transform3D::from_matrix(view),
            frame_to_origin: Transform3D::identity(),
        };
        let world = project_to_world(
            Point2::new(0.0, 0.0),
            1000.0,
            &pose,
            &|_uv: (f32, f32)| (0.0, 0.0),
        )
        .unwrap();
        assert!((world.x - 1.0).abs() < 1e-5);
        assert!((world.y - 2.0).abs() < 1e-5);
        assert!((world.z - 2.0).abs() < 1e-5); // 3 - 1m along -z
    }

    #[test]
    fn singular_view_yields_none() {
        let pose = CameraPose {
            view_transform: Transform3D::from_matrix(Matrix4::zeros()),
            frame_to_origin: Transform3D::identity(),
        };
        assert!(project_to_world(
            Point2::new(0.0, 0.0),
            500.0,
            &pose,
            &|_uv: (f32, f32)| (0.0, 0.0)
        )
        .is_none());
    }

    #[test]
    fn pinhole_intrinsics_center_maps_to_origin() {
        let k = PinholeIntrinsics {
            fx: 450.0,
            fy: 450.0,
            cx: 224.0,
            cy: 225.0,
        };
        assert_eq!(k.pixel_to_unit_plane((224.0, 225.0)), (0.0, 0.0));
        let (x, _) = k.pixel_to_unit_plane((674.0, 225.0));
        assert!((x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn transform_accessors_expose_the_blocks() {
        let mut m = Matrix4::identity();
        m[(0, 3)] = 4.0;
        m[(1, 3)] = 5.0;
        m[(2, 3)] = 6.0;
        let t = Transform3D::from_matrix(m);
        assert_eq!(t.translation(), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(t.rotation3x3(), Matrix3::identity());
        let inv = t.inverse().unwrap();
        let roundtrip = t.compose(&inv);
        assert!((roundtrip.matrix() - Matrix4::identity()).norm() < 1e-5);
    }
}
