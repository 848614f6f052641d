use nalgebra::Matrix3;
use std::f64::consts::FRAC_PI_2;

/// Below this `cos(roty)` the x and z axes are treated as aligned.
const GIMBAL_LOCK_EPSILON: f64 = 1e-9;

/// Euler angles in radians, in the convention the renderer applies them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub rotx: f64,
    pub roty: f64,
    pub rotz: f64,
}

#[rustfmt::skip]
pub fn rotation_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, -s,
        0.0, s, c,
    )
}

#[rustfmt::skip]
pub fn rotation_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    )
}

#[rustfmt::skip]
pub fn rotation_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Orientation of the disc closing a segment.
///
/// Extrinsic rotations about x by π/2, then z by `rotz`, then y by `roty`:
/// `Ry(roty) · Rz(rotz) · Rx(π/2)`.
pub fn shoe_rotation_matrix(segment: &Rotation) -> Matrix3<f64> {
    rotation_y(segment.roty) * rotation_z(segment.rotz) * rotation_x(FRAC_PI_2)
}

/// Extracts extrinsic `z, y, x` Euler angles, i.e. the angles satisfying
/// `m = Rx(rotx) · Ry(roty) · Rz(rotz)`.
///
/// Multiplied out:
///
/// ```text
/// m02 =  sin(roty)
/// m00 =  cos(roty) cos(rotz)    m01 = -cos(roty) sin(rotz)
/// m22 =  cos(rotx) cos(roty)    m12 = -sin(rotx) cos(roty)
/// ```
///
/// `roty` lies in [-π/2, π/2]. At gimbal lock (`cos(roty) = 0`) only
/// `rotz - rotx` or `rotz + rotx` is defined; `rotx` is pinned to zero and
/// `rotz` recovered from `m10 = sin(rotz)`, `m11 = cos(rotz)`.
pub fn euler_zyx_extrinsic(m: &Matrix3<f64>) -> Rotation {
    let sin_y = m[(0, 2)].clamp(-1.0, 1.0);
    let roty = sin_y.asin();
    let cos_y = m[(0, 0)].hypot(m[(0, 1)]);

    if cos_y > GIMBAL_LOCK_EPSILON {
        Rotation {
            rotx: (-m[(1, 2)]).atan2(m[(2, 2)]),
            roty,
            rotz: (-m[(0, 1)]).atan2(m[(0, 0)]),
        }
    } else {
        Rotation {
            rotx: 0.0,
            roty,
            rotz: m[(1, 0)].atan2(m[(1, 1)]),
        }
    }
}
