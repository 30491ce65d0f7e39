use nalgebra::{Matrix3, Rotation3};

/// Angles in configuration and fixtures are given in degrees.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// NED-to-body direction cosine matrix for the given Euler angles (radians).
///
/// `Rotation3::from_euler_angles` yields the body-to-NED rotation (yaw, then
/// pitch, then roll), so the NED-to-body matrix is its transpose.
pub fn ned_to_body_from_euler(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    Rotation3::from_euler_angles(roll, pitch, yaw)
        .matrix()
        .transpose()
}

/// Check that `m` is orthonormal (mᵀ·m = I) within `tolerance`.
pub fn is_orthonormal(m: &Matrix3<f64>, tolerance: f64) -> bool {
    let residual = m.transpose() * m - Matrix3::identity();
    residual.iter().all(|x| x.abs() <= tolerance)
}
