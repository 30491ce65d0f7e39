//! Closed-form air data relations.
//!
//! Nothing here guards against domain violations: a zero forward velocity,
//! a zero airspeed or an inverse-sine argument outside [-1, 1] produce NaN or
//! infinity, which callers see in the result.

use nalgebra::{Matrix3, Vector3};

/// Air-relative velocity (or angular velocity) from ground and wind values.
pub fn relative_to_air(ground: &Vector3<f64>, wind: &Vector3<f64>) -> Vector3<f64> {
    ground - wind
}

/// Transport the air-relative velocity from the CG to the reference point
/// through the angular-velocity lever arm.
pub fn transport_to_reference(
    air_velocity: &Vector3<f64>,
    air_angular_velocity: &Vector3<f64>,
    cg_offset: &Vector3<f64>,
) -> Vector3<f64> {
    let (u, v, w) = (air_velocity.x, air_velocity.y, air_velocity.z);
    let (p, q, r) = (
        air_angular_velocity.x,
        air_angular_velocity.y,
        air_angular_velocity.z,
    );
    let (x_cg, y_cg, z_cg) = (cg_offset.x, cg_offset.y, cg_offset.z);

    Vector3::new(
        u + r * y_cg + q * z_cg,
        v - p * z_cg + r * x_cg,
        w - q * x_cg + p * y_cg,
    )
}

pub fn true_airspeed(reference_air_velocity: &Vector3<f64>) -> f64 {
    reference_air_velocity.norm()
}

/// α = atan(w/u). Undefined (NaN or ±π/2) when u = 0.
pub fn angle_of_attack(reference_air_velocity: &Vector3<f64>) -> f64 {
    (reference_air_velocity.z / reference_air_velocity.x).atan()
}

/// β = asin(v/V). NaN when |v/V| > 1 or V = 0.
pub fn sideslip_angle(reference_air_velocity: &Vector3<f64>, true_airspeed: f64) -> f64 {
    (reference_air_velocity.y / true_airspeed).asin()
}

pub fn mach_number(true_airspeed: f64, speed_of_sound: f64) -> f64 {
    true_airspeed / speed_of_sound
}

pub fn reynolds_number(
    density: f64,
    true_airspeed: f64,
    characteristic_length: f64,
    kinematic_viscosity: f64,
) -> f64 {
    density * true_airspeed * characteristic_length / kinematic_viscosity
}

pub fn dynamic_pressure(density: f64, true_airspeed: f64) -> f64 {
    0.5 * density * true_airspeed.powi(2)
}

/// Airspeed scaled by the ratio of local to sea-level reference density.
pub fn equivalent_airspeed(true_airspeed: f64, density: f64, sea_level_density: f64) -> f64 {
    density / sea_level_density * true_airspeed
}

/// Rotate a body-axes vector into NED using the NED-to-body matrix.
pub fn body_to_ned(ned_to_body: &Matrix3<f64>, body: &Vector3<f64>) -> Vector3<f64> {
    ned_to_body.transpose() * body
}

/// γ = asin(-w_ned / V).
pub fn flight_path_angle(ned_air_velocity: &Vector3<f64>, true_airspeed: f64) -> f64 {
    (-ned_air_velocity.z / true_airspeed).asin()
}

/// χ = atan(v_ned / u_ned).
pub fn azimuth(ned_air_velocity: &Vector3<f64>) -> f64 {
    (ned_air_velocity.y / ned_air_velocity.x).atan()
}

/// Non-dimensionalise a rate by `reference_length / (2 V)`.
pub fn dimensionless_rate(rate: f64, reference_length: f64, true_airspeed: f64) -> f64 {
    rate * reference_length / (2.0 * true_airspeed)
}

/// (p̂, q̂, r̂): roll and yaw scale with span, pitch with length.
pub fn dimensionless_angular_velocity(
    air_angular_velocity: &Vector3<f64>,
    span: f64,
    length: f64,
    true_airspeed: f64,
) -> Vector3<f64> {
    Vector3::new(
        dimensionless_rate(air_angular_velocity.x, span, true_airspeed),
        dimensionless_rate(air_angular_velocity.y, length, true_airspeed),
        dimensionless_rate(air_angular_velocity.z, span, true_airspeed),
    )
}
