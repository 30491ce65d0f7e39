use bevy::log::warn;

use super::formulas;
use crate::components::{
    AirRelativeMotion, AtmosphereState, BodyGeometry, BodyKinematics, WindState,
};
use crate::resources::{keys, VariableStore};
use crate::utils::Result;

/// Everything one air data step needs, already validated and typed.
#[derive(Debug, Clone)]
pub struct AirDataInputs {
    pub kinematics: BodyKinematics,
    pub wind: WindState,
    pub atmosphere: AtmosphereState,
    pub geometry: BodyGeometry,
    /// Sea-level reference density (kg/m³).
    pub sea_level_density: f64,
    /// Angle-of-attack rate (rad/s), when a differentiating stage supplies it.
    pub alpha_dot: Option<f64>,
    /// Sideslip rate (rad/s), when a differentiating stage supplies it.
    pub beta_dot: Option<f64>,
}

impl AirDataInputs {
    /// Read and shape-check every required input from the store up front.
    ///
    /// `alpha_dot` and `beta_dot` are each optional, but must be scalars when
    /// present.
    pub fn from_store(store: &VariableStore) -> Result<Self> {
        Ok(Self {
            kinematics: BodyKinematics {
                velocity: store.vector3(keys::UVW_G)?,
                angular_velocity: store.vector3(keys::PQR_G)?,
                ned_to_body: store.matrix3(keys::T_HB)?,
            },
            wind: WindState {
                velocity: store.vector3(keys::UVW_W)?,
                angular_velocity: store.vector3(keys::PQR_W)?,
            },
            atmosphere: AtmosphereState {
                density: store.scalar(keys::RHO)?,
                kinematic_viscosity: store.scalar(keys::NU)?,
                speed_of_sound: store.scalar(keys::C_S)?,
            },
            geometry: BodyGeometry {
                cg_offset: store.vector3(keys::XYZ_CG)?,
                length: store.scalar(keys::FLIGHTBODY_L)?,
                span: store.scalar(keys::FLIGHTBODY_W)?,
                characteristic_length: store.scalar(keys::CHAR_L)?,
            },
            sea_level_density: store.scalar(keys::RHO_0)?,
            alpha_dot: store.optional_scalar(keys::ALPHA_DOT)?,
            beta_dot: store.optional_scalar(keys::BETA_DOT)?,
        })
    }
}

/// Compute the complete air-relative state for one step, in dependency order.
pub fn compute_air_relative_motion(inputs: &AirDataInputs) -> AirRelativeMotion {
    let AirDataInputs {
        kinematics,
        wind,
        atmosphere,
        geometry,
        sea_level_density,
        alpha_dot,
        beta_dot,
    } = inputs;

    let air_velocity = formulas::relative_to_air(&kinematics.velocity, &wind.velocity);
    let air_angular_velocity =
        formulas::relative_to_air(&kinematics.angular_velocity, &wind.angular_velocity);
    let reference_air_velocity = formulas::transport_to_reference(
        &air_velocity,
        &air_angular_velocity,
        &geometry.cg_offset,
    );
    let v_tas = formulas::true_airspeed(&reference_air_velocity);
    let ned_air_velocity = formulas::body_to_ned(&kinematics.ned_to_body, &reference_air_velocity);

    AirRelativeMotion {
        air_velocity,
        air_angular_velocity,
        reference_air_velocity,
        true_airspeed: v_tas,
        alpha: formulas::angle_of_attack(&reference_air_velocity),
        beta: formulas::sideslip_angle(&reference_air_velocity, v_tas),
        mach: formulas::mach_number(v_tas, atmosphere.speed_of_sound),
        reynolds: formulas::reynolds_number(
            atmosphere.density,
            v_tas,
            geometry.characteristic_length,
            atmosphere.kinematic_viscosity,
        ),
        dynamic_pressure: formulas::dynamic_pressure(atmosphere.density, v_tas),
        equivalent_airspeed: formulas::equivalent_airspeed(
            v_tas,
            atmosphere.density,
            *sea_level_density,
        ),
        ned_air_velocity,
        flight_path_angle: formulas::flight_path_angle(&ned_air_velocity, v_tas),
        azimuth: formulas::azimuth(&ned_air_velocity),
        alpha_dot_hat: alpha_dot
            .map(|rate| formulas::dimensionless_rate(rate, geometry.length, v_tas)),
        beta_dot_hat: beta_dot.map(|rate| formulas::dimensionless_rate(rate, geometry.span, v_tas)),
        angular_velocity_hat: formulas::dimensionless_angular_velocity(
            &air_angular_velocity,
            geometry.span,
            geometry.length,
            v_tas,
        ),
    }
}

/// Log a warning naming every non-finite output.
pub(crate) fn warn_if_non_finite(label: &str, motion: &AirRelativeMotion) {
    let fields = motion.non_finite_fields();
    if !fields.is_empty() {
        warn!(
            "{}: non-finite air data ({}) at v_tas = {}",
            label,
            fields.join(", "),
            motion.true_airspeed
        );
    }
}
