use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::{keys, VariableStore};
use crate::utils::{
    PhysicalConstants, ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_KINEMATIC_VISCOSITY, ISA_SEA_LEVEL_TEMP,
};

/// Ground-relative motion of the flight body, expressed in body axes.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct BodyKinematics {
    /// Ground-relative linear velocity (u, v, w) in m/s.
    pub velocity: Vector3<f64>,
    /// Ground-relative angular velocity (p, q, r) in rad/s.
    pub angular_velocity: Vector3<f64>,
    /// NED-to-body rotation matrix. Its transpose takes body vectors to NED.
    pub ned_to_body: Matrix3<f64>,
}

impl Default for BodyKinematics {
    fn default() -> Self {
        Self {
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            ned_to_body: Matrix3::identity(),
        }
    }
}

/// Motion of the local air mass, expressed in body axes.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindState {
    /// Wind linear velocity (m/s).
    pub velocity: Vector3<f64>,
    /// Wind angular velocity (rad/s).
    pub angular_velocity: Vector3<f64>,
}

/// Local atmospheric properties at the body's position.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphereState {
    /// Air density (kg/m³).
    pub density: f64,
    /// Kinematic viscosity (m²/s).
    pub kinematic_viscosity: f64,
    /// Local speed of sound (m/s).
    pub speed_of_sound: f64,
}

impl Default for AtmosphereState {
    /// ISA sea-level conditions.
    fn default() -> Self {
        Self {
            density: ISA_SEA_LEVEL_DENSITY,
            kinematic_viscosity: ISA_SEA_LEVEL_KINEMATIC_VISCOSITY,
            speed_of_sound: PhysicalConstants::default().speed_of_sound(ISA_SEA_LEVEL_TEMP),
        }
    }
}

/// Body dimensions used to transport and non-dimensionalise air data.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct BodyGeometry {
    /// Offset (x, y, z) between the centre of gravity and the air data
    /// reference point, in body axes (m).
    pub cg_offset: Vector3<f64>,
    /// Body length, used for pitch-plane rates (m).
    pub length: f64,
    /// Body span, used for roll and yaw rates (m).
    pub span: f64,
    /// Characteristic length for the Reynolds number (m).
    pub characteristic_length: f64,
}

impl BodyGeometry {
    pub fn new(cg_offset: Vector3<f64>, length: f64, span: f64, characteristic_length: f64) -> Self {
        Self {
            cg_offset,
            length,
            span,
            characteristic_length,
        }
    }

    pub fn twin_otter() -> Self {
        Self::new(Vector3::zeros(), 15.77, 19.8, 1.98)
    }

    pub fn cessna_172() -> Self {
        Self::new(Vector3::zeros(), 8.28, 11.0, 1.6)
    }
}

impl Default for BodyGeometry {
    fn default() -> Self {
        Self::twin_otter()
    }
}

/// Time derivatives of angle of attack and sideslip (rad/s).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AeroAngleRates {
    pub alpha_dot: f64,
    pub beta_dot: f64,
}

/// Marks an entity whose air data is mirrored into the [`VariableStore`].
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PublishAirData;

/// Motion of the flight body relative to the air mass and the quantities
/// derived from it.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirRelativeMotion {
    /// Air-relative linear velocity at the CG, body axes (m/s).
    pub air_velocity: Vector3<f64>,
    /// Air-relative angular velocity, body axes (rad/s).
    pub air_angular_velocity: Vector3<f64>,
    /// Air-relative velocity at the reference point, body axes (m/s).
    pub reference_air_velocity: Vector3<f64>,
    /// True airspeed (m/s).
    pub true_airspeed: f64,
    /// Angle of attack (α) in radians.
    pub alpha: f64,
    /// Sideslip angle (β) in radians.
    pub beta: f64,
    pub mach: f64,
    pub reynolds: f64,
    /// Dynamic pressure (Pa).
    pub dynamic_pressure: f64,
    /// Equivalent airspeed (m/s).
    pub equivalent_airspeed: f64,
    /// Air-relative velocity in the NED frame (m/s).
    pub ned_air_velocity: Vector3<f64>,
    /// Air-relative flight-path angle (γ) in radians.
    pub flight_path_angle: f64,
    /// Air-relative azimuth (χ) in radians.
    pub azimuth: f64,
    /// Dimensionless attack rate, present only when α̇ is known.
    pub alpha_dot_hat: Option<f64>,
    /// Dimensionless slip rate, present only when β̇ is known.
    pub beta_dot_hat: Option<f64>,
    /// Dimensionless angular rates (p̂, q̂, r̂).
    pub angular_velocity_hat: Vector3<f64>,
}

impl Default for AirRelativeMotion {
    fn default() -> Self {
        Self {
            air_velocity: Vector3::zeros(),
            air_angular_velocity: Vector3::zeros(),
            reference_air_velocity: Vector3::zeros(),
            true_airspeed: 0.0,
            alpha: 0.0,
            beta: 0.0,
            mach: 0.0,
            reynolds: 0.0,
            dynamic_pressure: 0.0,
            equivalent_airspeed: 0.0,
            ned_air_velocity: Vector3::zeros(),
            flight_path_angle: 0.0,
            azimuth: 0.0,
            alpha_dot_hat: None,
            beta_dot_hat: None,
            angular_velocity_hat: Vector3::zeros(),
        }
    }
}

impl AirRelativeMotion {
    /// Names of the quantities that came out NaN or infinite.
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        let vectors = [
            (keys::UVW_A, &self.air_velocity),
            (keys::PQR_A, &self.air_angular_velocity),
            (keys::UVW_A_REF, &self.reference_air_velocity),
            (keys::UVW_A_H, &self.ned_air_velocity),
            (keys::PQR_A_HAT, &self.angular_velocity_hat),
        ];
        let scalars = [
            (keys::V_TAS, Some(self.true_airspeed)),
            (keys::ALPHA, Some(self.alpha)),
            (keys::BETA, Some(self.beta)),
            (keys::MACHN, Some(self.mach)),
            (keys::RE, Some(self.reynolds)),
            (keys::Q_INF, Some(self.dynamic_pressure)),
            (keys::V_EAS, Some(self.equivalent_airspeed)),
            (keys::GAMMA_A, Some(self.flight_path_angle)),
            (keys::ZAI_A, Some(self.azimuth)),
            (keys::ALPHA_DOT_HAT, self.alpha_dot_hat),
            (keys::BETA_DOT_HAT, self.beta_dot_hat),
        ];

        vectors
            .into_iter()
            .filter(|(_, v)| v.iter().any(|x| !x.is_finite()))
            .map(|(name, _)| name)
            .chain(
                scalars
                    .into_iter()
                    .filter(|(_, x)| x.is_some_and(|x| !x.is_finite()))
                    .map(|(name, _)| name),
            )
            .collect()
    }

    pub fn is_finite(&self) -> bool {
        self.non_finite_fields().is_empty()
    }

    /// Write every output under its fixed key. Unknown dimensionless attack
    /// and slip rates are removed so no earlier value lingers.
    pub fn publish(&self, store: &mut VariableStore) {
        store.set(keys::UVW_A, self.air_velocity);
        store.set(keys::PQR_A, self.air_angular_velocity);
        store.set(keys::UVW_A_REF, self.reference_air_velocity);
        store.set(keys::V_TAS, self.true_airspeed);
        store.set(keys::ALPHA, self.alpha);
        store.set(keys::BETA, self.beta);
        store.set(keys::MACHN, self.mach);
        store.set(keys::RE, self.reynolds);
        store.set(keys::Q_INF, self.dynamic_pressure);
        store.set(keys::V_EAS, self.equivalent_airspeed);
        store.set(keys::UVW_A_H, self.ned_air_velocity);
        store.set(keys::GAMMA_A, self.flight_path_angle);
        store.set(keys::ZAI_A, self.azimuth);
        match self.alpha_dot_hat {
            Some(alpha_dot_hat) => store.set(keys::ALPHA_DOT_HAT, alpha_dot_hat),
            None => {
                store.remove(keys::ALPHA_DOT_HAT);
            }
        }
        match self.beta_dot_hat {
            Some(beta_dot_hat) => store.set(keys::BETA_DOT_HAT, beta_dot_hat),
            None => {
                store.remove(keys::BETA_DOT_HAT);
            }
        }
        store.set(keys::PQR_A_HAT, self.angular_velocity_hat);
    }
}
