use bevy::log::debug;
use nalgebra::{Matrix3, Vector3};

use super::formulas;
use crate::components::AirRelativeMotion;
use crate::resources::{keys, Variable, VariableStore};
use crate::utils::{PhysicalConstants, Result};

/// Computes air-relative motion against a shared [`VariableStore`].
///
/// The inputs listed in [`AirRelativeMotionCalculator::new`] are bound once at
/// construction, so a calculator describes a single simulation step. Every
/// other operation reads what it needs from the store, including values
/// published by earlier operations, and publishes its own result under a
/// fixed key. Operations must therefore be called in dependency order;
/// [`AirRelativeMotionCalculator::run`] does that.
pub struct AirRelativeMotionCalculator<'a> {
    store: &'a mut VariableStore,
    constants: PhysicalConstants,
    xyz_cg: Vector3<f64>,
    uvw_g: Vector3<f64>,
    uvw_w: Vector3<f64>,
    pqr_g: Vector3<f64>,
    pqr_w: Vector3<f64>,
    rho: f64,
    rho_0: f64,
    nu: f64,
    t_hb: Matrix3<f64>,
}

impl<'a> AirRelativeMotionCalculator<'a> {
    /// Bind the step inputs. Fails if any is missing or has the wrong shape.
    pub fn new(store: &'a mut VariableStore) -> Result<Self> {
        Ok(Self {
            constants: *store.constants(),
            xyz_cg: store.vector3(keys::XYZ_CG)?,
            uvw_g: store.vector3(keys::UVW_G)?,
            uvw_w: store.vector3(keys::UVW_W)?,
            pqr_g: store.vector3(keys::PQR_G)?,
            pqr_w: store.vector3(keys::PQR_W)?,
            rho: store.scalar(keys::RHO)?,
            rho_0: store.scalar(keys::RHO_0)?,
            nu: store.scalar(keys::NU)?,
            t_hb: store.matrix3(keys::T_HB)?,
            store,
        })
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn store(&self) -> &VariableStore {
        self.store
    }

    fn publish<V>(&mut self, key: &str, value: V) -> V
    where
        V: Into<Variable> + Copy + std::fmt::Debug,
    {
        debug!("Publishing {} = {:?}", key, value);
        self.store.set(key, value);
        value
    }

    /// `uvw_a`: ground velocity minus wind velocity.
    pub fn air_velocity(&mut self) -> Vector3<f64> {
        let uvw_a = formulas::relative_to_air(&self.uvw_g, &self.uvw_w);
        self.publish(keys::UVW_A, uvw_a)
    }

    /// `pqr_a`: ground angular rate minus wind angular rate.
    pub fn air_angular_velocity(&mut self) -> Vector3<f64> {
        let pqr_a = formulas::relative_to_air(&self.pqr_g, &self.pqr_w);
        self.publish(keys::PQR_A, pqr_a)
    }

    /// `uvw_a_ref`: air velocity transported from the CG to the reference point.
    pub fn reference_air_velocity(&mut self) -> Result<Vector3<f64>> {
        let uvw_a = self.store.vector3(keys::UVW_A)?;
        let pqr_a = self.store.vector3(keys::PQR_A)?;
        let uvw_a_ref = formulas::transport_to_reference(&uvw_a, &pqr_a, &self.xyz_cg);
        Ok(self.publish(keys::UVW_A_REF, uvw_a_ref))
    }

    /// `v_tas`
    pub fn true_airspeed(&mut self) -> Result<f64> {
        let uvw_a_ref = self.store.vector3(keys::UVW_A_REF)?;
        Ok(self.publish(keys::V_TAS, formulas::true_airspeed(&uvw_a_ref)))
    }

    /// `alpha`
    pub fn angle_of_attack(&mut self) -> Result<f64> {
        let uvw_a_ref = self.store.vector3(keys::UVW_A_REF)?;
        Ok(self.publish(keys::ALPHA, formulas::angle_of_attack(&uvw_a_ref)))
    }

    /// `beta`
    pub fn sideslip_angle(&mut self) -> Result<f64> {
        let uvw_a_ref = self.store.vector3(keys::UVW_A_REF)?;
        let v_tas = self.store.scalar(keys::V_TAS)?;
        Ok(self.publish(keys::BETA, formulas::sideslip_angle(&uvw_a_ref, v_tas)))
    }

    /// `machn`, using the speed of sound `c_s` from the atmosphere stage.
    pub fn mach_number(&mut self) -> Result<f64> {
        let v_tas = self.store.scalar(keys::V_TAS)?;
        let c_s = self.store.scalar(keys::C_S)?;
        Ok(self.publish(keys::MACHN, formulas::mach_number(v_tas, c_s)))
    }

    /// `re`, based on the characteristic length `char_l`.
    pub fn reynolds_number(&mut self) -> Result<f64> {
        let char_l = self.store.scalar(keys::CHAR_L)?;
        let v_tas = self.store.scalar(keys::V_TAS)?;
        let re = formulas::reynolds_number(self.rho, v_tas, char_l, self.nu);
        Ok(self.publish(keys::RE, re))
    }

    /// `q_inf`
    pub fn dynamic_pressure(&mut self) -> Result<f64> {
        let v_tas = self.store.scalar(keys::V_TAS)?;
        Ok(self.publish(keys::Q_INF, formulas::dynamic_pressure(self.rho, v_tas)))
    }

    /// `v_eas`
    pub fn equivalent_airspeed(&mut self) -> Result<f64> {
        let v_tas = self.store.scalar(keys::V_TAS)?;
        let v_eas = formulas::equivalent_airspeed(v_tas, self.rho, self.rho_0);
        Ok(self.publish(keys::V_EAS, v_eas))
    }

    /// `uvw_a_h`: reference-point air velocity in the NED frame.
    pub fn ned_air_velocity(&mut self) -> Result<Vector3<f64>> {
        let uvw_a_ref = self.store.vector3(keys::UVW_A_REF)?;
        let uvw_a_h = formulas::body_to_ned(&self.t_hb, &uvw_a_ref);
        Ok(self.publish(keys::UVW_A_H, uvw_a_h))
    }

    /// `gamma_a`
    pub fn ned_flight_path_angle(&mut self) -> Result<f64> {
        let uvw_a_h = self.store.vector3(keys::UVW_A_H)?;
        let v_tas = self.store.scalar(keys::V_TAS)?;
        let gamma_a = formulas::flight_path_angle(&uvw_a_h, v_tas);
        Ok(self.publish(keys::GAMMA_A, gamma_a))
    }

    /// `zai_a`
    pub fn ned_azimuth(&mut self) -> Result<f64> {
        let uvw_a_h = self.store.vector3(keys::UVW_A_H)?;
        Ok(self.publish(keys::ZAI_A, formulas::azimuth(&uvw_a_h)))
    }

    /// `alpha_dot_hat`. Needs `alpha_dot` from a differentiating stage.
    pub fn dimensionless_attack_rate(&mut self) -> Result<f64> {
        let flightbody_l = self.store.scalar(keys::FLIGHTBODY_L)?;
        let alpha_dot = self.store.scalar(keys::ALPHA_DOT)?;
        let v_tas = self.store.scalar(keys::V_TAS)?;
        let alpha_dot_hat = formulas::dimensionless_rate(alpha_dot, flightbody_l, v_tas);
        Ok(self.publish(keys::ALPHA_DOT_HAT, alpha_dot_hat))
    }

    /// `beta_dot_hat`. Needs `beta_dot` from a differentiating stage.
    pub fn dimensionless_slip_rate(&mut self) -> Result<f64> {
        let flightbody_w = self.store.scalar(keys::FLIGHTBODY_W)?;
        let beta_dot = self.store.scalar(keys::BETA_DOT)?;
        let v_tas = self.store.scalar(keys::V_TAS)?;
        let beta_dot_hat = formulas::dimensionless_rate(beta_dot, flightbody_w, v_tas);
        Ok(self.publish(keys::BETA_DOT_HAT, beta_dot_hat))
    }

    /// `pqr_a_hat`
    pub fn dimensionless_air_angular_velocity(&mut self) -> Result<Vector3<f64>> {
        let pqr_a = self.store.vector3(keys::PQR_A)?;
        let v_tas = self.store.scalar(keys::V_TAS)?;
        let flightbody_w = self.store.scalar(keys::FLIGHTBODY_W)?;
        let flightbody_l = self.store.scalar(keys::FLIGHTBODY_L)?;
        let pqr_a_hat =
            formulas::dimensionless_angular_velocity(&pqr_a, flightbody_w, flightbody_l, v_tas);
        Ok(self.publish(keys::PQR_A_HAT, pqr_a_hat))
    }

    /// Run every operation in dependency order.
    ///
    /// The dimensionless attack and slip rates are skipped while no
    /// `alpha_dot` / `beta_dot` has been published.
    pub fn run(&mut self) -> Result<AirRelativeMotion> {
        let air_velocity = self.air_velocity();
        let air_angular_velocity = self.air_angular_velocity();
        let reference_air_velocity = self.reference_air_velocity()?;
        let true_airspeed = self.true_airspeed()?;
        let alpha = self.angle_of_attack()?;
        let beta = self.sideslip_angle()?;
        let mach = self.mach_number()?;
        let reynolds = self.reynolds_number()?;
        let dynamic_pressure = self.dynamic_pressure()?;
        let equivalent_airspeed = self.equivalent_airspeed()?;
        let ned_air_velocity = self.ned_air_velocity()?;
        let flight_path_angle = self.ned_flight_path_angle()?;
        let azimuth = self.ned_azimuth()?;
        let alpha_dot_hat = if self.store.contains(keys::ALPHA_DOT) {
            Some(self.dimensionless_attack_rate()?)
        } else {
            None
        };
        let beta_dot_hat = if self.store.contains(keys::BETA_DOT) {
            Some(self.dimensionless_slip_rate()?)
        } else {
            None
        };
        let angular_velocity_hat = self.dimensionless_air_angular_velocity()?;

        Ok(AirRelativeMotion {
            air_velocity,
            air_angular_velocity,
            reference_air_velocity,
            true_airspeed,
            alpha,
            beta,
            mach,
            reynolds,
            dynamic_pressure,
            equivalent_airspeed,
            ned_air_velocity,
            flight_path_angle,
            azimuth,
            alpha_dot_hat,
            beta_dot_hat,
            angular_velocity_hat,
        })
    }
}
