use airdata::components::{
    AeroAngleRates, AirRelativeMotion, AtmosphereState, BodyGeometry, BodyKinematics, WindState,
};
use airdata::resources::{keys, VariableStore};
use airdata::systems::AngleRateEstimator;
use airdata::utils::{deg_to_rad, ned_to_body_from_euler};
use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};

/// Store holding a full set of upstream inputs for a cruising light aircraft.
pub fn cruise_store() -> VariableStore {
    let mut store = VariableStore::with_standard_atmosphere();
    store.set(keys::XYZ_CG, Vector3::new(0.3, 0.0, -0.1));
    store.set(keys::UVW_G, Vector3::new(58.0, 1.5, 3.0));
    store.set(keys::UVW_W, Vector3::new(-4.0, 2.0, 0.0));
    store.set(keys::PQR_G, Vector3::new(0.02, -0.01, 0.03));
    store.set(keys::PQR_W, Vector3::zeros());
    store.set(keys::RHO, 1.112);
    store.set(keys::NU, 1.58e-5);
    // Banked 3°, pitched 2.5° up, heading 070°
    store.set(
        keys::T_HB,
        ned_to_body_from_euler(deg_to_rad(3.0), deg_to_rad(2.5), deg_to_rad(70.0)),
    );
    store.set(keys::C_S, 336.4);
    store.set(keys::CHAR_L, 1.6);
    store.set(keys::FLIGHTBODY_L, 8.28);
    store.set(keys::FLIGHTBODY_W, 11.0);
    store
}

pub fn cruise_kinematics() -> BodyKinematics {
    BodyKinematics {
        velocity: Vector3::new(60.0, 0.0, 3.0),
        angular_velocity: Vector3::new(0.0, 0.01, 0.0),
        ned_to_body: Matrix3::identity(),
    }
}

/// Spawn an aircraft carrying every air data input component.
pub fn spawn_aircraft(world: &mut World, kinematics: BodyKinematics) -> Entity {
    world
        .spawn((
            kinematics,
            WindState::default(),
            AtmosphereState::default(),
            BodyGeometry::cessna_172(),
            AeroAngleRates::default(),
            AngleRateEstimator::default(),
            AirRelativeMotion::default(),
        ))
        .id()
}
