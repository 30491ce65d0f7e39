use airdata::components::{AeroAngleRates, AirRelativeMotion, BodyKinematics, PublishAirData};
use airdata::config::{AirDataConfig, RateEstimation};
use airdata::plugins::AirDataPlugin;
use airdata::resources::{keys, VariableStore};
use approx::assert_relative_eq;
use bevy::prelude::*;
use nalgebra::Vector3;

use crate::common::{assert_air_data_finite, cruise_kinematics, spawn_aircraft};

const TIMESTEP: f64 = 0.01;

fn test_app(config: AirDataConfig) -> App {
    let mut app = App::new();
    app.insert_resource(Time::<Fixed>::from_seconds(TIMESTEP))
        .add_plugins(AirDataPlugin::with_config(config));
    app
}

fn step(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

#[test]
fn test_system_updates_air_data() {
    let mut app = test_app(AirDataConfig::default());
    let entity = spawn_aircraft(app.world_mut(), cruise_kinematics());

    step(&mut app);

    let motion = app.world().get::<AirRelativeMotion>(entity).unwrap();
    assert_air_data_finite(motion);
    assert_relative_eq!(motion.true_airspeed, (60.0_f64.powi(2) + 9.0).sqrt());
    assert_relative_eq!(motion.alpha, 0.05_f64.atan());
    assert_eq!(motion.alpha_dot_hat, Some(0.0));
}

#[test]
fn test_external_rates_are_not_overwritten() {
    let mut app = test_app(AirDataConfig::default());
    let entity = spawn_aircraft(app.world_mut(), cruise_kinematics());
    app.world_mut()
        .entity_mut(entity)
        .insert(AeroAngleRates {
            alpha_dot: 0.2,
            beta_dot: 0.0,
        });

    step(&mut app);
    step(&mut app);

    let world = app.world();
    assert_eq!(
        world.get::<AeroAngleRates>(entity).unwrap().alpha_dot,
        0.2
    );
    let motion = world.get::<AirRelativeMotion>(entity).unwrap();
    assert_relative_eq!(
        motion.alpha_dot_hat.unwrap(),
        0.2 * 8.28 / (2.0 * motion.true_airspeed)
    );
}

#[test]
fn test_finite_difference_rates() {
    let config = AirDataConfig {
        rate_estimation: RateEstimation::FiniteDifference,
        ..Default::default()
    };
    let mut app = test_app(config);
    let entity = spawn_aircraft(app.world_mut(), cruise_kinematics());

    step(&mut app);
    let first_alpha = app.world().get::<AirRelativeMotion>(entity).unwrap().alpha;
    assert_eq!(
        app.world().get::<AeroAngleRates>(entity).unwrap(),
        &AeroAngleRates::default()
    );

    // Pitch up: more downward body velocity.
    app.world_mut()
        .get_mut::<BodyKinematics>(entity)
        .unwrap()
        .velocity = Vector3::new(60.0, 0.0, 6.0);
    step(&mut app);

    let world = app.world();
    let motion = world.get::<AirRelativeMotion>(entity).unwrap();
    let rates = world.get::<AeroAngleRates>(entity).unwrap();
    let expected_alpha_dot = (motion.alpha - first_alpha) / TIMESTEP;

    assert!(rates.alpha_dot > 0.0);
    assert_relative_eq!(rates.alpha_dot, expected_alpha_dot, epsilon = 1e-9);
    assert_relative_eq!(rates.beta_dot, 0.0);
    assert_relative_eq!(
        motion.alpha_dot_hat.unwrap(),
        expected_alpha_dot * 8.28 / (2.0 * motion.true_airspeed),
        epsilon = 1e-9
    );
}

#[test]
fn test_publishes_tagged_entity_to_store() {
    let mut app = test_app(AirDataConfig::default());
    app.insert_resource(VariableStore::with_standard_atmosphere());
    let entity = spawn_aircraft(app.world_mut(), cruise_kinematics());
    app.world_mut().entity_mut(entity).insert(PublishAirData);

    step(&mut app);

    let motion = app.world().get::<AirRelativeMotion>(entity).unwrap().clone();
    let store = app.world().resource::<VariableStore>();
    assert_eq!(store.scalar(keys::V_TAS).unwrap(), motion.true_airspeed);
    assert_eq!(store.vector3(keys::UVW_A_H).unwrap(), motion.ned_air_velocity);
    assert_eq!(store.scalar(keys::RHO_0).unwrap(), 1.225);
}

#[test]
fn test_published_reference_density_follows_config() {
    let config = AirDataConfig {
        sea_level_density: 1.0,
        ..Default::default()
    };
    let mut app = test_app(config);
    app.insert_resource(VariableStore::with_standard_atmosphere());
    let entity = spawn_aircraft(app.world_mut(), cruise_kinematics());
    app.world_mut().entity_mut(entity).insert(PublishAirData);

    step(&mut app);

    let store = app.world().resource::<VariableStore>();
    let rho_0 = store.scalar(keys::RHO_0).unwrap();
    let v_tas = store.scalar(keys::V_TAS).unwrap();
    assert_eq!(rho_0, 1.0);
    assert_relative_eq!(
        store.scalar(keys::V_EAS).unwrap(),
        v_tas * 1.225 / rho_0,
        epsilon = 1e-12
    );
}

#[test]
fn test_rates_removed_from_store_when_unknown() {
    let mut app = test_app(AirDataConfig::default());
    app.insert_resource(VariableStore::default());
    let entity = spawn_aircraft(app.world_mut(), cruise_kinematics());
    app.world_mut().entity_mut(entity).insert(PublishAirData);

    step(&mut app);
    assert!(app
        .world()
        .resource::<VariableStore>()
        .contains(keys::ALPHA_DOT_HAT));

    app.world_mut().entity_mut(entity).remove::<AeroAngleRates>();
    step(&mut app);

    let store = app.world().resource::<VariableStore>();
    assert!(!store.contains(keys::ALPHA_DOT_HAT));
    assert!(!store.contains(keys::BETA_DOT_HAT));
}

#[test]
fn test_ambiguous_publisher_leaves_store_untouched() {
    let mut app = test_app(AirDataConfig::default());
    app.insert_resource(VariableStore::default());
    for _ in 0..2 {
        let entity = spawn_aircraft(app.world_mut(), cruise_kinematics());
        app.world_mut().entity_mut(entity).insert(PublishAirData);
    }

    step(&mut app);

    assert!(app.world().resource::<VariableStore>().is_empty());
}

#[test]
fn test_stationary_aircraft_yields_non_finite_angles() {
    let mut app = test_app(AirDataConfig::default());
    let entity = spawn_aircraft(app.world_mut(), BodyKinematics::default());

    step(&mut app);

    let motion = app.world().get::<AirRelativeMotion>(entity).unwrap();
    assert_eq!(motion.true_airspeed, 0.0);
    assert_eq!(motion.dynamic_pressure, 0.0);
    assert!(motion.alpha.is_nan());
    assert!(!motion.is_finite());
}
