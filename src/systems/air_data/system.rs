use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;

use super::pipeline::{compute_air_relative_motion, warn_if_non_finite, AirDataInputs};
use crate::components::{
    AeroAngleRates, AirRelativeMotion, AtmosphereState, BodyGeometry, BodyKinematics,
    PublishAirData, WindState,
};
use crate::config::AirDataConfig;
use crate::resources::{keys, VariableStore};

/// Recomputes [`AirRelativeMotion`] for every entity carrying the input
/// components.
pub fn air_relative_motion_system(
    mut query: Query<(
        Entity,
        &BodyKinematics,
        &WindState,
        &AtmosphereState,
        &BodyGeometry,
        Option<&AeroAngleRates>,
        &mut AirRelativeMotion,
    )>,
    config: Res<AirDataConfig>,
) {
    for (entity, kinematics, wind, atmosphere, geometry, angle_rates, mut motion) in
        query.iter_mut()
    {
        let inputs = AirDataInputs {
            kinematics: kinematics.clone(),
            wind: wind.clone(),
            atmosphere: atmosphere.clone(),
            geometry: geometry.clone(),
            sea_level_density: config.sea_level_density,
            alpha_dot: angle_rates.map(|rates| rates.alpha_dot),
            beta_dot: angle_rates.map(|rates| rates.beta_dot),
        };

        let result = compute_air_relative_motion(&inputs);
        if config.warn_on_non_finite {
            warn_if_non_finite(&format!("{:?}", entity), &result);
        }
        *motion = result;
    }
}

/// Mirrors the air data of the [`PublishAirData`] entity into the
/// [`VariableStore`], for stages that still read by key. The configured
/// sea-level density is written as `rho_0` so `v_eas` stays consistent with it.
pub fn publish_air_data_system(
    query: Query<&AirRelativeMotion, With<PublishAirData>>,
    store: Option<ResMut<VariableStore>>,
    config: Res<AirDataConfig>,
) {
    let Some(mut store) = store else {
        return;
    };

    match query.get_single() {
        Ok(motion) => {
            store.set(keys::RHO_0, config.sea_level_density);
            motion.publish(&mut store);
        }
        Err(QuerySingleError::NoEntities(_)) => {}
        Err(QuerySingleError::MultipleEntities(_)) => {
            warn!("More than one entity tagged PublishAirData; store left unchanged");
        }
    }
}
