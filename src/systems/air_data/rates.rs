use bevy::prelude::*;

use super::formulas;
use crate::components::{AeroAngleRates, AirRelativeMotion, BodyGeometry};
use crate::config::{AirDataConfig, RateEstimation};

/// Backward-difference estimate of α̇ and β̇ from successive air data steps.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AngleRateEstimator {
    previous: Option<(f64, f64)>,
}

impl AngleRateEstimator {
    /// Feed the latest angles. The first sample has no history and yields
    /// zero rates.
    pub fn update(&mut self, alpha: f64, beta: f64, dt: f64) -> AeroAngleRates {
        let rates = match self.previous {
            Some((prev_alpha, prev_beta)) => AeroAngleRates {
                alpha_dot: (alpha - prev_alpha) / dt,
                beta_dot: (beta - prev_beta) / dt,
            },
            None => AeroAngleRates::default(),
        };
        self.previous = Some((alpha, beta));
        rates
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}

/// Differentiates α and β over the fixed timestep and refreshes the
/// dimensionless attack and slip rates. Does nothing unless
/// [`RateEstimation::FiniteDifference`] is configured.
pub fn angle_rate_estimator_system(
    mut query: Query<(
        &mut AngleRateEstimator,
        &mut AeroAngleRates,
        &mut AirRelativeMotion,
        &BodyGeometry,
    )>,
    config: Res<AirDataConfig>,
    time: Res<Time<Fixed>>,
) {
    if config.rate_estimation != RateEstimation::FiniteDifference {
        return;
    }

    let dt = time.timestep().as_secs_f64();
    if dt <= 0.0 {
        return;
    }

    for (mut estimator, mut rates, mut motion, geometry) in query.iter_mut() {
        *rates = estimator.update(motion.alpha, motion.beta, dt);

        let v_tas = motion.true_airspeed;
        motion.alpha_dot_hat = Some(formulas::dimensionless_rate(
            rates.alpha_dot,
            geometry.length,
            v_tas,
        ));
        motion.beta_dot_hat = Some(formulas::dimensionless_rate(
            rates.beta_dot,
            geometry.span,
            v_tas,
        ));
    }
}
