use airdata::components::AirRelativeMotion;
use approx::assert_relative_eq;
use nalgebra::Vector3;

/// Assert that every air data output is finite
#[track_caller]
pub fn assert_air_data_finite(motion: &AirRelativeMotion) {
    let bad = motion.non_finite_fields();
    assert!(bad.is_empty(), "Non-finite air data: {:?}", bad);
}

/// Assert that two vectors are approximately equal component-wise
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
