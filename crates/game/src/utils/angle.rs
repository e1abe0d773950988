use std::f32::consts::{PI, TAU};

/// Normalize an angle into (-PI, PI].
///
/// Values already in range come back untouched. Non-finite input is returned
/// as is.
pub fn wrap_angle(radians: f32) -> f32 {
    if !radians.is_finite() || (radians > -PI && radians <= PI) {
        return radians;
    }

    // rem_euclid lands in [-PI, PI), fold the closed end over
    let wrapped = (radians + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { PI } else { wrapped }
}
