use num_traits::Float;

use crate::scalar::Angle;
use crate::vector::FixedVector;

pub const PITCH: usize = 0;
pub const YAW: usize = 1;
pub const ROLL: usize = 2;

/// Pitch is kept off the poles.
pub const PITCH_LIMIT: f64 = 89.0;
pub const YAW_LIMIT: f64 = 180.0;
pub const FULL_TURN: f64 = 360.0;
const QUARTER_TURN: f64 = 90.0;

fn clamp<T: Angle>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

/// Camera style orientation helpers. Index [`PITCH`] holds pitch, [`YAW`]
/// holds yaw and [`ROLL`] holds roll, all in degrees; the direction forms read
/// the same slots as x, y and z.
impl<T: Angle> FixedVector<T, 3> {
    /// Wraps pitch and yaw into [-180, 180] with the IEEE remainder and levels
    /// roll. A non-finite pitch or yaw becomes 0.
    pub fn normalize_angle(&mut self) {
        let turn = T::constant(FULL_TURN);
        for axis in [PITCH, YAW] {
            let angle = self[axis];
            self[axis] = if angle.is_finite() {
                angle.remainder(turn)
            } else {
                T::zero()
            };
        }
        self[ROLL] = T::zero();
    }

    pub fn normalized_angle(&self) -> Self {
        let mut copy = self.copy();
        copy.normalize_angle();
        copy
    }

    /// Clamps pitch into [-89, 89] and yaw into [-180, 180], levels roll.
    /// NaN passes through unclamped.
    pub fn clamp_angle(&mut self) {
        let pitch = T::constant(PITCH_LIMIT);
        let yaw = T::constant(YAW_LIMIT);
        self[PITCH] = clamp(self[PITCH], -pitch, pitch);
        self[YAW] = clamp(self[YAW], -yaw, yaw);
        self[ROLL] = T::zero();
    }

    /// Divides pitch and yaw by the full three component length and leaves
    /// roll as it is. A zero length vector becomes (0, 0, 1).
    ///
    /// See [`normalize`](Self::normalize) for the form that scales all three
    /// components.
    pub fn normalize_length(&mut self) {
        let length = self.length();
        if length != T::zero() {
            self[PITCH] = self[PITCH] / length;
            self[YAW] = self[YAW] / length;
        } else {
            self.set_degenerate();
        }
    }

    pub fn normalized_length(&self) -> Self {
        let mut copy = self.copy();
        copy.normalize_length();
        copy
    }

    /// Scales the vector to unit length. A zero length vector becomes
    /// (0, 0, 1).
    pub fn normalize(&mut self) {
        let length = self.length();
        if length != T::zero() {
            for axis in [PITCH, YAW, ROLL] {
                self[axis] = self[axis] / length;
            }
        } else {
            self.set_degenerate();
        }
    }

    pub fn normalized(&self) -> Self {
        let mut copy = self.copy();
        copy.normalize();
        copy
    }

    fn set_degenerate(&mut self) {
        self.set([T::zero(), T::zero(), T::one()]);
    }

    /// Pitch of a direction vector, in degrees, as `(pitch, 0, 0)`.
    ///
    /// Kept bit compatible with existing callers: yaw is never computed, and
    /// a direction with zero x and y always reports a pitch of 90 because the
    /// up/down test reads the still-zero output roll instead of the input z.
    /// [`direction_angles`](Self::direction_angles) is the complete form.
    pub fn get_angle(&self) -> Self {
        let mut angles = Self::zero();
        if self[PITCH] == T::zero() && self[YAW] == T::zero() {
            let quarter = T::constant(QUARTER_TURN);
            angles[PITCH] = if angles[ROLL] > T::zero() { -quarter } else { quarter };
            angles[YAW] = T::zero();
        } else {
            let planar = self.length_prefix::<2>();
            angles[PITCH] = Float::atan2(-self[ROLL], planar).to_degrees();
        }
        angles
    }

    /// Pitch and yaw of a direction vector, in degrees. Straight up is pitch
    /// -90, straight down (or the zero vector) is pitch 90. Roll is 0.
    pub fn direction_angles(&self) -> Self {
        let mut angles = Self::zero();
        if self[PITCH] == T::zero() && self[YAW] == T::zero() {
            let quarter = T::constant(QUARTER_TURN);
            angles[PITCH] = if self[ROLL] > T::zero() { -quarter } else { quarter };
        } else {
            let planar = self.length_prefix::<2>();
            angles[PITCH] = Float::atan2(-self[ROLL], planar).to_degrees();
            angles[YAW] = Float::atan2(self[YAW], self[PITCH]).to_degrees();
        }
        angles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{V3, vec3};
    use approx::assert_relative_eq;

    fn assert_angles(v: V3<f32>, expected: [f32; 3]) {
        for (actual, expected) in v.iter().zip(expected) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn normalize_angle_wraps_with_remainder() {
        let mut v = vec3(450.0_f32, -450.0, 123.0);
        v.normalize_angle();
        assert_eq!(v, vec3(90.0, -90.0, 0.0));

        let v = vec3(190.0_f64, -190.0, 0.0).normalized_angle();
        assert_eq!(v, vec3(-170.0, 170.0, 0.0));
    }

    #[test]
    fn normalize_angle_resets_non_finite() {
        let mut v = vec3(f32::NAN, 10.0, 5.0);
        v.normalize_angle();
        assert_eq!(v, vec3(0.0, 10.0, 0.0));

        let v = vec3(20.0_f64, f64::NEG_INFINITY, 1.0).normalized_angle();
        assert_eq!(v, vec3(20.0, 0.0, 0.0));
    }

    #[test]
    fn normalized_angle_leaves_original() {
        let original = vec3(720.0_f32, 30.0, 9.0);
        let normalized = original.normalized_angle();
        assert_eq!(normalized, vec3(0.0, 30.0, 0.0));
        assert_eq!(original, vec3(720.0, 30.0, 9.0));
    }

    #[test]
    fn clamp_angle_limits_envelope() {
        let mut v = vec3(95.0_f32, 200.0, 7.0);
        v.clamp_angle();
        assert_eq!(v, vec3(89.0, 180.0, 0.0));

        let mut v = vec3(-95.0_f64, -200.0, 7.0);
        v.clamp_angle();
        assert_eq!(v, vec3(-89.0, -180.0, 0.0));

        let mut v = vec3(12.5_f32, -45.0, -3.0);
        v.clamp_angle();
        assert_eq!(v, vec3(12.5, -45.0, 0.0));
    }

    #[test]
    fn normalize_length_scales_pitch_and_yaw_only() {
        assert_angles(vec3(3.0, 4.0, 0.0).normalized_length(), [0.6, 0.8, 0.0]);
        assert_angles(vec3(0.0, 0.0, 2.0).normalized_length(), [0.0, 0.0, 2.0]);
        // length is 13, roll keeps its 12
        assert_angles(vec3(3.0, 4.0, 12.0).normalized_length(), [3.0 / 13.0, 4.0 / 13.0, 12.0]);
    }

    #[test]
    fn normalize_scales_all_components() {
        assert_angles(vec3(3.0, 4.0, 0.0).normalized(), [0.6, 0.8, 0.0]);
        assert_angles(vec3(0.0, 0.0, 2.0).normalized(), [0.0, 0.0, 1.0]);

        let mut v = vec3(3.0_f64, 4.0, 12.0);
        v.normalize();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v[ROLL], 12.0 / 13.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_vector_falls_back_to_up() {
        let zero = V3::<f32>::zero();
        assert_eq!(zero.normalized_length(), vec3(0.0, 0.0, 1.0));
        assert_eq!(zero.normalized(), vec3(0.0, 0.0, 1.0));
        assert_eq!(zero, vec3(0.0, 0.0, 0.0));

        let mut v = V3::<f64>::zero();
        v.normalize_length();
        assert_eq!(v, vec3(0.0, 0.0, 1.0));
        let mut v = V3::<f64>::zero();
        v.normalize();
        assert_eq!(v, vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn get_angle_reports_pitch_only() {
        assert_angles(vec3(1.0, 0.0, -1.0).get_angle(), [45.0, 0.0, 0.0]);
        assert_angles(vec3(0.0, 1.0, 1.0).get_angle(), [-45.0, 0.0, 0.0]);
        assert_angles(vec3(0.0, 5.0, 0.0).get_angle(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn get_angle_vertical_is_always_ninety() {
        assert_eq!(vec3(0.0_f32, 0.0, 5.0).get_angle(), vec3(90.0, 0.0, 0.0));
        assert_eq!(vec3(0.0_f32, 0.0, -5.0).get_angle(), vec3(90.0, 0.0, 0.0));
        assert_eq!(V3::<f64>::zero().get_angle(), vec3(90.0, 0.0, 0.0));
    }

    #[test]
    fn get_angle_leaves_direction() {
        let direction = vec3(1.0_f32, 2.0, 3.0);
        direction.get_angle();
        assert_eq!(direction, vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn direction_angles_include_yaw() {
        assert_angles(vec3(0.0, 1.0, 0.0).direction_angles(), [0.0, 90.0, 0.0]);
        assert_angles(vec3(-1.0, 0.0, 0.0).direction_angles(), [0.0, 180.0, 0.0]);
        assert_angles(vec3(1.0, 1.0, 0.0).direction_angles(), [0.0, 45.0, 0.0]);
        assert_angles(vec3(1.0, 0.0, -1.0).direction_angles(), [45.0, 0.0, 0.0]);
    }

    #[test]
    fn direction_angles_vertical_reads_input() {
        assert_eq!(vec3(0.0_f32, 0.0, 5.0).direction_angles(), vec3(-90.0, 0.0, 0.0));
        assert_eq!(vec3(0.0_f32, 0.0, -5.0).direction_angles(), vec3(90.0, 0.0, 0.0));
    }
}
