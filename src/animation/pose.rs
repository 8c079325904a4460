use std::f32::consts::TAU;

/// Peak arm swing, radians.
const ARM_SWING: f32 = 0.6;
/// Peak leg swing, radians.
const LEG_SWING: f32 = 0.4;

/// Joint angles and planet spins for one animation frame.
///
/// All angles are radians about the joint's local X axis (limbs) or the
/// planet's Y axis (spins).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Left shoulder swing.
    pub left_arm: f32,
    /// Right shoulder swing.
    pub right_arm: f32,
    /// Left hip swing.
    pub left_leg: f32,
    /// Right hip swing.
    pub right_leg: f32,
    /// Earth rotation.
    pub earth_spin: f32,
    /// Sun rotation.
    pub sun_spin: f32,
}

impl Pose {
    /// Everything at rest.
    pub const REST: Self = Self {
        left_arm: 0.0,
        right_arm: 0.0,
        left_leg: 0.0,
        right_leg: 0.0,
        earth_spin: 0.0,
        sun_spin: 0.0,
    };

    /// Pose at frame `time` of a `frames`-long loop. Frame 0 is
    /// [`REST`](Self::REST).
    ///
    /// Limbs swing in opposition, arms against legs, one full stride per
    /// loop. The earth turns once per loop, the sun a quarter turn.
    #[must_use]
    pub fn at(time: u32, frames: u32) -> Self {
        let phase = time as f32 / frames.max(1) as f32 * TAU;
        let stride = phase.sin();
        Self {
            left_arm: ARM_SWING * stride,
            right_arm: -ARM_SWING * stride,
            left_leg: -LEG_SWING * stride,
            right_leg: LEG_SWING * stride,
            earth_spin: phase,
            sun_spin: phase * 0.25,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}
