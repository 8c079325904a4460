//! Frame-counter animation: a looping clock and the figure pose it drives.

mod clock;
mod pose;

pub use clock::AnimationClock;
pub use pose::Pose;
