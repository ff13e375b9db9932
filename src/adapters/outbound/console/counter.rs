use std::time::Duration;

/// Total duration of one counter transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Number of interpolation frames per transition.
pub const TRANSITION_STEPS: usize = 20;

/// Interpolation frames for one summary counter, from 0 up to `target`.
///
/// The sequence is monotonic non-decreasing and its last frame equals the
/// target exactly; intermediate frames are cosmetic and carry no state.
pub fn transition_frames(target: usize, steps: usize) -> Vec<usize> {
    if steps == 0 {
        return vec![target];
    }
    (1..=steps)
        .map(|step| {
            let progress = step as f64 / steps as f64;
            (target as f64 * progress).round() as usize
        })
        .collect()
}
