use crate::metrics::Phase;
use std::time::Duration;

/// One-line summary of the sampler for the top bar.
pub fn status_text(phase: Phase, interval: Duration) -> String {
    let activity = match phase {
        Phase::Idle => "starting",
        Phase::Sampling => "measuring",
        Phase::Rendering => "drawing",
        Phase::Waiting => "waiting",
    };
    format!("Every {:.1} s · {activity}", interval.as_secs_f32())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_phase_and_interval() {
        let interval = Duration::from_millis(1500);
        assert_eq!(status_text(Phase::Idle, interval), "Every 1.5 s · starting");
        assert_eq!(status_text(Phase::Sampling, interval), "Every 1.5 s · measuring");
        assert_eq!(status_text(Phase::Waiting, Duration::from_secs(1)), "Every 1.0 s · waiting");
    }
}
