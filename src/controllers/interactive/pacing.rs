use crate::controllers::interactive::config::PacingConfig;
use log::debug;
use std::time::{Duration, Instant};

/// What to do at the end of a frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDecision {
    /// Plenty of time left and more passes pending: render again before presenting.
    SkipPresent,
    /// Present, then sleep out the rest of the frame if any.
    Present { sleep: Option<Duration> },
}

/// Fixed-rate frame clock that lets cheap progressive passes share a frame.
#[derive(Debug, Clone)]
pub struct FramePacer {
    config: PacingConfig,
    frame_duration: Duration,
    next_frame: Option<Instant>,
    skipped_present: bool,
    resyncs: u64,
}

impl FramePacer {
    #[must_use]
    pub fn new(config: PacingConfig) -> Self {
        Self {
            config,
            frame_duration: config.frame_duration(),
            next_frame: None,
            skipped_present: false,
            resyncs: 0,
        }
    }

    /// Opens a new frame slot unless the previous step skipped presenting, in
    /// which case the step continues the same slot.
    pub fn begin_frame(&mut self, now: Instant) {
        if self.skipped_present {
            return;
        }

        let start = match self.next_frame {
            Some(scheduled) if abs_diff(scheduled, now) < self.config.hang_threshold => scheduled,
            Some(scheduled) => {
                debug!(
                    "frame clock resynchronised, {:?} off schedule",
                    abs_diff(scheduled, now)
                );
                self.resyncs += 1;
                now
            }
            None => now,
        };

        self.next_frame = Some(start + self.frame_duration);
    }

    pub fn finish_frame(&mut self, now: Instant, passes_pending: bool) -> FrameDecision {
        let remaining = self
            .next_frame
            .and_then(|next| next.checked_duration_since(now))
            .and_then(|left| left.checked_sub(self.config.sleep_slack));

        if passes_pending && remaining.is_some_and(|left| left > self.config.batch_margin) {
            self.skipped_present = true;
            return FrameDecision::SkipPresent;
        }

        self.skipped_present = false;
        FrameDecision::Present {
            sleep: remaining.filter(|left| *left >= self.config.sleep_slack),
        }
    }

    #[must_use]
    pub fn next_frame(&self) -> Option<Instant> {
        self.next_frame
    }

    #[must_use]
    pub fn resyncs(&self) -> u64 {
        self.resyncs
    }

    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}

fn abs_diff(a: Instant, b: Instant) -> Duration {
    a.checked_duration_since(b)
        .unwrap_or_else(|| b.duration_since(a))
}
