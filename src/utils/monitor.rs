use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct PhaseStats {
    pub phase: String,
    pub phase_time: Duration,
    pub elapsed_time: Duration,
}

/// Records wall-clock time per build phase when enabled.
pub struct BuildMonitor {
    start_time: Instant,
    last_mark: Instant,
    phases: Vec<PhaseStats>,
    enabled: bool,
}

impl BuildMonitor {
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_mark: now,
            phases: Vec::new(),
            enabled,
        }
    }

    pub fn mark(&mut self, phase: &str) {
        if !self.enabled {
            return;
        }

        let now = Instant::now();
        let stats = PhaseStats {
            phase: phase.to_string(),
            phase_time: now.duration_since(self.last_mark),
            elapsed_time: now.duration_since(self.start_time),
        };
        self.last_mark = now;

        tracing::info!(
            "📊 {} - Phase: {:?}, Total: {:?}",
            stats.phase,
            stats.phase_time,
            stats.elapsed_time
        );
        self.phases.push(stats);
    }

    pub fn log_final_stats(&self) {
        if self.enabled {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Phases: {}",
                self.start_time.elapsed(),
                self.phases.len()
            );
        }
    }

    pub fn phases(&self) -> &[PhaseStats] {
        &self.phases
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for BuildMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
