use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame's budget
pub struct FramePacer {
    budget: Option<Duration>,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(budget: Option<Duration>) -> Self {
        Self {
            budget,
            frame_start: Instant::now(),
        }
    }

    /// Block until the current frame's budget is spent, then start the next
    pub fn wait(&mut self) {
        if let Some(budget) = self.budget {
            let elapsed = self.frame_start.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paced_frame_takes_budget() {
        let budget = Duration::from_millis(5);
        let mut pacer = FramePacer::new(Some(budget));
        let start = Instant::now();
        pacer.wait();
        assert!(start.elapsed() >= budget - Duration::from_millis(1));
    }

    #[test]
    fn test_unpaced_returns_immediately() {
        let mut pacer = FramePacer::new(None);
        let start = Instant::now();
        pacer.wait();
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
