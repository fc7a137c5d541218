//! Render progress reporting.

/// Receives completion updates from the scheduler.
///
/// Called on the scheduling thread only, so implementations need not be
/// thread-safe.
pub trait ProgressReporter {
    fn report(&mut self, completed: usize, total: usize);
}

/// Logs the completed percentage at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressPrinter;

impl ProgressReporter for ProgressPrinter {
    fn report(&mut self, completed: usize, total: usize) {
        log::info!("Progress: {:.1} %", percent(completed, total));
    }
}

/// Discards all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&mut self, _completed: usize, _total: usize) {}
}

/// Collects every report, in order.
#[cfg(test)]
impl ProgressReporter for Vec<(usize, usize)> {
    fn report(&mut self, completed: usize, total: usize) {
        self.push((completed, total));
    }
}

fn percent(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    100.0 * completed as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 8), 0.0);
        assert_eq!(percent(2, 8), 25.0);
        assert_eq!(percent(8, 8), 100.0);
        assert_eq!(percent(0, 0), 100.0);
    }

    #[test]
    fn test_vec_collects_reports() {
        let mut reports = Vec::new();
        {
            let reporter: &mut dyn ProgressReporter = &mut reports;
            reporter.report(3, 12);
            reporter.report(12, 12);
        }
        assert_eq!(reports, vec![(3, 12), (12, 12)]);
    }

    #[test]
    fn test_printer_and_no_progress_accept_reports() {
        ProgressPrinter.report(5, 10);
        NoProgress.report(5, 10);
    }
}
