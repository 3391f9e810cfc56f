use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Single terminal row progress display for one generation or load phase.
pub struct Progress {
    total: usize,
    started: Instant,
}

impl Progress {
    pub fn start(total: usize) -> Progress {
        Progress {
            total,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn update(&self, done: usize) {
        let line = progress_line(done, self.total, self.elapsed());
        let mut stdout = io::stdout().lock();
        //progress is cosmetic; a closed stdout must not abort the pipeline
        let _ = write!(stdout, "\r\x1b[2K{line}");
        let _ = stdout.flush();
    }

    /// Clears the progress row and returns the phase duration.
    pub fn finish(&self) -> Duration {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "\r\x1b[2K");
        let _ = stdout.flush();
        self.elapsed()
    }
}

pub fn progress_line(done: usize, total: usize, elapsed: Duration) -> String {
    let percent = if total == 0 {
        100.0
    } else {
        done as f64 / total as f64 * 100.0
    };
    let remaining = estimate_remaining(done, total, elapsed);
    format!(
        "Progress: [{percent:.1}%] {} of {} records | Elapsed: {} | Remaining: {}",
        group_thousands(done as u64),
        group_thousands(total as u64),
        short_display(elapsed),
        short_display(remaining)
    )
}

/// Extrapolates the time left from the share of work already done.
pub fn estimate_remaining(done: usize, total: usize, elapsed: Duration) -> Duration {
    if done == 0 || total == 0 || done >= total {
        return Duration::ZERO;
    }
    let fraction = done as f64 / total as f64;
    let estimated_total = elapsed.as_secs_f64() / fraction;
    Duration::from_secs_f64((estimated_total - elapsed.as_secs_f64()).max(0.0))
}

pub fn short_display(duration: Duration) -> String {
    let seconds = duration.as_secs();
    let (hours, minutes, seconds) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if hours >= 1 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes >= 1 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub fn records_per_second(records: usize, elapsed: Duration) -> u64 {
    let seconds = elapsed.as_secs_f64();
    if seconds <= 0.0 {
        return records as u64;
    }
    (records as f64 / seconds).round() as u64
}

/// Closing lines shared by both pipelines.
pub fn summary(verb: &str, records: usize, elapsed: Duration) -> String {
    format!(
        "Completed {verb} '{}' records in {}\nAverage speed: '{}' records/second",
        group_thousands(records as u64),
        short_display(elapsed),
        group_thousands(records_per_second(records, elapsed))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "0s")]
    #[test_case(59, "59s")]
    #[test_case(60, "1m 0s")]
    #[test_case(754, "12m 34s")]
    #[test_case(3600, "1h 0m 0s")]
    #[test_case(90061, "25h 1m 1s")]
    fn short_display_formats(seconds: u64, expected: &str) {
        assert_eq!(short_display(Duration::from_secs(seconds)), expected);
    }

    #[test_case(0, "0")]
    #[test_case(999, "999")]
    #[test_case(1000, "1,000")]
    #[test_case(1234567, "1,234,567")]
    #[test_case(100000, "100,000")]
    fn thousands(value: u64, expected: &str) {
        assert_eq!(group_thousands(value), expected);
    }

    #[test]
    fn remaining_time_extrapolates() {
        let remaining = estimate_remaining(25, 100, Duration::from_secs(10));
        assert_eq!(remaining.as_secs(), 30);
        assert_eq!(estimate_remaining(0, 100, Duration::from_secs(10)), Duration::ZERO);
        assert_eq!(estimate_remaining(100, 100, Duration::from_secs(10)), Duration::ZERO);
    }

    #[test]
    fn line_shows_percent_and_counts() {
        let line = progress_line(10_000, 40_000, Duration::from_secs(5));
        assert_eq!(
            line,
            "Progress: [25.0%] 10,000 of 40,000 records | Elapsed: 5s | Remaining: 15s"
        );
    }

    #[test]
    fn summary_reports_speed() {
        let text = summary("generating", 4000, Duration::from_secs(2));
        assert_eq!(
            text,
            "Completed generating '4,000' records in 2s\nAverage speed: '2,000' records/second"
        );
    }
}
