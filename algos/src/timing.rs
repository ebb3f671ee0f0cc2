use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement<T> {
    /// result of the last run
    pub result: T,
    pub runs: usize,
    pub total: Duration,
}

impl<T> Measurement<T> {
    /// Mean duration of one run; the whole total when `runs` is 0.
    pub fn per_run(&self) -> Duration {
        self.total.div_f64(self.runs.max(1) as f64)
    }
}

/// Runs `f` `repeat` times (at least once) and times the whole batch.
pub fn measure<T, F>(repeat: usize, mut f: F) -> Measurement<T>
where
    F: FnMut() -> T,
{
    let runs = repeat.max(1);
    let start = Instant::now();

    let mut result = f();
    for _ in 1..runs {
        result = std::hint::black_box(f());
    }

    Measurement {
        result,
        runs,
        total: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_requested_number_of_times() {
        let mut calls = 0;
        let m = measure(5, || {
            calls += 1;
            calls
        });
        assert_eq!(m.runs, 5);
        assert_eq!(m.result, 5);
        assert_eq!(calls, 5);
    }

    #[test]
    fn zero_repeat_still_runs_once() {
        let m = measure(0, || 42);
        assert_eq!(m.runs, 1);
        assert_eq!(m.result, 42);
    }

    #[test]
    fn per_run_divides_total() {
        let m = Measurement {
            result: (),
            runs: 4,
            total: Duration::from_millis(100),
        };
        assert_eq!(m.per_run(), Duration::from_millis(25));
    }

    #[test]
    fn per_run_handles_counts_beyond_u32() {
        let total = Duration::from_secs(1 << 33);
        let m = Measurement {
            result: (),
            runs: 1 << 32,
            total,
        };
        assert_eq!(m.per_run(), Duration::from_secs(2));

        let empty = Measurement {
            result: (),
            runs: 0,
            total,
        };
        assert_eq!(empty.per_run(), total);
    }
}
