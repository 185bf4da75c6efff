//! Repeated-run timing of a conversion.

use serde::Serialize;
use std::time::Instant;

/// Wall-clock milliseconds per run plus summary figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub results: Vec<f64>,
    pub avg: f64,
    pub max: f64,
    pub min: f64,
    pub tot: f64,
}

impl BenchReport {
    pub fn from_results(results: Vec<f64>) -> Self {
        let tot: f64 = results.iter().sum();
        let avg = if results.is_empty() { 0.0 } else { tot / results.len() as f64 };
        let max = results.iter().copied().fold(f64::NAN, f64::max);
        let min = results.iter().copied().fold(f64::NAN, f64::min);
        Self {
            results,
            avg,
            max: if max.is_nan() { 0.0 } else { max },
            min: if min.is_nan() { 0.0 } else { min },
            tot,
        }
    }
}

/// Run `task` `runs` times, stopping at the first error. Returns the report
/// and the output of the last run, if any ran.
pub fn run<T, E>(
    runs: usize,
    mut task: impl FnMut() -> Result<T, E>,
) -> Result<(BenchReport, Option<T>), E> {
    let mut results = Vec::with_capacity(runs);
    let mut last = None;
    for i in 0..runs {
        let start = Instant::now();
        let output = task()?;
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        log::debug!("bench run {}/{runs}: {elapsed:.3} ms", i + 1);
        results.push(elapsed);
        last = Some(output);
    }
    Ok((BenchReport::from_results(results), last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_figures() {
        let report = BenchReport::from_results(vec![3.0, 1.0, 2.0]);
        assert_eq!(report.tot, 6.0);
        assert_eq!(report.avg, 2.0);
        assert_eq!(report.max, 3.0);
        assert_eq!(report.min, 1.0);
        assert_eq!(report.results, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn no_runs() {
        let (report, last) = run(0, || Ok::<_, ()>(())).unwrap();
        assert_eq!(report, BenchReport::from_results(Vec::new()));
        assert_eq!(last, None);
        assert_eq!(report.avg, 0.0);
    }

    #[test]
    fn counts_runs_and_propagates_errors() {
        let mut calls = 0;
        let (report, last) = run(4, || {
            calls += 1;
            Ok::<_, ()>(calls)
        })
        .unwrap();
        assert_eq!(calls, 4);
        assert_eq!(report.results.len(), 4);
        assert_eq!(last, Some(4));

        let mut calls = 0;
        let err = run(4, || {
            calls += 1;
            if calls == 2 { Err("boom") } else { Ok(()) }
        });
        assert_eq!(err.err(), Some("boom"));
        assert_eq!(calls, 2);
    }

    #[test]
    fn serializes_as_json() {
        let json = serde_json::to_value(BenchReport::from_results(vec![1.0])).unwrap();
        assert_eq!(json["tot"], 1.0);
        assert_eq!(json["results"][0], 1.0);
    }
}
