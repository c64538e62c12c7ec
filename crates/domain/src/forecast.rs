//! Forecast aggregation
//!
//! Turns the provider's flat 3-hour-step forecast feed into per-day
//! summaries: one entry per calendar date with rounded high/low temperatures
//! and the most frequent condition code and description of that day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Timezone;

/// Maximum number of day summaries produced by [`aggregate_daily`]
pub const MAX_FORECAST_DAYS: usize = 5;

/// One 3-hour-resolution reading from the provider's forecast feed
///
/// Temperatures are always Celsius; unit normalization is the fetch layer's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Sample time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Provider condition code (e.g. "01d" for clear sky, day)
    pub condition_code: String,
    /// Human-readable condition description
    pub description: String,
}

/// Aggregated view over all samples sharing a calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The calendar date this summary covers
    pub date: NaiveDate,
    /// Short weekday name (e.g. "Mon")
    pub day_label: String,
    /// Rounded daily maximum in Celsius
    pub high_celsius: i32,
    /// Rounded daily minimum in Celsius
    pub low_celsius: i32,
    /// Most frequent condition code of the day
    pub representative_code: String,
    /// Most frequent description of the day
    pub representative_description: String,
}

/// Aggregate a chronological forecast feed into at most
/// [`MAX_FORECAST_DAYS`] per-day summaries.
///
/// Samples are grouped by the calendar date their timestamp falls on in
/// `tz`; groups keep the order their date first appears in the input. The
/// group whose date equals `today` is dropped, and emission stops after five
/// summaries even if further groups remain. High/low use `f64::round`
/// (half away from zero).
///
/// The representative code and description are computed as two independent
/// most-frequent-value passes, ties broken by first occurrence. Because the
/// passes are independent, the emitted code/description pair can disagree
/// when the two modes fall on different samples; downstream consumers rely
/// on exactly this pairing.
///
/// Empty input, or input spanning only `today`, yields an empty vector.
#[must_use]
pub fn aggregate_daily(
    samples: &[ForecastSample],
    tz: &Timezone,
    today: NaiveDate,
) -> Vec<DaySummary> {
    let mut groups: Vec<DayGroup<'_>> = Vec::new();

    for sample in samples {
        let date = sample.timestamp.with_timezone(&tz.tz()).date_naive();
        match groups.iter_mut().find(|group| group.date == date) {
            Some(group) => group.push(sample),
            None => groups.push(DayGroup::start(date, sample)),
        }
    }

    groups
        .iter()
        .filter(|group| group.date != today)
        .take(MAX_FORECAST_DAYS)
        .map(DayGroup::summarize)
        .collect()
}

/// Samples of one calendar date, in input order
struct DayGroup<'a> {
    date: NaiveDate,
    temperatures: Vec<f64>,
    codes: Vec<&'a str>,
    descriptions: Vec<&'a str>,
}

impl<'a> DayGroup<'a> {
    fn start(date: NaiveDate, sample: &'a ForecastSample) -> Self {
        let mut group = Self {
            date,
            temperatures: Vec::new(),
            codes: Vec::new(),
            descriptions: Vec::new(),
        };
        group.push(sample);
        group
    }

    fn push(&mut self, sample: &'a ForecastSample) {
        self.temperatures.push(sample.temperature_celsius);
        self.codes.push(&sample.condition_code);
        self.descriptions.push(&sample.description);
    }

    #[allow(clippy::cast_possible_truncation)] // rounded Celsius fits i32
    fn summarize(&self) -> DaySummary {
        let high = self.temperatures.iter().copied().fold(f64::MIN, f64::max);
        let low = self.temperatures.iter().copied().fold(f64::MAX, f64::min);

        DaySummary {
            date: self.date,
            day_label: self.date.format("%a").to_string(),
            high_celsius: high.round() as i32,
            low_celsius: low.round() as i32,
            representative_code: first_seen_mode(&self.codes).unwrap_or_default().to_string(),
            representative_description: first_seen_mode(&self.descriptions)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Most frequent value; ties resolve to the value encountered first.
///
/// Strict `>` in the reduction keeps the earliest-seen value on equal counts,
/// which makes tie-breaking deterministic across calls.
fn first_seen_mode<'a>(values: &[&'a str]) -> Option<&'a str> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for &value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some(entry) => entry.1 += 1,
            None => counts.push((value, 1)),
        }
    }

    counts
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(day: u32, hour: u32, temp: f64, code: &str, desc: &str) -> ForecastSample {
        ForecastSample {
            timestamp: Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap(),
            temperature_celsius: temp,
            condition_code: code.to_string(),
            description: desc.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate_daily(&[], &Timezone::utc(), today()).is_empty());
    }

    #[test]
    fn samples_spanning_only_today_yield_empty_output() {
        let samples = vec![
            sample(10, 9, 21.0, "01d", "clear sky"),
            sample(10, 12, 24.0, "01d", "clear sky"),
        ];
        assert!(aggregate_daily(&samples, &Timezone::utc(), today()).is_empty());
    }

    #[test]
    fn today_is_excluded_and_future_days_summarized() {
        // 10 samples: today (2) + 4 future days (2 each)
        let mut samples = vec![
            sample(10, 18, 20.0, "01d", "clear sky"),
            sample(10, 21, 17.0, "01d", "clear sky"),
        ];
        for (i, day) in (11..=14).enumerate() {
            let base = 18.0 + i as f64;
            samples.push(sample(day, 9, base, "02d", "few clouds"));
            samples.push(sample(day, 15, base + 5.0, "02d", "few clouds"));
        }

        let summaries = aggregate_daily(&samples, &Timezone::utc(), today());
        assert_eq!(summaries.len(), 4);
        for (i, summary) in summaries.iter().enumerate() {
            assert_eq!(
                summary.date,
                NaiveDate::from_ymd_opt(2026, 8, 11 + i as u32).unwrap()
            );
            assert_eq!(summary.low_celsius, 18 + i as i32);
            assert_eq!(summary.high_celsius, 23 + i as i32);
        }
    }

    #[test]
    fn output_is_capped_at_five_days() {
        let samples: Vec<ForecastSample> = (11..=18)
            .map(|day| sample(day, 12, 20.0, "01d", "clear sky"))
            .collect();

        let summaries = aggregate_daily(&samples, &Timezone::utc(), today());
        assert_eq!(summaries.len(), MAX_FORECAST_DAYS);
        // The first five post-filter groups survive, not the trailing ones
        assert_eq!(
            summaries.last().map(|s| s.date),
            NaiveDate::from_ymd_opt(2026, 8, 15)
        );
    }

    #[test]
    fn single_sample_group_collapses_to_that_sample() {
        let samples = vec![sample(12, 12, 19.4, "10d", "light rain")];
        let summaries = aggregate_daily(&samples, &Timezone::utc(), today());

        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.high_celsius, 19);
        assert_eq!(s.low_celsius, 19);
        assert_eq!(s.representative_code, "10d");
        assert_eq!(s.representative_description, "light rain");
    }

    #[test]
    fn mode_selects_most_frequent_code() {
        let samples = vec![
            sample(11, 6, 15.0, "01d", "clear sky"),
            sample(11, 9, 18.0, "02d", "few clouds"),
            sample(11, 12, 21.0, "01d", "clear sky"),
        ];
        let summaries = aggregate_daily(&samples, &Timezone::utc(), today());
        assert_eq!(summaries[0].representative_code, "01d");
    }

    #[test]
    fn mode_tie_resolves_to_first_seen() {
        let samples = vec![
            sample(11, 6, 15.0, "01d", "clear sky"),
            sample(11, 9, 18.0, "02d", "few clouds"),
        ];
        let summaries = aggregate_daily(&samples, &Timezone::utc(), today());
        assert_eq!(summaries[0].representative_code, "01d");
        assert_eq!(summaries[0].representative_description, "clear sky");
    }

    #[test]
    fn code_and_description_modes_are_independent() {
        // Code mode lands on "10d" but description mode lands on "overcast":
        // the pairing may disagree and that is the contract.
        let samples = vec![
            sample(11, 3, 14.0, "10d", "overcast"),
            sample(11, 6, 15.0, "10d", "light rain"),
            sample(11, 9, 16.0, "04d", "overcast"),
        ];
        let summaries = aggregate_daily(&samples, &Timezone::utc(), today());
        assert_eq!(summaries[0].representative_code, "10d");
        assert_eq!(summaries[0].representative_description, "overcast");
    }

    #[test]
    fn grouping_respects_consumer_timezone() {
        // 23:00 UTC on the 11th is already the 12th in Johannesburg (UTC+2)
        let tz = Timezone::parse("Africa/Johannesburg").unwrap();
        let samples = vec![
            sample(11, 23, 16.0, "01n", "clear sky"),
            sample(12, 2, 14.0, "01n", "clear sky"),
        ];
        let summaries = aggregate_daily(&samples, &tz, today());

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].date, NaiveDate::from_ymd_opt(2026, 8, 12).unwrap());
        assert_eq!(summaries[0].high_celsius, 16);
        assert_eq!(summaries[0].low_celsius, 14);
    }

    #[test]
    fn day_label_is_short_weekday_name() {
        // 2026-08-11 is a Tuesday
        let samples = vec![sample(11, 12, 20.0, "01d", "clear sky")];
        let summaries = aggregate_daily(&samples, &Timezone::utc(), today());
        assert_eq!(summaries[0].day_label, "Tue");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        let samples = vec![
            sample(11, 6, 19.5, "01d", "clear sky"),
            sample(11, 9, -0.5, "01d", "clear sky"),
        ];
        let summaries = aggregate_daily(&samples, &Timezone::utc(), today());
        assert_eq!(summaries[0].high_celsius, 20);
        assert_eq!(summaries[0].low_celsius, -1);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let samples = vec![
            sample(11, 6, 15.0, "01d", "clear sky"),
            sample(11, 9, 18.0, "02d", "few clouds"),
            sample(12, 6, 12.0, "10d", "light rain"),
        ];
        let first = aggregate_daily(&samples, &Timezone::utc(), today());
        let second = aggregate_daily(&samples, &Timezone::utc(), today());
        assert_eq!(first, second);
    }

    #[test]
    fn first_seen_mode_of_empty_slice_is_none() {
        assert_eq!(first_seen_mode(&[]), None);
    }
}
