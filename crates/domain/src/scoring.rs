// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scoring and ranking rules.
//!
//! This module turns raw performances into ordered rankings and medals.
//! Every function here is pure apart from its diagnostics: it operates only
//! on the values passed in.
//!
//! ## Ranking Rules (Authoritative)
//!
//! Valid (non-disqualified) results are ordered by the discipline's policy:
//! 1. Time policies: elapsed seconds plus penalty, lowest first
//! 2. Score policies: score minus penalty, highest first
//! 3. Unrecognized methods: elapsed seconds only, lowest first
//!
//! Ranks `1..N` are assigned by position. Equal performances keep their
//! input order; there is no secondary key and no shared rank. Disqualified
//! results are appended after every ranked result and keep rank 0.

use crate::result::EventResult;
use crate::types::Medal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Times above this are accepted but reported as suspect.
pub const SUSPECT_TIME: Duration = Duration::from_secs(10 * 60);

/// How a discipline orders its results.
///
/// Parsing is case-insensitive and never fails: unknown names are kept as
/// `Unrecognized` and ranked with the time fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScoringMethod {
    /// Lowest time plus penalty wins.
    BestTime,
    /// Alias of `BestTime`.
    FastestTime,
    /// Highest score minus penalty wins.
    TotalScore,
    /// Alias of `TotalScore`.
    HighestScore,
    /// Ranked like `TotalScore`; the averaging happens at recording time.
    AverageScore,
    /// Any other name, as given.
    Unrecognized(String),
}

/// The comparison a scoring method ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingPolicy {
    /// Ascending by elapsed seconds plus penalty.
    AscendingTime,
    /// Descending by score minus penalty.
    DescendingScore,
    /// Ascending by elapsed seconds, missing times last.
    FallbackTime,
}

impl ScoringMethod {
    /// Returns the ranking policy for this method.
    #[must_use]
    pub const fn policy(&self) -> RankingPolicy {
        match self {
            Self::BestTime | Self::FastestTime => RankingPolicy::AscendingTime,
            Self::TotalScore | Self::HighestScore | Self::AverageScore => {
                RankingPolicy::DescendingScore
            }
            Self::Unrecognized(_) => RankingPolicy::FallbackTime,
        }
    }

    /// Returns the method name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::BestTime => "BestTime",
            Self::FastestTime => "FastestTime",
            Self::TotalScore => "TotalScore",
            Self::HighestScore => "HighestScore",
            Self::AverageScore => "AverageScore",
            Self::Unrecognized(name) => name,
        }
    }
}

impl FromStr for ScoringMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "besttime" => Self::BestTime,
            "fastesttime" => Self::FastestTime,
            "totalscore" => Self::TotalScore,
            "highestscore" => Self::HighestScore,
            "averagescore" => Self::AverageScore,
            _ => Self::Unrecognized(s.to_string()),
        })
    }
}

impl From<String> for ScoringMethod {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(method) => method,
            Err(never) => match never {},
        }
    }
}

impl From<ScoringMethod> for String {
    fn from(value: ScoringMethod) -> Self {
        match value {
            ScoringMethod::Unrecognized(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Computes a judged score from the judges' marks.
///
/// With `remove_extremes` and at least three marks, exactly one highest
/// and one lowest mark are discarded (two marks are dropped even when they
/// are equal). The result is the mean of the remaining marks.
///
/// # Arguments
///
/// * `scores` - The judges' marks
/// * `remove_extremes` - Whether to trim the highest and lowest mark
///
/// # Returns
///
/// The (trimmed) mean, or `0.0` with a warning when no marks were given.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn calculate_judged_score(scores: &[f64], remove_extremes: bool) -> f64 {
    if scores.is_empty() {
        warn!("No judge scores provided; recording a zero score");
        return 0.0;
    }

    let mut marks: Vec<f64> = scores.to_vec();

    if remove_extremes && marks.len() >= 3 {
        remove_extreme(&mut marks, Ordering::Greater);
        remove_extreme(&mut marks, Ordering::Less);
    }

    let average: f64 = marks.iter().sum::<f64>() / marks.len() as f64;
    debug!(
        score = average,
        marks_used = marks.len(),
        "Calculated judged score"
    );
    average
}

/// Removes one occurrence of the largest (`Greater`) or smallest (`Less`) mark.
fn remove_extreme(marks: &mut Vec<f64>, which: Ordering) {
    let position: Option<usize> = marks
        .iter()
        .enumerate()
        .reduce(|best, candidate| {
            if candidate.1.total_cmp(best.1) == which {
                candidate
            } else {
                best
            }
        })
        .map(|(index, _)| index);

    if let Some(index) = position {
        marks.remove(index);
    }
}

/// Adds a penalty in seconds to an elapsed time.
///
/// The penalty is applied as given; a negative penalty shortens the time,
/// never below zero.
#[must_use]
pub fn calculate_final_time(base_time: Duration, penalty_seconds: f64) -> Duration {
    let total: f64 = (base_time.as_secs_f64() + penalty_seconds).max(0.0);
    let final_time: Duration = Duration::try_from_secs_f64(total).unwrap_or(base_time);

    if penalty_seconds > 0.0 {
        debug!(
            final_seconds = final_time.as_secs_f64(),
            penalty_seconds, "Applied time penalty"
        );
    }

    final_time
}

/// Ranks a set of results under a scoring method.
///
/// # Arguments
///
/// * `results` - The results to rank (typically all results of one event)
/// * `method` - The discipline's scoring method
///
/// # Returns
///
/// The valid results in rank order with ranks `1..N` and no medals,
/// followed by the disqualified results with rank 0. Medals are awarded
/// separately by [`assign_medals`].
///
/// Results lacking the performance the policy keys on sort after those
/// that have it. This deliberately departs from treating a missing time as
/// the best time and a missing score as zero, so an incomplete entry can
/// never outrank a complete one.
#[must_use]
pub fn rank_results(results: Vec<EventResult>, method: &ScoringMethod) -> Vec<EventResult> {
    if results.is_empty() {
        return Vec::new();
    }

    let (mut valid, disqualified): (Vec<EventResult>, Vec<EventResult>) =
        results.into_iter().partition(|r| !r.is_disqualified());

    let policy: RankingPolicy = method.policy();
    if policy == RankingPolicy::FallbackTime {
        warn!(
            method = %method,
            "Unrecognized scoring method; ranking by elapsed time"
        );
    }

    // Stable sort: equal performances keep their recording order
    valid.sort_by(|a, b| compare_performance(a, b, policy));

    for (index, result) in valid.iter_mut().enumerate() {
        // A medal from an earlier ranking is stale
        result.set_medal(Medal::None);
        result.set_rank(u32::try_from(index + 1).unwrap_or(u32::MAX));
    }

    let disqualified_count: usize = disqualified.len();
    valid.extend(disqualified);

    info!(
        ranked = valid.len(),
        disqualified = disqualified_count,
        "Ranked results"
    );
    valid
}

/// Compares two results under a policy.
///
/// Returns `Ordering::Less` if `a` performed better.
fn compare_performance(a: &EventResult, b: &EventResult, policy: RankingPolicy) -> Ordering {
    match policy {
        RankingPolicy::AscendingTime => {
            compare_present(a.final_seconds(), b.final_seconds(), |x, y| x.total_cmp(&y))
        }
        RankingPolicy::DescendingScore => {
            compare_present(a.final_score(), b.final_score(), |x, y| y.total_cmp(&x))
        }
        RankingPolicy::FallbackTime => compare_present(
            a.time().map(|t| t.as_secs_f64()),
            b.time().map(|t| t.as_secs_f64()),
            |x, y| x.total_cmp(&y),
        ),
    }
}

/// Orders present keys with `cmp`; a missing key always loses.
fn compare_present(
    a: Option<f64>,
    b: Option<f64>,
    cmp: impl Fn(f64, f64) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Assigns medals from ranks.
///
/// Disqualified results always end with no medal. Ranks 1, 2 and 3 get
/// gold, silver and bronze; other ranks are left untouched.
pub fn assign_medals(ranked_results: &mut [EventResult]) {
    for result in ranked_results.iter_mut() {
        if result.is_disqualified() {
            result.set_medal(Medal::None);
            continue;
        }

        let medal: Medal = Medal::for_rank(result.rank());
        if medal.is_medal() {
            result.set_medal(medal);
            info!(
                medal = %medal,
                athlete = result.athlete_name(),
                country = result.country_code(),
                "Medal awarded"
            );
        }
    }
}

/// Sanity-checks a result against its discipline's scoring method.
///
/// Advisory only: nothing in the engine refuses to rank a result that
/// fails this check.
///
/// # Returns
///
/// `false` if the result is disqualified, or lacks (or has a non-positive)
/// time under a time policy, or lacks a score under a score policy.
/// Times above ten minutes and unrecognized methods pass with a warning.
#[must_use]
pub fn validate_performance(result: &EventResult, method: &ScoringMethod) -> bool {
    if result.is_disqualified() {
        return false;
    }

    match method.policy() {
        RankingPolicy::AscendingTime => {
            let Some(time) = result.time().filter(|t| !t.is_zero()) else {
                warn!(athlete = result.athlete_name(), "Invalid or missing time");
                return false;
            };
            if time > SUSPECT_TIME {
                warn!(
                    athlete = result.athlete_name(),
                    seconds = time.as_secs_f64(),
                    "Suspect time above ten minutes"
                );
            }
        }
        RankingPolicy::DescendingScore => {
            // Negative scores are legitimate in some disciplines
            if result.score().is_none() {
                warn!(athlete = result.athlete_name(), "Missing score");
                return false;
            }
        }
        RankingPolicy::FallbackTime => {
            warn!(method = %method, "Unrecognized scoring method");
        }
    }

    true
}
