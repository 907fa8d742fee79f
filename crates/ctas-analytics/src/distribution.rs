use ctas_core::CtasLevel;
use ctas_core::models::{LevelDistribution, LevelShare};

/// Count which levels each comma-separated segment of `reason` mentions.
///
/// Mentions are the exact, case-sensitive labels `CTAS 1` .. `CTAS 5`, as
/// they appear in rule explanations. Unlike feedback linkage, `ctas 2` or
/// `CTAS2` do not count. A segment counts once per distinct level it
/// mentions. Proportions are relative to the total count and are all zero
/// when nothing is mentioned.
pub fn level_distribution(reason: &str) -> LevelDistribution {
    let mut counts = [0u64; 5];
    for segment in reason.split(',') {
        for (count, level) in counts.iter_mut().zip(CtasLevel::ALL) {
            *count += u64::from(segment.contains(&level.to_string()));
        }
    }

    let total: u64 = counts.iter().sum();
    let shares = CtasLevel::ALL
        .into_iter()
        .zip(counts)
        .map(|(level, count)| LevelShare {
            level,
            count,
            proportion: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect();

    LevelDistribution { shares, total }
}
