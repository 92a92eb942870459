use crate::models::{GroupKey, IndicatorRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics for a group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub key: GroupKey,
    pub count: usize,
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute grouped statistics by (indicator_id, entity_code).
pub fn grouped_summary(records: &[IndicatorRecord]) -> Vec<Summary> {
    let mut groups: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();
    let mut missing: BTreeMap<GroupKey, usize> = BTreeMap::new();
    for r in records {
        let key = GroupKey {
            indicator_id: r.indicator_id.clone(),
            entity_code: r.entity_code.clone(),
        };
        match r.value {
            Some(v) => groups.entry(key).or_default().push(v),
            None => *missing.entry(key).or_default() += 1,
        }
    }

    let mut out = Vec::new();
    for (key, mut vals) in groups {
        vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let count = vals.len();
        let min = vals.first().cloned();
        let max = vals.last().cloned();
        let mean = if count > 0 {
            Some(vals.iter().copied().sum::<f64>() / count as f64)
        } else {
            None
        };
        let median = if count == 0 {
            None
        } else if count % 2 == 1 {
            Some(vals[count / 2])
        } else {
            Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
        };
        let miss = missing.get(&key).cloned().unwrap_or(0);
        out.push(Summary {
            key,
            count,
            missing: miss,
            min,
            max,
            mean,
            median,
        });
    }
    out
}

/// Percentage growth between two observations; `None` when either value is
/// missing, non-finite, or the base is zero.
pub fn growth_rate(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    let (c, p) = (current?, previous?);
    if !c.is_finite() || !p.is_finite() || p == 0.0 {
        return None;
    }
    Some((c - p) / p * 100.0)
}

/// How complete a result set is, graded the way the upstream dashboard
/// reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub completeness: f64,
    pub quality: Quality,
    pub valid: usize,
    pub total: usize,
}

/// Share of records carrying a value, with a coarse grade:
/// >=80% Excellent, >=60% Good, >=40% Fair, else Poor.
pub fn assess_quality(records: &[IndicatorRecord]) -> QualityReport {
    let total = records.len();
    let valid = records
        .iter()
        .filter(|r| r.value.is_some_and(f64::is_finite))
        .count();
    let completeness = if total > 0 {
        valid as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let quality = if completeness >= 80.0 {
        Quality::Excellent
    } else if completeness >= 60.0 {
        Quality::Good
    } else if completeness >= 40.0 {
        Quality::Fair
    } else {
        Quality::Poor
    };
    QualityReport {
        completeness,
        quality,
        valid,
        total,
    }
}
