//! `filter`：候选后处理（排序 / 阈值过滤）。

use std::cmp::Ordering;

use crate::model::RankedCandidate;

/// 录取阈值：得分必须**严格大于**该值才会出现在弹窗里。
pub const ACCEPT_THRESHOLD: f64 = 0.6;

/// Filter：对打分后的候选列表做后处理。
pub trait Filter: Send + Sync {
    fn apply(&self, candidates: Vec<RankedCandidate>) -> Vec<RankedCandidate>;
}

/// 默认 filter：按得分降序稳定排序（同分保持词表顺序），丢弃 `score <= threshold`。
pub struct ThresholdSort {
    pub threshold: f64,
}

impl Default for ThresholdSort {
    fn default() -> Self {
        Self {
            threshold: ACCEPT_THRESHOLD,
        }
    }
}

impl Filter for ThresholdSort {
    fn apply(&self, mut candidates: Vec<RankedCandidate>) -> Vec<RankedCandidate> {
        // 得分不会是 NaN（两条打分路径都是有限值），partial_cmp 失败时视为同分
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        candidates.retain(|c| c.score > self.threshold);
        candidates
    }
}
