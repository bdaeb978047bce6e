//! `rank`：把查询词与词表逐一打分，产出候选。
//!
//! 打分规则（大小写不敏感，长度按字符数计）：
//! - 前缀分支：查询比词条**严格更长**且词条是查询的前缀时，
//!   `score = 2 * len(v) / len(q)`。方向是刻意不对称的：偏向“已经打完
//!   甚至打超了的短关键字”，反向（词条更长）不享受加成，只走 Jaccard。
//! - 其余情况：对两串的“去重大写字符集合”求 Jaccard 系数
//!   （交集大小 / 并集大小），忽略字符顺序与重复。
//!
//! 阈值过滤与排序不在这里做，见 `filter`。

use std::collections::BTreeSet;

use crate::model::RankedCandidate;
use crate::vocabulary::Vocabulary;

/// Ranker：把查询词翻译成带得分的候选列表（未过滤、未排序）。
pub trait Ranker: Send + Sync {
    fn rank(&self, query: &str, vocabulary: &dyn Vocabulary) -> Vec<RankedCandidate>;
}

/// 默认实现：前缀加成 + 字符集 Jaccard。
pub struct SimilarityRanker;

impl SimilarityRanker {
    /// 查询 `query` 对词条 `entry` 的相似度。
    ///
    /// 词条与查询大小写不敏感地相等时恒为 1.0
    /// （长度相等走不进前缀分支，Jaccard 给 1.0）。
    pub fn score(query: &str, entry: &str) -> f64 {
        let query_upper = query.to_uppercase();
        let entry_upper = entry.to_uppercase();
        let query_len = query_upper.chars().count();
        let entry_len = entry_upper.chars().count();

        if query_len > entry_len && query_upper.starts_with(&entry_upper) {
            return 2.0 * entry_len as f64 / query_len as f64;
        }

        let query_set: BTreeSet<char> = query_upper.chars().collect();
        let entry_set: BTreeSet<char> = entry_upper.chars().collect();
        let union = query_set.union(&entry_set).count();
        if union == 0 {
            return 0.0;
        }
        let intersection = query_set.intersection(&entry_set).count();
        intersection as f64 / union as f64
    }
}

impl Ranker for SimilarityRanker {
    fn rank(&self, query: &str, vocabulary: &dyn Vocabulary) -> Vec<RankedCandidate> {
        vocabulary
            .words()
            .iter()
            .map(|word| RankedCandidate {
                word: word.clone(),
                score: Self::score(query, word),
            })
            .collect()
    }
}
