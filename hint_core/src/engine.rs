//! `engine`：把（全文 + 光标 + 词表）转成候选，并负责接受后的文本拼接。
//!
//! 结构上对应流水线：
//! - engine（编排） -> extract（提词） -> rank（打分） -> filter（阈值 + 排序）
//! - accept 路径：`splice` 产出新文本与回填光标

use tracing::debug;

use crate::extract::{WordExtraction, word_before_caret};
use crate::filter::{Filter, ThresholdSort};
use crate::model::{RankedCandidate, WordSpan};
use crate::rank::{Ranker, SimilarityRanker};
use crate::vocabulary::Vocabulary;

/// 接受候选后的文本替换结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// 替换后的全文
    pub text: String,
    /// 替换后光标应落到的字节偏移（插入空格之后）
    pub caret: usize,
}

/// 引擎：词表 + 打分 + 过滤的编排者。
pub struct Engine<V> {
    /// 词表（由语法后端提供，core 不关心来源）
    vocabulary: V,
    ranker: SimilarityRanker,
    filter: ThresholdSort,
    /// 触发建议的最短查询长度（字符数）；更短的词视为“无建议”
    min_query_len: usize,
}

impl<V> Engine<V>
where
    V: Vocabulary,
{
    pub fn new(vocabulary: V) -> Self {
        Self {
            vocabulary,
            ranker: SimilarityRanker,
            filter: ThresholdSort::default(),
            min_query_len: 2,
        }
    }

    /// 调整录取阈值（默认 0.6，严格大于才录取）。
    pub fn accept_threshold(mut self, threshold: f64) -> Self {
        self.filter = ThresholdSort { threshold };
        self
    }

    /// 调整触发建议的最短查询长度（默认 2；0 会被拉回 1，空查询永不进入打分）。
    pub fn min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len.max(1);
        self
    }

    /// 替换词表（语法后端推送了新的关键字列表）。
    pub fn set_vocabulary(&mut self, vocabulary: V) {
        self.vocabulary = vocabulary;
    }

    /// 提词 + 打分 + 过滤：一次 tick 的纯计算部分。
    ///
    /// 词太短（字符数 < `min_query_len`）或词表为空时候选为空，不是错误。
    pub fn suggest(&self, text: &str, caret: usize) -> (WordExtraction, Vec<RankedCandidate>) {
        let extraction = word_before_caret(text, caret);
        if extraction.word.chars().count() < self.min_query_len {
            return (extraction, Vec::new());
        }
        let scored = self.ranker.rank(&extraction.word, &self.vocabulary);
        let candidates = self.filter.apply(scored);
        debug!(
            query = %extraction.word,
            candidates = candidates.len(),
            "suggest"
        );
        (extraction, candidates)
    }

    /// 接受候选：`text[..start] + word + " " + text[start+len..]`，
    /// 光标落在插入的空格之后。
    pub fn splice(&self, text: &str, span: WordSpan, word: &str) -> TextEdit {
        let start = span.start.min(text.len());
        let end = span.end().min(text.len());
        let mut out = String::with_capacity(text.len() + word.len() + 1);
        out.push_str(&text[..start]);
        out.push_str(word);
        out.push(' ');
        out.push_str(&text[end..]);
        TextEdit {
            text: out,
            caret: start + word.len() + 1,
        }
    }
}
