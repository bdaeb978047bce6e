//! `hint_vocab`：关键字词表的来源实现。
//!
//! core 只认 `Vocabulary` trait；这里提供两种来源：
//! - 语法后端直接推送的内存列表（`KeywordList::from_words`）
//! - 行式关键字文件（`KeywordList::from_path`），一行一个词

use std::{fs, path::Path};

use hint_core::vocabulary::Vocabulary;
use thiserror::Error;

/// 词表加载错误（core 自身无 I/O，错误只在这一层出现）。
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("读取词表失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 有序关键字列表。
///
/// 文件格式（简化版）：
/// - 一行一个关键字，首尾空白被剔除
/// - 允许 `#` 开头注释行与空行
/// - 保持文件/推送顺序（同分候选的排序依赖这个顺序）
#[derive(Debug, Clone, Default)]
pub struct KeywordList {
    words: Vec<String>,
}

impl KeywordList {
    /// 语法后端推送的关键字列表。
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        let s = fs::read_to_string(path)?;
        Ok(Self::from_lines(&s))
    }

    pub fn from_lines(s: &str) -> Self {
        let words = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Vocabulary for KeywordList {
    fn words(&self) -> &[String] {
        &self.words
    }
}
