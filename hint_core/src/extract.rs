//! `extract`：从光标处向前提取正在输入的词。
//!
//! 约定：
//! - 分隔符只有空格 / 制表 / 回车 / 换行；其余字符一律算词的一部分
//! - 扫描范围是 `text[..caret]`，从不越过文首，也从不读光标之后
//! - 总函数：任何 (text, caret) 组合都有结果，不会失败

use crate::model::WordSpan;

/// 提词结果：词本身 + 它在全文中的位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordExtraction {
    pub word: String,
    pub span: WordSpan,
}

fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// 从 `caret`（字节偏移）向前扫描，返回紧邻光标的连续非分隔符串。
///
/// - `caret` 超出文本长度时按文本末尾处理；落在多字节字符中间时回退到字符边界
/// - 光标在文首或紧跟分隔符时返回空词，`span = { start: caret, len: 0 }`
pub fn word_before_caret(text: &str, caret: usize) -> WordExtraction {
    let mut caret = caret.min(text.len());
    while caret > 0 && !text.is_char_boundary(caret) {
        caret -= 1;
    }

    let mut start = caret;
    for (idx, ch) in text[..caret].char_indices().rev() {
        if is_separator(ch) {
            break;
        }
        start = idx;
    }

    WordExtraction {
        word: text[start..caret].to_string(),
        span: WordSpan {
            start,
            len: caret - start,
        },
    }
}
