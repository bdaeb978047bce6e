/// 光标前正在输入的词在全文中的位置（字节偏移）。
///
/// 原型里的 `startIndex = -1`（“光标下没有词”）在这里不需要：
/// 需要表达“无词”的地方统一用 `Option<WordSpan>`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    /// 词首字节偏移
    pub start: usize,
    /// 词的字节长度（0 表示光标紧跟分隔符或在文首）
    pub len: usize,
}

impl WordSpan {
    /// 词尾字节偏移（不含）。
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// 光标位置：二维（行/列，弹窗定位用）+ 一维（字节偏移，提词用）。
///
/// 由文本宿主维护；引擎只读，从不回写。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretLocation {
    /// 行号（1 起）
    pub line: usize,
    /// 列号（当前行内的字符数）
    pub column: usize,
    /// 全文字节偏移
    pub index: usize,
}

/// 候选词 + 相似度得分。
///
/// 每个 tick 重算一次，不持久化。Jaccard 分支得分落在 (0, 1]；
/// 前缀分支（`2 * len(v) / len(q)`）可能超过 1.0，保留原始值以维持排序。
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    /// 词表原文
    pub word: String,
    /// 相似度（越大越靠前）
    pub score: f64,
}

/// 引擎给弹窗/宿主的“快照视图”。
///
/// 设计目标：
/// - 渲染层只读 `UiState`，不直接读写 `Context`
/// - 弹窗定位只拿逻辑光标（行/列），像素几何由宿主换算
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// 当前候选词（已按得分降序）
    pub candidate_list: Vec<String>,
    /// 高亮候选下标；候选为空时为 `None`
    pub selected: Option<usize>,
    /// 弹窗是否展示（展示 ⇒ 候选非空）
    pub visible: bool,
    /// 弹窗定位用的光标位置
    pub caret: CaretLocation,
}
