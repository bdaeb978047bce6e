//! `Context`：processor 链共享的唯一状态容器（会话状态机本体）。
//!
//! 状态约定（Idle / Offering / Suppressed）：
//! - Idle：候选为空、弹窗隐藏、`selected = None`、`pending_word = None`
//! - Offering：候选非空、弹窗展示、`selected` 落在候选范围内
//! - Suppressed：`gate = SuppressOnce`，**恰好**吞掉下一次 recompute，
//!   然后自动回到正常调度（`RecomputeGate::take` 的取走语义保证一次性）

use tracing::debug;

use crate::key_event::Action;
use crate::model::{CaretLocation, UiState, WordSpan};
use crate::processor::EngineFacade;

/// Suppressed 态的一次性门闩。
///
/// 用状态标签而不是裸布尔：`take` 无条件回到 `Open`，
/// “恰好吞一次”由结构保证，不依赖调用方手工复位。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecomputeGate {
    #[default]
    Open,
    SuppressOnce,
}

impl RecomputeGate {
    fn arm(&mut self) {
        *self = Self::SuppressOnce;
    }

    fn take(&mut self) -> bool {
        std::mem::replace(self, Self::Open) == Self::SuppressOnce
    }
}

/// 建议会话上下文：每个编辑会话一份，从不跨会话共享。
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// 全文快照（宿主推送；引擎只读语义，accept 也只发 Action 不回写）
    pub text: String,
    /// 光标位置（宿主推送）
    pub caret: CaretLocation,
    /// 当前候选（已按得分降序）
    pub candidate_list: Vec<String>,
    /// 高亮候选下标；候选为空时为 `None`
    pub selected: Option<usize>,
    /// 弹窗是否展示；展示 ⇒ 候选非空
    pub visible: bool,
    /// 正在被补全的词的位置；候选为空时为 `None`
    pub pending_word: Option<WordSpan>,
    /// 接受候选后武装：下一次 recompute 直接清场返回，不重新提词
    pub gate: RecomputeGate,
}

impl Context {
    /// 宿主推送了新的文本/光标。
    pub fn set_input(&mut self, text: String, caret: CaretLocation) {
        self.text = text;
        self.caret = caret;
    }

    /// 一次调度 tick：先清场，再决定是否重新提词 + 打分。
    ///
    /// - 门闩武装时只消费门闩并丢弃 `pending_word`（接受候选
    ///   引发的文本回推不应再弹一次建议）
    /// - 词长 ≤ 1 或无候选时停在 Idle
    pub fn recompute(&mut self, engine: &dyn EngineFacade) {
        self.candidate_list.clear();
        self.selected = None;
        self.visible = false;

        if self.gate.take() {
            self.pending_word = None;
            debug!("recompute suppressed");
            return;
        }

        let (extraction, candidates) = engine.suggest(&self.text, self.caret.index);
        if candidates.is_empty() {
            self.pending_word = None;
            return;
        }

        self.candidate_list = candidates.into_iter().map(|c| c.word).collect();
        self.selected = Some(0);
        self.visible = true;
        self.pending_word = Some(extraction.span);
    }

    /// 高亮循环移动：`delta = +1` 向下、`-1` 向上，越界用 `rem_euclid` 回绕。
    pub fn step_selection(&mut self, delta: isize) {
        if !self.visible || self.candidate_list.is_empty() {
            return;
        }
        let len = self.candidate_list.len() as isize;
        let current = self.selected.unwrap_or(0) as isize;
        self.selected = Some((current + delta).rem_euclid(len) as usize);
    }

    /// 接受下标 `index` 处的候选（Enter 用高亮下标，点击用被点的下标）。
    ///
    /// 产出替换动作并武装抑制门闩；`pending_word` 缺失时跳过替换、
    /// 只做门闩与焦点（对应原型里 `startIndex = -1` 的分支）。
    pub fn accept_at(&mut self, engine: &dyn EngineFacade, index: usize) -> Vec<Action> {
        if !self.visible {
            return Vec::new();
        }
        // 结构上不可能越界（selected 始终落在候选范围内）；违反即内部缺陷
        debug_assert!(index < self.candidate_list.len(), "accept index out of range");
        let Some(word) = self.candidate_list.get(index) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        self.gate.arm();
        if let Some(span) = self.pending_word {
            let edit = engine.splice(&self.text, span, word);
            debug!(word = %word, caret = edit.caret, "accept");
            actions.push(Action::ApplyEdit {
                text: edit.text,
                caret: edit.caret,
            });
        }
        actions.push(Action::FocusEditor);
        actions
    }

    /// 接受当前高亮候选。
    pub fn accept_selected(&mut self, engine: &dyn EngineFacade) -> Vec<Action> {
        match self.selected {
            Some(index) => self.accept_at(engine, index),
            None => Vec::new(),
        }
    }

    /// Escape：只隐藏弹窗，保留候选与高亮，便于 Ctrl+Enter 立刻重新展示。
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Ctrl+Enter（弹窗隐藏时）：有候选才重新展示，否则无事发生。
    pub fn reveal(&mut self) {
        if !self.candidate_list.is_empty() {
            self.visible = true;
        }
    }

    /// 生成渲染层只读快照。
    pub fn ui_state(&self) -> UiState {
        UiState {
            candidate_list: self.candidate_list.clone(),
            selected: self.selected,
            visible: self.visible,
            caret: self.caret,
        }
    }
}
