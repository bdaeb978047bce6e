//! `processor`：键盘事件处理链。
//!
//! 按顺序处理 `KeyEvent`，对 `Context` 做状态变更，并可产生 `Action`
//! （文本替换、焦点归还）。被消费的事件意味着宿主必须抑制默认编辑行为。
//!
//! 当前链路（`Session::new` 默认组装）：
//! - `NavigationProcessor`：弹窗展示时 ArrowUp/ArrowDown 循环移动高亮
//! - `AcceptProcessor`：弹窗展示时 Enter 接受高亮候选
//! - `DismissProcessor`：弹窗展示时 Escape 隐藏（保留候选）
//! - `RevealProcessor`：弹窗隐藏时 Ctrl+Enter 重新展示

use crate::context::Context;
use crate::engine::TextEdit;
use crate::extract::WordExtraction;
use crate::key_event::{Action, Key, KeyEvent};
use crate::model::{RankedCandidate, WordSpan};

/// 给 processors 的对象安全引擎接口（避免在 processors 层引入泛型爆炸）。
pub trait EngineFacade {
    /// 提词 + 打分 + 过滤：一次 tick 的纯计算部分
    fn suggest(&self, text: &str, caret: usize) -> (WordExtraction, Vec<RankedCandidate>);
    /// 接受候选的文本替换
    fn splice(&self, text: &str, span: WordSpan, word: &str) -> TextEdit;
}

impl<V> EngineFacade for crate::engine::Engine<V>
where
    V: crate::vocabulary::Vocabulary,
{
    fn suggest(&self, text: &str, caret: usize) -> (WordExtraction, Vec<RankedCandidate>) {
        crate::engine::Engine::suggest(self, text, caret)
    }

    fn splice(&self, text: &str, span: WordSpan, word: &str) -> TextEdit {
        crate::engine::Engine::splice(self, text, span, word)
    }
}

/// Processor 执行结果：是否“消费”了本次事件。
///
/// - `Consume`：本 processor 已处理该事件，后续 processor 不再执行，
///   宿主须抑制该键的默认行为
/// - `Continue`：本 processor 不处理该事件，交给下一个 processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume,
    Continue,
}

/// Processor：处理键盘事件并改变 Context；必要时产生输出动作。
pub trait Processor: Send + Sync {
    fn process(
        &mut self,
        engine: &dyn EngineFacade,
        context: &mut Context,
        key_event: &KeyEvent,
    ) -> (ProcessStatus, Vec<Action>);
}

/// 弹窗展示时的上下移动。
pub struct NavigationProcessor;

impl Processor for NavigationProcessor {
    fn process(
        &mut self,
        _engine: &dyn EngineFacade,
        context: &mut Context,
        key_event: &KeyEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        if !context.visible {
            return (ProcessStatus::Continue, Vec::new());
        }
        match key_event.key {
            Key::ArrowDown => {
                context.step_selection(1);
                (ProcessStatus::Consume, Vec::new())
            }
            Key::ArrowUp => {
                context.step_selection(-1);
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

/// 弹窗展示时的 Enter 接受。
pub struct AcceptProcessor;

impl Processor for AcceptProcessor {
    fn process(
        &mut self,
        engine: &dyn EngineFacade,
        context: &mut Context,
        key_event: &KeyEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        if !context.visible || key_event.key != Key::Enter {
            return (ProcessStatus::Continue, Vec::new());
        }
        let actions = context.accept_selected(engine);
        (ProcessStatus::Consume, actions)
    }
}

/// 弹窗展示时的 Escape 隐藏（候选与高亮保留，可被 Ctrl+Enter 找回）。
pub struct DismissProcessor;

impl Processor for DismissProcessor {
    fn process(
        &mut self,
        _engine: &dyn EngineFacade,
        context: &mut Context,
        key_event: &KeyEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        if !context.visible || key_event.key != Key::Escape {
            return (ProcessStatus::Continue, Vec::new());
        }
        context.dismiss();
        (ProcessStatus::Consume, Vec::new())
    }
}

/// 弹窗隐藏时的 Ctrl+Enter 重新展示（无候选则无事发生，但事件仍被消费）。
pub struct RevealProcessor;

impl Processor for RevealProcessor {
    fn process(
        &mut self,
        _engine: &dyn EngineFacade,
        context: &mut Context,
        key_event: &KeyEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        if context.visible || key_event.key != Key::Enter || !key_event.ctrl {
            return (ProcessStatus::Continue, Vec::new());
        }
        context.reveal();
        (ProcessStatus::Consume, Vec::new())
    }
}
