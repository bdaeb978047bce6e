//! `Session`：对宿主（CLI/GUI/Web）提供的会话对象。
//!
//! `Session` 自身不做业务逻辑判断，而是：
//! - 持有 `Engine`（词表 + 打分 + 拼接）
//! - 持有 `Context`（状态）与防抖窗口
//! - 把每次 `KeyEvent` 依次交给 processors，直到被消费
//! - 由宿主驱动：`update_text`/`update_vocabulary` 推输入，`tick(now)` 拉计算
//!
//! 生命周期：一个编辑会话一个 `Session`；`close` 之后一切输入被丢弃，
//! 待决的防抖窗口也随之取消，不会有计算在销毁后逃逸。

use std::time::{Duration, Instant};

use tracing::debug;

use crate::context::Context;
use crate::engine::Engine;
use crate::key_event::{Action, KeyEvent, KeyResponse};
use crate::model::{CaretLocation, UiState};
use crate::processor::{
    AcceptProcessor, DismissProcessor, NavigationProcessor, ProcessStatus, Processor,
    RevealProcessor,
};
use crate::scheduler::{Debounce, SUGGEST_QUIET};
use crate::vocabulary::Vocabulary;

/// 建议会话（一次编辑过程的状态机容器）。
pub struct Session<V> {
    engine: Engine<V>,
    ctx: Context,
    processors: Vec<Box<dyn Processor>>,
    debounce: Debounce,
    closed: bool,
}

impl<V> Session<V>
where
    V: Vocabulary,
{
    /// 创建会话，并组装默认 processors 链。
    pub fn new(engine: Engine<V>) -> Self {
        Self {
            engine,
            ctx: Context::default(),
            processors: vec![
                Box::new(NavigationProcessor),
                Box::new(AcceptProcessor),
                Box::new(DismissProcessor),
                Box::new(RevealProcessor),
            ],
            debounce: Debounce::new(SUGGEST_QUIET),
            closed: false,
        }
    }

    /// 调整静默期（默认 `SUGGEST_QUIET`）。
    pub fn quiet_period(mut self, quiet: Duration) -> Self {
        self.debounce = Debounce::new(quiet);
        self
    }

    /// 宿主推送了新的文本/光标；重排防抖窗口。关闭后丢弃。
    pub fn update_text(&mut self, text: impl Into<String>, caret: CaretLocation, now: Instant) {
        if self.closed {
            return;
        }
        self.ctx.set_input(text.into(), caret);
        self.debounce.touch(now);
    }

    /// 语法后端推送了新的词表；同样走防抖。关闭后丢弃。
    pub fn update_vocabulary(&mut self, vocabulary: V, now: Instant) {
        if self.closed {
            return;
        }
        self.engine.set_vocabulary(vocabulary);
        self.debounce.touch(now);
    }

    /// 驱动一次调度：窗口到期则重算并返回新快照，否则返回 `None`。
    pub fn tick(&mut self, now: Instant) -> Option<UiState> {
        if self.closed || !self.debounce.fire(now) {
            return None;
        }
        self.ctx.recompute(&self.engine);
        Some(self.ctx.ui_state())
    }

    /// 处理一个键盘事件；`handled = true` 时宿主须抑制默认编辑行为。
    pub fn handle_key(&mut self, key_event: &KeyEvent) -> KeyResponse {
        if self.closed {
            return KeyResponse::unhandled();
        }
        let mut actions = Vec::new();
        for p in &mut self.processors {
            let (status, mut a) = p.process(&self.engine, &mut self.ctx, key_event);
            actions.append(&mut a);
            if status == ProcessStatus::Consume {
                return KeyResponse {
                    handled: true,
                    actions,
                };
            }
        }
        KeyResponse {
            handled: false,
            actions,
        }
    }

    /// 鼠标点击候选：等价于对被点下标做一次接受。
    pub fn click(&mut self, index: usize) -> Vec<Action> {
        if self.closed {
            return Vec::new();
        }
        self.ctx.accept_at(&self.engine, index)
    }

    /// 获取当前 UI 快照（只读）。
    pub fn ui_state(&self) -> UiState {
        self.ctx.ui_state()
    }

    /// 是否还有待决的重算窗口（调试/测试用）。
    pub fn recompute_pending(&self) -> bool {
        !self.closed && self.debounce.pending()
    }

    /// 结束会话：取消待决计算，此后一切输入被丢弃。
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.debounce.cancel();
        self.closed = true;
        debug!("session closed");
    }
}
