//! `scheduler`：防抖重算调度。
//!
//! 设计目标：
//! - **确定性**：时间通过显式 `Instant` 注入（`touch(now)` / `fire(now)`），
//!   core 不持有计时器线程，测试不需要真实 sleep
//! - **last-write-wins**：静默期内的每次 `touch` 都会把截止时间向后推，
//!   一阵连续输入只换来一次计算，且用的是最后一次输入
//! - 单线程驱动：同一会话同一时刻至多一个待决计算，按截止顺序执行
//!
//! `Debounce` 只管时间窗；`DebouncedTask` 在其上补齐通用 hook 的完整语义
//! （可选的 cleanup 在下一次执行前运行，销毁时也运行）。

use std::time::{Duration, Instant};

/// 通用防抖的默认静默期。
pub const DEFAULT_QUIET: Duration = Duration::from_millis(100);
/// 建议会话使用的静默期（重算比普通联动更重，窗口放宽）。
pub const SUGGEST_QUIET: Duration = Duration::from_millis(800);

/// 防抖时间窗：`touch` 重置截止时间，`fire` 消费已到期的截止时间。
#[derive(Debug, Clone)]
pub struct Debounce {
    quiet: Duration,
    deadline: Option<Instant>,
    ignore_initial: bool,
    touched: bool,
}

impl Debounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
            ignore_initial: false,
            touched: false,
        }
    }

    /// 忽略首次 `touch`（对应“首次渲染不触发”的模式；建议会话不用）。
    pub fn ignore_initial(mut self) -> Self {
        self.ignore_initial = true;
        self
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// 某个被监听的输入变了：取消旧截止时间，改排到 `now + quiet`。
    pub fn touch(&mut self, now: Instant) {
        let first = !self.touched;
        self.touched = true;
        if first && self.ignore_initial {
            return;
        }
        self.deadline = Some(now + self.quiet);
    }

    /// 截止时间已到则消费之并返回 true；否则 false。
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// 是否还有待决计算。
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// 计算结束后交还的清理动作。
pub type Cleanup = Box<dyn FnOnce() + Send>;

/// 防抖任务：回调可以交还一个 cleanup，保证它在**下一次**回调执行之前
/// 运行，销毁（`dispose`/`Drop`）时也运行。
pub struct DebouncedTask<F>
where
    F: FnMut() -> Option<Cleanup>,
{
    debounce: Debounce,
    run: F,
    cleanup: Option<Cleanup>,
}

impl<F> DebouncedTask<F>
where
    F: FnMut() -> Option<Cleanup>,
{
    pub fn new(quiet: Duration, run: F) -> Self {
        Self {
            debounce: Debounce::new(quiet),
            run,
            cleanup: None,
        }
    }

    /// 忽略首次 `touch` 的模式（见 `Debounce::ignore_initial`）。
    pub fn ignore_initial(mut self) -> Self {
        self.debounce = self.debounce.clone().ignore_initial();
        self
    }

    pub fn touch(&mut self, now: Instant) {
        self.debounce.touch(now);
    }

    /// 窗口到期则执行回调（先跑上一次的 cleanup），返回是否执行了。
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.debounce.fire(now) {
            return false;
        }
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
        self.cleanup = (self.run)();
        true
    }

    pub fn pending(&self) -> bool {
        self.debounce.pending()
    }

    /// 取消待决计算并运行残留 cleanup；之后的 `touch`/`poll` 不再生效。
    pub fn dispose(&mut self) {
        self.debounce.cancel();
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl<F> Drop for DebouncedTask<F>
where
    F: FnMut() -> Option<Cleanup>,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
