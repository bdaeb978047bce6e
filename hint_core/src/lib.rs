//! `hint_core`：纯逻辑层（std-only 核心），不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI/GUI/Web 宿主都能复用同一套建议逻辑
//! - **分层清晰**：session -> processor -> engine（extract -> rank -> filter）-> 输出（`UiState`）
//! - **确定性**：时间（防抖）通过显式 `Instant` 注入，测试无需真实计时器
pub mod context;
pub mod engine;
pub mod extract;
pub mod filter;
pub mod key_event;
pub mod model;
pub mod processor;
pub mod rank;
pub mod scheduler;
pub mod session;
pub mod vocabulary;
