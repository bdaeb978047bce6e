/// 键盘事件（逻辑层）。
///
/// 说明：
/// - `Session`/processor 只关心“语义按键”，不关心具体平台键值。
/// - 宿主负责把系统 key-down 事件（键名 + 修饰键）转换成 `KeyEvent`；
///   引擎未处理的按键交还宿主走默认编辑行为。

/// 引擎关心的按键；其余键名映射不到任何变体，宿主自行处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowUp,
    ArrowDown,
    Escape,
}

impl Key {
    /// 按 DOM `KeyboardEvent.key` 的键名解析。
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "Enter" => Some(Key::Enter),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// 一次 key-down：按键 + 修饰键。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

/// 引擎输出动作（对宿主的“副作用”请求）。
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// 接受候选后的文本替换：宿主须在**同一次**更新里应用新文本并把光标移到 `caret`
    ApplyEdit { text: String, caret: usize },
    /// 把焦点还给文本输入面
    FocusEditor,
}

/// 一次按键处理的结果。
///
/// `handled = true` 表示事件被引擎消费，宿主必须抑制该键的默认编辑行为
/// （例如 Enter 不得再插入换行）。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyResponse {
    pub handled: bool,
    pub actions: Vec<Action>,
}

impl KeyResponse {
    pub fn unhandled() -> Self {
        Self::default()
    }
}
