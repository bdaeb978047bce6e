//! 会话级集成测试：宿主视角驱动 `Session` 的完整交互流。

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use hint_core::engine::Engine;
use hint_core::key_event::{Action, Key, KeyEvent};
use hint_core::model::CaretLocation;
use hint_core::session::Session;

const QUIET: Duration = Duration::from_millis(800);

fn vocab(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn session(words: &[&str]) -> Session<Vec<String>> {
    Session::new(Engine::new(vocab(words)))
}

/// 光标在文本末尾（行/列按原型编辑器的口径：行号 1 起，列为末行字符数）。
fn caret_at_end(text: &str) -> CaretLocation {
    let line = text.split('\n').count();
    let column = text.split('\n').next_back().unwrap_or("").chars().count();
    CaretLocation {
        line,
        column,
        index: text.len(),
    }
}

/// 推送文本并直接推进到防抖窗口之后。
fn type_and_settle(session: &mut Session<Vec<String>>, text: &str, now: Instant) -> Instant {
    session.update_text(text, caret_at_end(text), now);
    let settled = now + QUIET;
    session.tick(settled);
    settled
}

#[test]
fn typing_a_close_word_offers_ranked_candidates() {
    let mut s = session(&["apple", "banana", "cherry"]);
    type_and_settle(&mut s, "appl", Instant::now());

    let ui = s.ui_state();
    assert!(ui.visible);
    assert_eq!(ui.candidate_list, vec!["apple".to_string()]);
    assert_eq!(ui.selected, Some(0));
}

#[test]
fn too_distant_query_offers_nothing() {
    // "ap" 对 "apple" 只有 Jaccard 0.5，低于阈值
    let mut s = session(&["apple", "banana", "cherry"]);
    type_and_settle(&mut s, "ap", Instant::now());

    let ui = s.ui_state();
    assert!(!ui.visible);
    assert!(ui.candidate_list.is_empty());
    assert_eq!(ui.selected, None);
}

#[test]
fn debounce_coalesces_a_burst_into_one_recompute() {
    let mut s = session(&["apple"]);
    let t0 = Instant::now();

    // 四次连续击键，间隔都小于静默期：中间不应有任何一次重算
    s.update_text("a", caret_at_end("a"), t0);
    assert_eq!(s.tick(t0 + Duration::from_millis(700)), None);
    s.update_text("ap", caret_at_end("ap"), t0 + Duration::from_millis(700));
    s.update_text("app", caret_at_end("app"), t0 + Duration::from_millis(900));
    s.update_text("appl", caret_at_end("appl"), t0 + Duration::from_millis(1100));
    assert_eq!(s.tick(t0 + Duration::from_millis(1200)), None);

    // 窗口从最后一次输入起算：用的是最后的输入（last-write-wins）
    let ui = s.tick(t0 + Duration::from_millis(1900)).expect("window closed");
    assert_eq!(ui.candidate_list, vec!["apple".to_string()]);
    assert!(!s.recompute_pending());
}

#[test]
fn navigation_cycles_through_candidates() {
    // "appl" 对 "pal"/"lap" 均为 1.0，对 "apple" 0.75 → 三个候选
    let mut s = session(&["apple", "pal", "lap"]);
    type_and_settle(&mut s, "appl", Instant::now());
    assert_eq!(s.ui_state().candidate_list.len(), 3);
    assert_eq!(s.ui_state().selected, Some(0));

    // 从 0 向上回绕到末尾
    let r = s.handle_key(&KeyEvent::plain(Key::ArrowUp));
    assert!(r.handled);
    assert_eq!(s.ui_state().selected, Some(2));

    // 从末尾向下回绕到 0
    let r = s.handle_key(&KeyEvent::plain(Key::ArrowDown));
    assert!(r.handled);
    assert_eq!(s.ui_state().selected, Some(0));
}

#[test]
fn keys_are_ignored_while_idle() {
    let mut s = session(&["apple"]);
    for key in [Key::ArrowUp, Key::ArrowDown, Key::Enter, Key::Escape] {
        let r = s.handle_key(&KeyEvent::plain(key));
        assert!(!r.handled, "{key:?} 在 Idle 态不应被消费");
        assert!(r.actions.is_empty());
    }
}

#[test]
fn enter_accepts_and_the_next_tick_is_suppressed() {
    let mut s = session(&["apple"]);
    let now = type_and_settle(&mut s, "appl rest", Instant::now());
    // 光标手动放到 "appl" 之后
    s.update_text(
        "appl rest",
        CaretLocation {
            line: 1,
            column: 4,
            index: 4,
        },
        now,
    );
    let now = now + QUIET;
    s.tick(now);
    assert!(s.ui_state().visible);

    let r = s.handle_key(&KeyEvent::plain(Key::Enter));
    assert!(r.handled);
    assert_eq!(
        r.actions,
        vec![
            Action::ApplyEdit {
                // 插入的空格与原有分隔符并存（原型行为）
                text: "apple  rest".to_string(),
                caret: 6,
            },
            Action::FocusEditor,
        ],
    );

    // 宿主应用编辑并回推文本：这次变更引发的 tick 必须被吞掉
    s.update_text(
        "apple  rest",
        CaretLocation {
            line: 1,
            column: 6,
            index: 6,
        },
        now,
    );
    let ui = s.tick(now + QUIET).expect("suppressed tick still fires");
    assert!(!ui.visible);
    assert!(ui.candidate_list.is_empty());

    // 吞一次就恢复正常：再输入同样的前缀会重新出建议
    let now = now + QUIET;
    s.update_text(
        "appl rest",
        CaretLocation {
            line: 1,
            column: 4,
            index: 4,
        },
        now,
    );
    let ui = s.tick(now + QUIET).expect("window closed");
    assert!(ui.visible);
}

#[test]
fn click_accepts_the_clicked_candidate_not_the_selected_one() {
    let mut s = session(&["apple", "pal", "lap"]);
    type_and_settle(&mut s, "appl", Instant::now());
    assert_eq!(s.ui_state().selected, Some(0));

    let actions = s.click(2);
    assert_eq!(
        actions,
        vec![
            Action::ApplyEdit {
                text: "apple ".to_string(),
                caret: 6,
            },
            Action::FocusEditor,
        ],
    );
}

#[test]
fn escape_hides_and_ctrl_enter_reveals() {
    let mut s = session(&["apple"]);
    type_and_settle(&mut s, "appl", Instant::now());
    assert!(s.ui_state().visible);

    let r = s.handle_key(&KeyEvent::plain(Key::Escape));
    assert!(r.handled);
    let ui = s.ui_state();
    assert!(!ui.visible);
    // 隐藏不清空：候选与高亮保留
    assert_eq!(ui.candidate_list, vec!["apple".to_string()]);
    assert_eq!(ui.selected, Some(0));

    // 隐藏后普通 Enter 不再被消费（交还宿主默认行为）
    let r = s.handle_key(&KeyEvent::plain(Key::Enter));
    assert!(!r.handled);

    let r = s.handle_key(&KeyEvent::ctrl(Key::Enter));
    assert!(r.handled);
    assert!(s.ui_state().visible);
}

#[test]
fn ctrl_enter_with_no_candidates_is_consumed_but_does_nothing() {
    let mut s = session(&["apple"]);
    let r = s.handle_key(&KeyEvent::ctrl(Key::Enter));
    assert!(r.handled);
    assert!(!s.ui_state().visible);
}

#[test]
fn vocabulary_update_triggers_a_recompute() {
    let mut s = session(&[]);
    let t0 = Instant::now();
    let now = type_and_settle(&mut s, "appl", t0);
    assert!(!s.ui_state().visible);

    s.update_vocabulary(vocab(&["apple"]), now);
    let ui = s.tick(now + QUIET).expect("window closed");
    assert_eq!(ui.candidate_list, vec!["apple".to_string()]);
}

#[test]
fn closed_session_drops_everything() {
    let mut s = session(&["apple"]);
    let t0 = Instant::now();
    s.update_text("appl", caret_at_end("appl"), t0);
    s.close();

    // 待决窗口已取消，关闭后的输入与 tick 全部被丢弃
    assert!(!s.recompute_pending());
    assert_eq!(s.tick(t0 + QUIET), None);
    s.update_text("appl", caret_at_end("appl"), t0 + QUIET);
    assert_eq!(s.tick(t0 + QUIET + QUIET), None);
    assert!(!s.handle_key(&KeyEvent::plain(Key::Enter)).handled);
    assert!(s.click(0).is_empty());
}
