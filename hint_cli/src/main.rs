use std::{
    io::{self, Write},
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::Parser;
use hint_core::{
    engine::Engine,
    key_event::{Action, Key, KeyEvent},
    model::CaretLocation,
    session::Session,
};
use hint_vocab::KeywordList;
use tracing_subscriber::EnvFilter;

/// 建议引擎的终端演示：输入一行文本，光标视为在行尾，
/// 防抖窗口到期后展示候选并进入选择模式。
#[derive(Debug, Parser)]
#[command(name = "hint_cli")]
struct Args {
    /// 关键字词表路径（一行一个词，`#` 注释）
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// 防抖静默期（毫秒）
    #[arg(long, default_value_t = 800)]
    quiet_ms: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let dict_path = args.keywords.unwrap_or_else(default_keywords_path);
    let keywords = KeywordList::from_path(&dict_path)
        .with_context(|| format!("加载词表 {} 失败", dict_path.display()))?;
    tracing::info!(words = keywords.len(), path = %dict_path.display(), "词表已加载");
    let quiet = Duration::from_millis(args.quiet_ms);

    let engine = Engine::new(keywords);
    let mut session = Session::new(engine).quiet_period(quiet);
    repl(&mut session, &dict_path, quiet)
}

fn default_keywords_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("asset").join("keywords.txt")
}

/// 光标在文本末尾（行号 1 起，列为末行字符数）。
fn caret_at_end(text: &str) -> CaretLocation {
    let line = text.split('\n').count();
    let column = text.split('\n').next_back().unwrap_or("").chars().count();
    CaretLocation {
        line,
        column,
        index: text.len(),
    }
}

/// 推送文本后等完静默期再 tick（演示程序用真实时钟）。
fn settle(session: &mut Session<KeywordList>, text: &str, quiet: Duration) {
    session.update_text(text, caret_at_end(text), Instant::now());
    thread::sleep(quiet);
    session.tick(Instant::now());
}

fn repl(session: &mut Session<KeywordList>, dict_path: &PathBuf, quiet: Duration) -> anyhow::Result<()> {
    let mut out = io::stdout();
    let mut line = String::new();
    let mut code;
    writeln!(out, "hint-rs demo | keywords: {}", dict_path.display())?;
    writeln!(out, "输入一行文本后回车（光标视为在行尾）。输入 :q 退出。")?;

    loop {
        line.clear();
        print!("text> ");
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\r', '\n']);
        if input == ":q" || input == ":quit" || input == ":exit" {
            break;
        }
        code = input.to_string();
        settle(session, &code, quiet);

        // selection loop: 在同一份候选上导航/接受/隐藏
        loop {
            let ui = session.ui_state();
            if !ui.visible {
                if ui.candidate_list.is_empty() {
                    writeln!(out, "(无候选)")?;
                    break;
                }
                writeln!(out, "(弹窗已隐藏；r = Ctrl+Enter 重新展示)")?;
            } else {
                for (i, word) in ui.candidate_list.iter().enumerate() {
                    let marker = if ui.selected == Some(i) { ">" } else { " " };
                    writeln!(out, "{marker} {}. {word}", i + 1)?;
                }
            }

            line.clear();
            print!("act [Enter=接受, j/k=下/上, e=Esc, r=Ctrl+Enter, 1-9=点击, q=继续输入]> ");
            out.flush()?;
            if io::stdin().read_line(&mut line)? == 0 {
                session.close();
                return Ok(());
            }
            let sel = line.trim();

            let actions = match sel {
                "q" => break,
                "" => session.handle_key(&KeyEvent::plain(Key::Enter)).actions,
                "j" => session.handle_key(&KeyEvent::plain(Key::ArrowDown)).actions,
                "k" => session.handle_key(&KeyEvent::plain(Key::ArrowUp)).actions,
                "e" => session.handle_key(&KeyEvent::plain(Key::Escape)).actions,
                "r" => session.handle_key(&KeyEvent::ctrl(Key::Enter)).actions,
                _ => match sel.parse::<usize>() {
                    Ok(n) if (1..=9).contains(&n) && n <= session.ui_state().candidate_list.len() => {
                        session.click(n - 1)
                    }
                    _ => {
                        writeln!(out, "无效输入，请用 Enter / j / k / e / r / 1-9 / q")?;
                        continue;
                    }
                },
            };

            let mut accepted = false;
            for action in actions {
                match action {
                    Action::ApplyEdit { text, caret } => {
                        code = text;
                        writeln!(out, "text: {code}")?;
                        writeln!(out, "caret: {caret}")?;
                        // 宿主回推文本；接受引发的这次 tick 会被引擎吞掉
                        settle(session, &code, quiet);
                        accepted = true;
                    }
                    Action::FocusEditor => {
                        accepted = true;
                    }
                }
            }
            if accepted {
                break;
            }
        }
    }

    session.close();
    Ok(())
}
