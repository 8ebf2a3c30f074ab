mod models;
mod storage;
mod ui;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::models::QuizState;
use crate::storage::{load_questions, restore_position, save_session};
use crate::ui::{App, render};

/// 事件轮询间隔（用于让提示消息过期）
const TICK_RATE: Duration = Duration::from_millis(200);

/// 获取数据目录路径 (~/.local/share/quizapp/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("quizapp");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 日志写入数据目录下的文件，标准输出留给终端界面
fn init_logging(data_dir: &Path) -> io::Result<()> {
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("quizapp.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> io::Result<()> {
    let data_dir = get_data_dir()?;
    init_logging(&data_dir)?;

    // 题库 (questions.toml) 与会话 (session.toml)
    let questions_path = data_dir.join("questions.toml");
    let session_path = data_dir.join("session.toml");

    let questions = load_questions(&questions_path)?;
    let saved_index = restore_position(&session_path);

    let quiz = QuizState::with_index(questions, saved_index)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let session_id = Uuid::new_v4().to_string();
    tracing::info!(
        %session_id,
        questions = quiz.len(),
        index = quiz.current_index(),
        "session started"
    );

    let mut app = App::new(quiz, session_id);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // 保存当前位置，主循环的错误优先返回
    let saved = save_session(&app.quiz, &app.session_id, &session_path);
    match &saved {
        Ok(()) => {
            tracing::info!(
                session_id = %app.session_id,
                index = app.quiz.current_index(),
                "session saved"
            );
            println!("进度已保存到 {}", session_path.display());
        }
        Err(e) => tracing::error!(error = %e, "failed to save session"),
    }

    result.and(saved)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }

        app.tick(Instant::now());
    }
    Ok(())
}
