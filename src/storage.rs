use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::{Question, QuizState, default_bank};

/// 题库文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBankData {
    pub questions: Vec<Question>,
}

/// 会话文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// 有符号存储，损坏的负值也能读出再收敛
    pub current_index: i64,
    #[serde(default)]
    pub meta: Option<SessionMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub version: String,
    pub session_id: String,
    pub saved_at: DateTime<Local>,
}

/// 从TOML文件加载题库，文件不存在时使用内置题库
pub fn load_questions(path: &Path) -> io::Result<Vec<Question>> {
    if !path.exists() {
        return Ok(default_bank());
    }

    let content = fs::read_to_string(path)?;
    let data: QuestionBankData =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(data.questions)
}

/// 加载上次保存的会话
pub fn load_session(path: &Path) -> io::Result<Option<SessionData>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let data: SessionData =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(Some(data))
}

/// 读取上次的位置，任何读取失败都视为从第一题开始
pub fn restore_position(path: &Path) -> i64 {
    match load_session(path) {
        Ok(Some(session)) => session.current_index,
        Ok(None) => 0,
        Err(e) => {
            let salvaged = fs::read_to_string(path)
                .ok()
                .and_then(|content| salvage_index(&content));
            tracing::warn!(error = %e, ?salvaged, "unreadable session file");
            salvaged.unwrap_or(0)
        }
    }
}

/// 超出 i64 的整数按符号饱和，交给 `QuizState` 收敛
fn salvage_index(content: &str) -> Option<i64> {
    content.lines().find_map(|line| {
        let (key, value) = line.split_once('=')?;
        if key.trim() != "current_index" {
            return None;
        }
        let value = value.trim().replace('_', "");
        let (negative, digits) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value.strip_prefix('+').unwrap_or(&value)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(value.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
    })
}

/// 保存当前位置
pub fn save_session(state: &QuizState, session_id: &str, path: &Path) -> io::Result<()> {
    let data = SessionData {
        current_index: state.current_index() as i64,
        meta: Some(SessionMeta {
            version: "1.0".to_string(),
            session_id: session_id.to_string(),
            saved_at: Local::now(),
        }),
    };
    let content =
        toml::to_string_pretty(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, content)?;
    Ok(())
}
