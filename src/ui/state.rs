//! App 状态定义 (Model)

use std::time::{Duration, Instant};

use crate::models::{Feedback, QuizState};

/// 提示消息显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// 应用状态
pub struct App {
    pub quiz: QuizState,
    pub session_id: String,
    pub toast: Option<Toast>,
}

/// 短暂显示的答题反馈
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub feedback: Feedback,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(feedback: Feedback, shown_at: Instant) -> Self {
        Self { feedback, shown_at }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }

    pub fn message(&self) -> &'static str {
        match self.feedback {
            Feedback::Correct => "回答正确！",
            Feedback::Incorrect => "回答错误！",
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(quiz: QuizState, session_id: String) -> Self {
        Self {
            quiz,
            session_id,
            toast: None,
        }
    }

    /// 当前题号（从 1 开始）
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.quiz.current_index() + 1, self.quiz.len())
    }
}
