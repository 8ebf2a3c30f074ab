//! 业务逻辑处理 (Update/Dispatch)

use std::time::Instant;

use super::actions::Action;
use super::state::{App, Toast};
use crate::models::Feedback;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        tracing::debug!(?action, index = self.quiz.current_index(), "dispatch");
        match action {
            Action::Quit => return true,
            Action::Answer(user_answer) => self.answer(user_answer, Instant::now()),
            Action::Next => self.next_question(),
        }
        false
    }

    /// 判题并弹出反馈
    pub fn answer(&mut self, user_answer: bool, now: Instant) {
        let feedback = Feedback::from(self.quiz.check_answer(user_answer));
        self.toast = Some(Toast::new(feedback, now));
    }

    /// 切换到下一题
    pub fn next_question(&mut self) {
        self.quiz.advance();
        self.toast = None;
    }

    /// 清除过期的提示
    pub fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }
}
