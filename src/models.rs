use serde::{Deserialize, Serialize};
use std::fmt;

/// 题干引用（对核心逻辑不透明，只做透传）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 判断题（构造后不可变）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: Prompt,
    answer: bool,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: bool) -> Self {
        Self {
            prompt: Prompt::new(prompt),
            answer,
        }
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn answer(&self) -> bool {
        self.answer
    }
}

/// 内置题库（无题库文件时使用）
pub fn default_bank() -> Vec<Question> {
    vec![
        Question::new("堪培拉是澳大利亚的首都。", true),
        Question::new("太平洋比大西洋大。", true),
        Question::new("苏伊士运河连接红海和印度洋。", false),
        Question::new("尼罗河的源头在埃及。", false),
        Question::new("亚马逊河是美洲最长的河流。", true),
        Question::new("贝加尔湖是世界上最古老、最深的淡水湖。", true),
    ]
}

/// 题库错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// 题库为空
    InvalidConfiguration,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::InvalidConfiguration => write!(f, "题库至少需要一道题"),
        }
    }
}

impl std::error::Error for QuizError {}

/// 答题反馈
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl From<bool> for Feedback {
    fn from(correct: bool) -> Self {
        if correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        }
    }
}

/// 答题进度：题库 + 当前位置
///
/// `current_index` 始终是 `questions` 的合法下标。
#[derive(Debug, Clone)]
pub struct QuizState {
    questions: Vec<Question>,
    current_index: usize,
}

impl QuizState {
    /// 从第一题开始
    #[allow(dead_code)]
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        Self::with_index(questions, 0)
    }

    /// 从保存的位置恢复，越界值收敛到 `[0, len-1]`
    pub fn with_index(questions: Vec<Question>, initial_index: i64) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::InvalidConfiguration);
        }

        let last = (questions.len() - 1) as i64;
        let current_index = initial_index.clamp(0, last) as usize;
        if current_index as i64 != initial_index {
            tracing::warn!(
                saved = initial_index,
                clamped = current_index,
                "saved position out of range"
            );
        }

        Ok(Self {
            questions,
            current_index,
        })
    }

    fn current(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_prompt(&self) -> &Prompt {
        self.current().prompt()
    }

    pub fn current_answer(&self) -> bool {
        self.current().answer()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// 下一题，最后一题之后回到第一题
    pub fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.questions.len();
    }

    pub fn check_answer(&self, user_answer: bool) -> bool {
        user_answer == self.current_answer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bank() -> Vec<Question> {
        vec![
            Question::new("Is the sky blue?", true),
            Question::new("Is 2+2=5?", false),
        ]
    }

    #[test]
    fn test_empty_bank_rejected() {
        assert_eq!(
            QuizState::new(Vec::new()).unwrap_err(),
            QuizError::InvalidConfiguration
        );
        assert_eq!(
            QuizState::with_index(Vec::new(), 3).unwrap_err(),
            QuizError::InvalidConfiguration
        );
    }

    #[test]
    fn test_initial_position() {
        let bank = default_bank();
        for (i, question) in bank.iter().enumerate() {
            let state = QuizState::with_index(bank.clone(), i as i64).unwrap();
            assert_eq!(state.current_index(), i);
            assert_eq!(state.current_prompt(), question.prompt());
            assert_eq!(state.current_answer(), question.answer());
        }
    }

    #[test]
    fn test_out_of_range_index_clamped() {
        let state = QuizState::with_index(sample_bank(), 99).unwrap();
        assert_eq!(state.current_index(), 1);

        let state = QuizState::with_index(sample_bank(), -4).unwrap();
        assert_eq!(state.current_index(), 0);

        let state = QuizState::with_index(sample_bank(), i64::MAX).unwrap();
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_advance_cycles() {
        let bank = default_bank();
        let len = bank.len();
        for start in 0..len {
            let mut state = QuizState::with_index(bank.clone(), start as i64).unwrap();
            for _ in 0..len {
                state.advance();
                assert!(state.current_index() < len);
            }
            assert_eq!(state.current_index(), start);
        }
    }

    #[test]
    fn test_single_question_bank() {
        let mut state = QuizState::new(vec![Question::new("Only", false)]).unwrap();
        state.advance();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.current_prompt().as_str(), "Only");
    }

    #[test]
    fn test_check_answer() {
        let bank = vec![Question::new("yes", true), Question::new("no", false)];
        let mut state = QuizState::new(bank).unwrap();

        assert!(state.check_answer(true));
        assert!(!state.check_answer(false));

        state.advance();
        assert!(!state.check_answer(true));
        assert!(state.check_answer(false));
    }

    #[test]
    fn test_walkthrough() {
        let mut state = QuizState::with_index(sample_bank(), 0).unwrap();

        assert_eq!(state.current_prompt().as_str(), "Is the sky blue?");
        assert!(state.check_answer(true));

        state.advance();
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.current_prompt().to_string(), "Is 2+2=5?");
        assert!(!state.check_answer(true));

        state.advance();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_feedback_from_check() {
        assert_eq!(Feedback::from(true), Feedback::Correct);
        assert_eq!(Feedback::from(false), Feedback::Incorrect);
    }
}
