//! Action 枚举定义 (Intent)

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    Answer(bool), // 对 / 错 按钮
    Next,
}
