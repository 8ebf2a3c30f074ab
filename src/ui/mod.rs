//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体及其会话数据
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs): 按键转化为语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::handle_key_event;
pub use state::App;
pub use view::render;
