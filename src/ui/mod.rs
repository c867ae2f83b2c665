//! 会话 UI 模块
//!
//! 按 MVI 拆分：
//! - Model (state.rs): 输入缓冲、上次提交、反馈与历史
//! - Intent (actions.rs / input.rs): 按键事件映射为语义化 Action
//! - Update (logic.rs): dispatch 驱动状态变更
//! - View (view/): 纯函数，把状态画进四个屏幕区域

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::App;
pub use view::render;
