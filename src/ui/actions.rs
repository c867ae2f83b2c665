//! Action 枚举定义 (Intent)
//!
//! 按键事件在 input.rs 里翻译成这些语义化动作

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,        // q / ^C / ^D
    Recall,      // ↑ 回显上次提交
    Backspace,   // Backspace / Delete
    Submit,      // Enter
    Input(char), // 普通字符，是否合法由 dispatch 判定
}
