//! App 状态定义 (Model)
//!
//! 会话的全部可变状态集中在 App 里，由单线程事件循环独占修改

use std::collections::VecDeque;

use crate::config::Config;

/// 反馈区当前展示的内容
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// 无内容（初始状态、提交之后、错误被消除之后）
    Empty,
    /// 当前缓冲区对应的十进制值，随每次按键更新
    Value(String),
    /// 最近一次被拒绝按键的提示，待消除
    Error(String),
}

/// 应用状态
pub struct App {
    pub prompt: String,
    pub input_buffer: String,
    pub last_input: String,
    pub feedback: Feedback,
    pub history: VecDeque<String>, // 最新记录在队首
    pub history_limit: Option<usize>,
    pub debug: bool,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config, debug: bool) -> Self {
        Self {
            prompt: config.prompt.clone(),
            input_buffer: String::new(),
            last_input: String::new(),
            feedback: Feedback::Empty,
            history: VecDeque::new(),
            history_limit: config.history_limit,
            debug,
        }
    }

    /// 是否有待消除的输入错误
    pub fn has_error(&self) -> bool {
        matches!(self.feedback, Feedback::Error(_))
    }
}
