//! 错误类型定义
//!
//! 两类领域错误就够用了：无效输入在会话内就地恢复（反馈区提示），
//! 窗口过小则直接让启动失败。终端本身的 I/O 故障透传为 `Terminal`。

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HtoiError {
    /// 输入无法转换（按键校验或一次性转换参数）
    #[error("{0}")]
    InvalidInput(String),

    /// 视口高度不足以容纳最小布局，会话拒绝启动
    #[error("窗口高度 {height} 低于所需的最小高度 {required}")]
    WindowTooSmall { height: u16, required: u16 },

    /// 终端初始化 / 恢复阶段的 I/O 故障
    #[error(transparent)]
    Terminal(#[from] io::Error),
}
