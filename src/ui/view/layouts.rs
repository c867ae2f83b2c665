//! 屏幕区域划分
//!
//! 四个区域共享一个视口：
//! [提示符][输入区]
//! [反馈区]
//! [历史区 ...]
//!
//! 区域每帧从当前视口尺寸和提示符宽度重新计算，从不原地移动已有区域

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::error::HtoiError;

/// 最小可用高度：输入行 + 反馈行 + 至少一行历史
pub const MIN_ROWS: u16 = 3;

/// 一帧内四个区域的几何位置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRegions {
    pub prompt: Rect,
    pub input: Rect,
    pub feedback: Rect,
    pub history: Rect,
}

impl ScreenRegions {
    /// 按当前视口与提示符宽度切分区域
    pub fn compute(area: Rect, prompt_width: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 提示符 + 输入
                Constraint::Length(1), // 反馈
                Constraint::Min(1),    // 历史
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(prompt_width), Constraint::Min(0)])
            .split(rows[0]);

        Self {
            prompt: top[0],
            input: top[1],
            feedback: rows[1],
            history: rows[2],
        }
    }
}

/// 启动前的视口高度检查
pub fn require_height(height: u16) -> Result<(), HtoiError> {
    if height < MIN_ROWS {
        return Err(HtoiError::WindowTooSmall {
            height,
            required: MIN_ROWS,
        });
    }
    Ok(())
}
