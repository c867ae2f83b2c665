//! 通用 UI 组件
//!
//! 各区域共用的文本样式

use ratatui::style::{Color, Modifier, Style};

/// [样式] 反白展示，用于反馈区的转换结果
pub fn standout() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// [样式] 告警展示，用于被拒绝按键的提示
pub fn alert() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

/// [样式] 调试模式下给区域涂底色，便于观察各区域的实际边界
pub fn region_background(debug: bool, color: Color) -> Style {
    if debug {
        Style::default().bg(color)
    } else {
        Style::default()
    }
}
