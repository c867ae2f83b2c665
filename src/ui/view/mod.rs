//! 视图层模块
//!
//! 纯函数渲染：每帧重新计算区域划分，再逐区域绘制，
//! 最后把光标放回输入文本末尾

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{List, ListItem, Paragraph},
};

use super::state::{App, Feedback};
use components::{alert, region_background, standout};
use layouts::ScreenRegions;

/// 历史为空时显示的引导文本
const WELCOME: &str = "输入十六进制值，Enter 转换，↑ 回显上次输入，q 退出";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let prompt_width = app.prompt.chars().count() as u16;
    let regions = ScreenRegions::compute(frame.area(), prompt_width);

    render_prompt(frame, app, regions.prompt);
    render_input(frame, app, regions.input);
    render_feedback(frame, app, regions.feedback);
    render_history(frame, app, regions.history);

    // 光标停在输入文本末尾，等待下一个按键
    let end = regions
        .input
        .x
        .saturating_add(app.input_buffer.chars().count() as u16);
    let max_x = regions
        .input
        .right()
        .saturating_sub(1)
        .max(regions.input.x);
    frame.set_cursor_position((end.min(max_x), regions.input.y));
}

fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let prompt = Paragraph::new(app.prompt.as_str()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(prompt, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(region_background(app.debug, Color::Green));
    frame.render_widget(input, area);
}

fn render_feedback(frame: &mut Frame, app: &App, area: Rect) {
    let base = region_background(app.debug, Color::Red);
    let widget = match &app.feedback {
        Feedback::Empty => Paragraph::new("").style(base),
        Feedback::Value(value) => Paragraph::new(value.as_str()).style(base.patch(standout())),
        Feedback::Error(message) => Paragraph::new(message.as_str()).style(base.patch(alert())),
    };
    frame.render_widget(widget, area);
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let base = region_background(app.debug, Color::Blue);

    if app.history.is_empty() {
        let welcome =
            Paragraph::new(WELCOME).style(base.patch(Style::default().fg(Color::Gray)));
        frame.render_widget(welcome, area);
        return;
    }

    // 最新记录排最上面，超出区域高度的部分直接不画
    let items: Vec<ListItem> = app
        .history
        .iter()
        .take(area.height as usize)
        .map(|record| ListItem::new(Line::from(record.as_str())))
        .collect();

    frame.render_widget(List::new(items).style(base), area);
}
