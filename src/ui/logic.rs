//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各个按键分支的处理方法

use crate::convert::{hex_to_dec, is_hex_digit};

use super::actions::Action;
use super::state::{App, Feedback};
use super::view::layouts::MIN_ROWS;

impl App {
    /// 核心逻辑分发，返回 true 表示退出会话
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Recall => self.recall_last_input(),
            Action::Backspace => self.delete_last_char(),
            Action::Submit => self.submit(),
            Action::Input(c) => self.insert_char(c),
        }
        false
    }

    // ============ 录入相关 ============

    /// 录入一个字符：非十六进制字符被拒绝，不进入缓冲区
    pub fn insert_char(&mut self, c: char) {
        if !is_hex_digit(c) {
            let message = format!("不是有效的十六进制字符 ord: {} chr: {}", c as u32, c);
            log::debug!("拒绝按键: {message}");
            self.feedback = Feedback::Error(message);
            return;
        }

        // 对追加之后的内容先试转换，缓冲区任何时刻都保持可转换
        let mut candidate = self.input_buffer.clone();
        candidate.push(c);
        match hex_to_dec(&candidate) {
            Ok(value) => {
                self.input_buffer = candidate;
                self.feedback = Feedback::Value(value.to_string());
            }
            Err(_) => {
                log::debug!("拒绝按键 {c}: 数值超出可表示范围");
                self.feedback = Feedback::Error(format!("数值超出可表示范围，已忽略字符 {c}"));
            }
        }
    }

    /// 删除最后一个字符，空缓冲区时不做任何事
    pub fn delete_last_char(&mut self) {
        if self.input_buffer.is_empty() {
            log::debug!("缓冲区已空，无字符可删");
            return;
        }

        self.input_buffer.pop();
        // 删空则清掉反馈，否则展示剩余内容的转换值
        self.feedback = match hex_to_dec(&self.input_buffer) {
            Ok(value) => Feedback::Value(value.to_string()),
            Err(_) => Feedback::Empty,
        };
    }

    // ============ 回显相关 ============

    /// ↑：丢弃当前录入，回显上次提交的内容，光标停在文本末尾
    pub fn recall_last_input(&mut self) {
        if self.last_input.is_empty() {
            // 没有可回显的内容，只清掉残留的反馈
            self.feedback = Feedback::Empty;
            return;
        }

        log::debug!(
            "用上次输入 {} 替换当前输入 {}",
            self.last_input,
            self.input_buffer
        );
        self.input_buffer = self.last_input.clone();
        self.feedback = match hex_to_dec(&self.input_buffer) {
            Ok(value) => Feedback::Value(value.to_string()),
            Err(_) => Feedback::Empty,
        };
    }

    // ============ 提交相关 ============

    /// Enter：有错误时这一次按键只负责消除错误；空输入忽略；
    /// 否则转换、记入历史、保存为上次提交并清空缓冲区
    pub fn submit(&mut self) {
        if self.has_error() {
            log::debug!("消除反馈区错误提示");
            self.feedback = Feedback::Empty;
            return;
        }

        let trimmed = self.input_buffer.trim().to_string();
        if trimmed.is_empty() {
            // 空闲回车直接忽略
            return;
        }

        match hex_to_dec(&trimmed) {
            Ok(value) => {
                self.push_history(format!("{trimmed} => {value}"));
                self.last_input = trimmed;
                self.input_buffer.clear();
                self.feedback = Feedback::Empty;
            }
            Err(err) => {
                // 录入校验保证缓冲区可转换，这个分支不应到达
                self.feedback = Feedback::Error(err.to_string());
            }
        }
    }

    /// 历史记录头插（最新在前），超出上限时丢弃最旧的记录
    fn push_history(&mut self, record: String) {
        log::debug!("记录历史: {record}");
        self.history.push_front(record);
        if let Some(limit) = self.history_limit {
            self.history.truncate(limit);
        }
    }

    // ============ 视口相关 ============

    /// 终端尺寸变更通知，布局在下一帧按新尺寸重算
    pub fn viewport_resized(&mut self, width: u16, height: u16) {
        log::debug!("视口尺寸变更: {width}x{height}");
        if height < MIN_ROWS {
            // TODO: 会话中途缩小到最小高度以下时应暂停渲染并提示，而不是按可用空间裁剪
            log::warn!("视口高度 {height} 低于最小高度 {MIN_ROWS}，渲染按可用空间裁剪");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn new_app() -> App {
        App::new(&Config::default(), false)
    }

    #[test]
    fn test_beef_keystroke_sequence() {
        let mut app = new_app();

        let expected = ["11", "190", "3054", "48879"];
        for (c, want) in "BEEF".chars().zip(expected) {
            assert!(!app.dispatch(Action::Input(c)));
            assert_eq!(app.feedback, Feedback::Value(want.to_string()));
        }

        assert!(!app.dispatch(Action::Submit));
        assert_eq!(app.history.front().unwrap(), "BEEF => 48879");
        assert_eq!(app.input_buffer, "");
        assert_eq!(app.last_input, "BEEF");
        assert_eq!(app.feedback, Feedback::Empty);
    }

    #[test]
    fn test_invalid_key_then_valid_key() {
        let mut app = new_app();

        app.dispatch(Action::Input('G'));
        match &app.feedback {
            Feedback::Error(message) => {
                assert!(message.contains('G'));
                assert!(message.contains("71")); // G 的码点
            }
            other => panic!("期望错误反馈，得到 {other:?}"),
        }
        assert_eq!(app.input_buffer, "");

        // 下一个合法按键消除错误并展示转换值
        app.dispatch(Action::Input('A'));
        assert_eq!(app.feedback, Feedback::Value("10".to_string()));
        assert_eq!(app.input_buffer, "A");
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_noop() {
        let mut app = new_app();
        app.feedback = Feedback::Value("10".to_string());

        app.dispatch(Action::Backspace);
        assert_eq!(app.input_buffer, "");
        assert_eq!(app.feedback, Feedback::Value("10".to_string()));
    }

    #[test]
    fn test_backspace_recomputes_feedback() {
        let mut app = new_app();
        app.dispatch(Action::Input('B'));
        app.dispatch(Action::Input('E'));
        assert_eq!(app.feedback, Feedback::Value("190".to_string()));

        app.dispatch(Action::Backspace);
        assert_eq!(app.input_buffer, "B");
        assert_eq!(app.feedback, Feedback::Value("11".to_string()));

        app.dispatch(Action::Backspace);
        assert_eq!(app.input_buffer, "");
        assert_eq!(app.feedback, Feedback::Empty);
    }

    #[test]
    fn test_submit_dismisses_error_without_submitting() {
        let mut app = new_app();
        app.dispatch(Action::Input('A'));
        app.dispatch(Action::Input('!'));
        assert!(app.has_error());

        // 这一次 Enter 只消除错误，缓冲区与历史都不动
        app.dispatch(Action::Submit);
        assert_eq!(app.feedback, Feedback::Empty);
        assert_eq!(app.input_buffer, "A");
        assert!(app.history.is_empty());

        // 再按一次才是真正的提交
        app.dispatch(Action::Submit);
        assert_eq!(app.history.front().unwrap(), "A => 10");
        assert_eq!(app.input_buffer, "");
    }

    #[test]
    fn test_idle_enter_is_noop() {
        let mut app = new_app();
        app.dispatch(Action::Submit);

        assert!(app.history.is_empty());
        assert_eq!(app.last_input, "");
        assert_eq!(app.feedback, Feedback::Empty);
    }

    #[test]
    fn test_recall_reproduces_submitted_text() {
        let mut app = new_app();
        for c in "BEEF".chars() {
            app.dispatch(Action::Input(c));
        }
        app.dispatch(Action::Submit);

        // 开始敲新内容后回显，缓冲区被整体替换
        app.dispatch(Action::Input('1'));
        app.dispatch(Action::Recall);
        assert_eq!(app.input_buffer, "BEEF");
        assert_eq!(app.feedback, Feedback::Value("48879".to_string()));
    }

    #[test]
    fn test_recall_without_prior_submission_clears_feedback() {
        let mut app = new_app();
        app.dispatch(Action::Input('A'));
        assert_eq!(app.feedback, Feedback::Value("10".to_string()));

        app.dispatch(Action::Recall);
        assert_eq!(app.feedback, Feedback::Empty);
        assert_eq!(app.input_buffer, "A"); // 缓冲区不受影响
    }

    #[test]
    fn test_overflow_keystroke_is_rejected() {
        let mut app = new_app();
        for _ in 0..32 {
            app.dispatch(Action::Input('f'));
        }
        assert_eq!(app.input_buffer.len(), 32);
        assert_eq!(app.feedback, Feedback::Value(u128::MAX.to_string()));

        // 第 33 个数字会溢出，按键被拒绝且缓冲区不变
        app.dispatch(Action::Input('0'));
        assert_eq!(app.input_buffer.len(), 32);
        assert!(app.has_error());
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut config = Config::default();
        config.history_limit = Some(2);
        let mut app = App::new(&config, false);

        for c in ['1', '2', '3'] {
            app.dispatch(Action::Input(c));
            app.dispatch(Action::Submit);
        }

        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history[0], "3 => 3");
        assert_eq!(app.history[1], "2 => 2");
    }

    #[test]
    fn test_quit_action_terminates() {
        let mut app = new_app();
        assert!(app.dispatch(Action::Quit));
    }
}
