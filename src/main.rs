use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use htoi::config::{self, Config};
use htoi::convert::hex_to_dec;
use htoi::error::HtoiError;
use htoi::ui::{self, App, render, view::layouts};

#[derive(Parser, Debug)]
#[clap(name = "htoi", version, about = "十六进制转十进制，无参数时进入交互模式")]
struct Cli {
    /// 直接转换这个十六进制值并退出（跳过交互模式）
    value: Option<String>,

    /// 交互模式下启用调试日志与区域底色
    #[clap(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 带位置参数时走一次性转换，完全不碰终端状态
    if let Some(value) = &cli.value {
        return match hex_to_dec(value) {
            Ok(result) => {
                println!("{result}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    match run_interactive(cli.debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("无法启动交互会话: {err}");
            ExitCode::FAILURE
        }
    }
}

/// 初始化终端，进入事件循环，退出前恢复终端模式
fn run_interactive(debug: bool) -> Result<(), HtoiError> {
    let config = config::load_config(&config::config_path()?)?;
    if debug {
        init_debug_log(&config)?;
    }

    // 进入备用屏幕之前先确认视口装得下最小布局
    let (_, height) = crossterm::terminal::size()?;
    layouts::require_height(height)?;

    let mut app = App::new(&config, debug);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    log::debug!("### 会话初始化完成 ###");
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map_err(HtoiError::from)
}

/// 把 debug 级别日志追加写入配置指定的文件，避免污染 TUI 画面
fn init_debug_log(config: &Config) -> Result<(), HtoiError> {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .format(|buf, record| {
            let time_marker = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
            writeln!(buf, "[{time_marker}] {} {}", record.level(), record.args())
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

/// 主事件循环：绘制一帧，阻塞等待下一个事件，直到收到退出信号
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        // 绘制失败只丢这一帧，不终止会话
        if let Err(err) = terminal.draw(|f| render(f, app)) {
            log::warn!("本帧绘制失败，已跳过: {err}");
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if ui::handle_key_event(app, key) {
                    log::debug!("收到退出按键，结束会话");
                    break;
                }
            }
            Ok(Event::Resize(width, height)) => app.viewport_resized(width, height),
            Ok(_) => {}
            Err(err) => {
                // 输入流关闭视同 EOF，正常收尾
                log::debug!("输入流已关闭: {err}");
                break;
            }
        }
    }

    Ok(())
}
