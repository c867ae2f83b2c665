//! itoh：十进制转十六进制的配套工具
//!
//! 带参数时做一次性转换；无参数时进入简单的逐行交互循环，
//! 空行或 EOF 退出。不使用全屏界面。

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use htoi::convert::dec_to_hex;

#[derive(Parser, Debug)]
#[clap(name = "itoh", version, about = "十进制转十六进制，无参数时进入逐行交互模式")]
struct Cli {
    /// 直接转换这个十进制值并退出
    value: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(value) = &cli.value {
        return match dec_to_hex(value) {
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

    match run_line_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// 逐行读取十进制值并打印十六进制结果，空行或 EOF 退出
fn run_line_loop() -> io::Result<()> {
    println!("输入十进制值，回车转换，空行或 ^C 退出:");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            break;
        }

        // 无效行只报告，不中断循环
        match dec_to_hex(input) {
            Ok(result) => println!("{result}"),
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
