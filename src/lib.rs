//! htoi：十六进制与十进制互转的终端工具
//!
//! 库部分提供纯转换函数、配置加载与交互式会话的全部状态逻辑；
//! 二进制入口见 src/main.rs (htoi) 与 src/bin/itoh.rs (itoh)。

pub mod config;
pub mod convert;
pub mod error;
pub mod ui;
