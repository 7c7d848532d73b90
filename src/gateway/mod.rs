//! 聊天平台网关边界
//!
//! 平台客户端（长连接、embed 渲染、表情 UI）在外部；这里只定义
//! 事件类型、命令解析和把命令映射到服务的调度器。

pub mod command;
pub mod dispatcher;
pub mod events;

pub use command::{Command, parse_command, parse_mention};
pub use dispatcher::{Dispatcher, Reply};
pub use events::{InboundMessage, ReactionEvent};
