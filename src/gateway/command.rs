//! 命令解析
//!
//! 以前缀开头的消息解析为命令；其余消息走计分路径。

use once_cell::sync::Lazy;
use regex::Regex;

/// 解析出的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 帮助
    Help,
    /// 发帖（附件随事件携带）
    Post { content: String },
    /// 设置简介
    SetProfile { bio: String },
    /// 查看资料（缺省为本人）
    Profile { target: Option<String> },
    /// 关注用户
    Follow { target: Option<String> },
    /// 话题检索
    Search { tag: Option<String> },
    /// 关注流
    Feed,
    /// 用户流
    UserFeed { target: Option<String> },
    /// 用户的第 N 条帖子
    UserPost {
        target: Option<String>,
        index: Option<usize>,
    },
    /// 查看气场（缺省为本人）
    Aura { target: Option<String> },
    /// 未知命令
    Unknown { name: String },
}

/// 用户提及模式：<@123> 或 <@!123>
static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<@!?(\d+)>$").expect("mention regex"));

/// 从提及语法中解析用户 ID
pub fn parse_mention(arg: &str) -> Option<String> {
    MENTION_RE
        .captures(arg)
        .map(|caps| caps[1].to_string())
}

/// 解析消息内容
///
/// 不以前缀开头时返回 None（消息走计分路径）。
pub fn parse_command(prefix: &str, content: &str) -> Option<Command> {
    let rest = content.strip_prefix(prefix)?;
    let mut parts = rest.trim().split_whitespace();
    let name = parts.next()?.to_lowercase();
    let args: Vec<&str> = parts.collect();

    let command = match name.as_str() {
        "help" => Command::Help,
        "post" => Command::Post {
            content: args.join(" "),
        },
        "setprofile" => Command::SetProfile {
            bio: args.join(" "),
        },
        "profile" => Command::Profile {
            target: args.first().and_then(|a| parse_mention(a)),
        },
        "follow" => Command::Follow {
            target: args.first().and_then(|a| parse_mention(a)),
        },
        "search" => Command::Search {
            tag: args.first().map(|a| a.trim_start_matches('#').to_string()),
        },
        "feed" => Command::Feed,
        "userfeed" => Command::UserFeed {
            target: args.first().and_then(|a| parse_mention(a)),
        },
        "userpost" => Command::UserPost {
            target: args.first().and_then(|a| parse_mention(a)),
            index: args.get(1).and_then(|a| a.parse().ok()),
        },
        "aura" => Command::Aura {
            target: args.first().and_then(|a| parse_mention(a)),
        },
        other => Command::Unknown {
            name: other.to_string(),
        },
    };

    Some(command)
}
