use crate::config::Config;
use crate::err::ChainErr;
use std::iter::Peekable;

/// 解析开头的全部配置参数，遇到第一个非配置参数时停止（不消耗），`--`显式结束配置。
pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Config>, ChainErr> {
    let mut configs = Vec::new();
    while let Some(arg) = args.peek() {
        if let Some(config) = parse_config(arg) {
            args.next();
            configs.push(config);
        } else if arg == "--" {
            args.next();
            break;
        } else if looks_like_flag(arg) {
            return Err(ChainErr::UnknownConfig(arg.clone()));
        } else {
            break;
        }
    }
    Ok(configs)
}

fn parse_config(arg: &str) -> Option<Config> {
    match arg {
        "-h" | "--help" => Some(Config::Help),
        "-V" | "--version" => Some(Config::Version),
        "-v" | "--verbose" => Some(Config::Verbose),
        "-d" | "--dry-run" => Some(Config::DryRun),
        "--strict" => Some(Config::Strict),
        _ => None,
    }
}

/// `-5`之类的负数是输入值，不是配置
fn looks_like_flag(arg: &str) -> bool {
    let mut chars = arg.chars();
    chars.next() == Some('-') && chars.next().is_some_and(|c| c == '-' || c.is_ascii_alphabetic())
}
