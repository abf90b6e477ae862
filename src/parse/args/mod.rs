use crate::config::Config;
use crate::err::ChainErr;
use std::iter::Peekable;

mod config;

pub(crate) use config::parse_configs;

/// 未指定输入值时的默认输入
pub(crate) const DEFAULT_VALUES: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

/// 解析命令行：配置在前，其后全部作为输入值。
pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Vec<Config>, Vec<String>), ChainErr> {
    let configs = parse_configs(&mut args)?;
    let values = args.collect::<Vec<_>>();
    let values = if values.is_empty() { DEFAULT_VALUES.iter().map(|v| (*v).to_owned()).collect() } else { values };
    Ok((configs, values))
}

#[cfg(test)]
pub(crate) fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').filter(|s| !s.is_empty()).map(String::from).peekable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_values() {
        let (configs, values) = parse(build_args("-v")).unwrap();
        assert_eq!(configs, vec![Config::Verbose]);
        assert_eq!(values, DEFAULT_VALUES);
    }

    #[test]
    fn test_parse_values() {
        let (configs, values) = parse(build_args("10 -3 x")).unwrap();
        assert!(configs.is_empty());
        assert_eq!(values, vec!["10", "-3", "x"]);
    }

    #[test]
    fn test_parse_empty() {
        let (configs, values) = parse(build_args("")).unwrap();
        assert!(configs.is_empty());
        assert_eq!(values.len(), 7);
    }
}
