use cmd_help::CmdHelp;

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Config {
    /// -h          打印帮助信息。
    Help,
    /// -V          打印版本信息。
    Version,
    /// -v          执行前打印输入数据和流水线各阶段。
    Verbose,
    /// -d          仅解析，不执行。
    DryRun,
    /// --strict    无法解析为整数的输入视为错误并终止，未指定时按0处理。
    Strict,
}

impl Config {
    pub(crate) fn flag(&self) -> &'static str {
        match self {
            Config::Help => "-h",
            Config::Version => "-V",
            Config::Verbose => "-v",
            Config::DryRun => "-d",
            Config::Strict => "--strict",
        }
    }
}

#[inline]
pub(crate) fn is_strict(configs: &[Config]) -> bool {
    configs.contains(&Config::Strict)
}
