use crate::config::{Config, is_strict};
use crate::err::ChainErr;
use itertools::Itertools;

#[macro_use]
mod print;

mod config;
mod err;
mod parse;
mod pipe;

/// 整数类型
pub(crate) type Integer = i64;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), ChainErr> {
    let (configs, values) = parse::args::parse(std::env::args().skip(1).peekable())?;
    if configs.contains(&Config::Help) {
        print_help();
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if configs.contains(&Config::Verbose) {
        println_info!("Configs:");
        println!("    {}", configs.iter().map(Config::flag).join(" "));
        println_info!("Input:");
        println!("    {}", values.iter().join(" "));
        println_info!("Pipeline:");
        println!("{}", pipe::STAGES.iter().map(|stage| format!("    {stage}")).join("\n"));
    }
    if configs.contains(&Config::DryRun) {
        println_notice!("Dry run, pipeline not executed.");
        return Ok(());
    }
    let emit = |n: Integer| print!("{n} ");
    if is_strict(&configs) {
        // 出错前已经输出的值保留，先换行再报告错误
        let res = pipe::run_strict(&values, emit);
        println!();
        res
    } else {
        pipe::run(&values, emit);
        println!();
        Ok(())
    }
}

fn print_help() {
    println_info!("Usage: {} [configs] [--] [value ...]", env!("CARGO_PKG_NAME"));
    println!("Parse each value as an integer, square it, keep the odd results and print them.");
    println!("Values default to: {}", parse::args::DEFAULT_VALUES.iter().join(" "));
    println_info!("Configs:");
    for (_, help) in Config::all_help() {
        println!("{}", help.lines().map(|line| format!("    {line}")).join("\n"));
    }
}
