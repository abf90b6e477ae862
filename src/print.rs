use std::fmt;
use std::io::{self, Write};

pub(crate) const RED: &str = "\x1b[1;31m";
pub(crate) const BLUE: &str = "\x1b[1;34m";
pub(crate) const MAGENTA: &str = "\x1b[35m";
const RESET: &str = "\x1b[0m";

/// 输出一行，指定颜色时用ANSI转义包围内容。
pub(crate) fn write_line(out: &mut impl Write, color: Option<&str>, args: fmt::Arguments<'_>) -> io::Result<()> {
    match color {
        Some(color) => writeln!(out, "{color}{args}{RESET}"),
        None => writeln!(out, "{args}"),
    }
}

/// 标准错误，终端下为红色。
#[macro_export]
macro_rules! println_err {
    () => {};
    ($($arg:tt)*) => {{
        let mut out = std::io::stderr();
        let color = std::io::IsTerminal::is_terminal(&out).then_some($crate::print::RED);
        let _ = $crate::print::write_line(&mut out, color, format_args!($($arg)*));
    }};
}

/// 标准输出，终端下为蓝色。
#[macro_export]
macro_rules! println_info {
    () => {};
    ($($arg:tt)*) => {{
        let mut out = std::io::stdout();
        let color = std::io::IsTerminal::is_terminal(&out).then_some($crate::print::BLUE);
        let _ = $crate::print::write_line(&mut out, color, format_args!($($arg)*));
    }};
}

/// 标准输出，终端下为紫色。
#[macro_export]
macro_rules! println_notice {
    () => {};
    ($($arg:tt)*) => {{
        let mut out = std::io::stdout();
        let color = std::io::IsTerminal::is_terminal(&out).then_some($crate::print::MAGENTA);
        let _ = $crate::print::write_line(&mut out, color, format_args!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_plain() {
        let mut out = Vec::new();
        write_line(&mut out, None, format_args!("{} {}", 1, "a")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 a\n");
    }

    #[test]
    fn test_write_line_colored() {
        let mut out = Vec::new();
        write_line(&mut out, Some(RED), format_args!("oops")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[1;31moops\x1b[0m\n");
    }
}
