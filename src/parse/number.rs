use crate::Integer;
use crate::err::ChainErr;
use nom::bytes::complete::take_while;
use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::error::context;
use nom::sequence::{pair, preceded, terminated};
use nom::{IResult, Parser};
use nom_language::error::{VerboseError, convert_error};

/// C `isspace`的空白：空格、`\t`、`\n`、`\v`、`\f`、`\r`。
fn c_space(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    take_while(|c: char| c.is_ascii_whitespace() || c == '\x0b').parse(input)
}

/// 前导空白 + 可选正负号 + 十进制数字，返回不含前导空白的数字文本。
fn signed_digits(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    preceded(c_space, context("integer", recognize(pair(opt(one_of("+-")), digit1)))).parse(input)
}

/// 宽松解析，行为同C的`strtol(text, _, 10)`：
///  - 忽略前导空白和数字后的任意内容；
///  - 没有数字时为0；
///  - 超出范围时取最大/最小值。
pub(crate) fn to_int(text: &str) -> Integer {
    match signed_digits(text) {
        Ok((_, digits)) => digits.parse::<Integer>().unwrap_or_else(|_| saturated(digits)),
        Err(_) => 0,
    }
}

/// 严格解析：整个文本（允许首尾空白）必须是一个整数。
pub(crate) fn to_int_strict(text: &str) -> Result<Integer, ChainErr> {
    let parsed = all_consuming(terminated(signed_digits, c_space)).parse(text);
    match parsed {
        Ok((_, digits)) => {
            digits.parse::<Integer>().map_err(|_| ChainErr::IntOverflow { value: text.to_owned() })
        }
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => {
            Err(ChainErr::ParseIntErr { value: text.to_owned(), error: convert_error(text, err).trim_end().to_owned() })
        }
        Err(nom::Err::Incomplete(_)) => {
            Err(ChainErr::ParseIntErr { value: text.to_owned(), error: "incomplete input".to_owned() })
        }
    }
}

fn saturated(digits: &str) -> Integer {
    if digits.starts_with('-') { Integer::MIN } else { Integer::MAX }
}
