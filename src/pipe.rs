use crate::Integer;
use crate::err::ChainErr;
use crate::parse::number::{to_int, to_int_strict};
use fpchain::chain;

/// 流水线各阶段的描述，用于`-v`输出
pub(crate) const STAGES: [&str; 4] = ["map     to_int", "map     square", "filter  odd", "foreach print"];

pub(crate) fn square(n: Integer) -> Integer {
    n.wrapping_mul(n)
}

pub(crate) fn odd(n: Integer) -> bool {
    n % 2 == 1
}

/// 宽松模式：无法解析的值按`strtol`规则取值。
pub(crate) fn run(values: &[String], out: impl FnMut(Integer)) {
    chain(values).map(|s| to_int(s)).map(square).filter(|n| odd(*n)).foreach(out);
}

/// 严格模式：遇到第一个无法解析的值即停止，错误返回给调用方，后续的值不再求值。
pub(crate) fn run_strict(values: &[String], mut out: impl FnMut(Integer)) -> Result<(), ChainErr> {
    chain(values)
        .map(|s| to_int_strict(s))
        .map(|res| res.map(square))
        // 错误必须穿过过滤阶段才能到达终端
        .filter(|res| match res {
            Ok(n) => odd(*n),
            Err(_) => true,
        })
        .try_foreach(|res| {
            out(res?);
            Ok::<_, ChainErr>(())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn test_run_default_scenario() {
        let values = strings(&["1", "2", "3", "4", "5", "6", "7"]);
        let mut seen = vec![];
        run(&values, |n| seen.push(n));
        assert_eq!(seen, vec![1, 9, 25, 49]);
    }

    #[test]
    fn test_run_lenient_junk() {
        let values = strings(&["3x", "abc", "-5", " 7"]);
        let mut seen = vec![];
        run(&values, |n| seen.push(n));
        assert_eq!(seen, vec![9, 25, 49]);
    }

    #[test]
    fn test_run_empty() {
        let mut seen = vec![];
        run(&[], |n| seen.push(n));
        assert!(seen.is_empty());
        assert_eq!(run_strict(&[], |n| seen.push(n)), Ok(()));
        assert!(seen.is_empty());
    }

    #[test]
    fn test_run_strict_stops_at_error() {
        let values = strings(&["1", "3", "oops", "5"]);
        let mut seen = vec![];
        let res = run_strict(&values, |n| seen.push(n));
        assert!(matches!(res, Err(ChainErr::ParseIntErr { value, .. }) if value == "oops"));
        assert_eq!(seen, vec![1, 9]);
    }

    #[test]
    fn test_run_strict_error_after_even_values() {
        let values = strings(&["2", "4", "bad"]);
        let mut seen = vec![];
        let res = run_strict(&values, |n| seen.push(n));
        assert!(matches!(res, Err(ChainErr::ParseIntErr { value, .. }) if value == "bad"));
        assert!(seen.is_empty());
    }

    #[test]
    fn test_run_strict_ok() {
        let values = strings(&["2", "3"]);
        let mut seen = vec![];
        assert_eq!(run_strict(&values, |n| seen.push(n)), Ok(()));
        assert_eq!(seen, vec![9]);
    }

    #[test]
    fn test_square_and_odd() {
        assert_eq!(square(-4), 16);
        assert_eq!(square(Integer::MAX), 1);
        assert!(odd(9));
        assert!(!odd(16));
        assert!(!odd(-3));
    }
}
