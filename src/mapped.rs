use crate::cursor::Cursor;
use std::fmt;

/// 映射视图：读取时才对底层元素应用变换。
///
/// 结束判断只看自身持有的底层游标是否到达底层结束位置，与比较对象无关：
/// 结束视图本身就是以`current == end`构造的哨兵。
#[derive(Clone)]
pub struct Mapped<C, F> {
    current: C,
    end: C,
    f: F,
}

impl<C, F> Mapped<C, F> {
    pub fn new(begin: C, end: C, f: F) -> Self {
        Mapped { current: begin, end, f }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Mapped<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapped").field("current", &self.current).field("end", &self.end).finish_non_exhaustive()
    }
}

impl<C, F, O> Cursor for Mapped<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> O + Clone,
{
    type Item = O;

    fn advance(&mut self) {
        self.current.advance();
    }

    fn current(&self) -> O {
        (self.f)(self.current.current())
    }

    fn has_more(&self, _end: &Self) -> bool {
        self.current.has_more(&self.end)
    }
}
