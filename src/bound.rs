use crate::cursor::{Cursor, Walk};
use crate::filtered::Filtered;
use crate::mapped::Mapped;

/// 绑定区间：一对来自同一序列的`(begin, end)`游标，提供构建流水线的操作。
///
/// `map`只嵌套视图，不做任何遍历；`filter`在构造时求值到第一个满足谓词的元素为止。
/// 其余元素只由`foreach`（以及`try_foreach`和迭代）驱动求值。
#[derive(Debug, Clone)]
pub struct Bound<C> {
    begin: C,
    end: C,
}

impl<C: Cursor> Bound<C> {
    pub fn new(begin: C, end: C) -> Self {
        Bound { begin, end }
    }

    pub fn begin(&self) -> C {
        self.begin.clone()
    }

    pub fn end(&self) -> C {
        self.end.clone()
    }

    /// 追加过滤阶段，起止两个视图共享同一谓词和结束游标。
    #[must_use]
    pub fn filter<P>(self, pred: P) -> Bound<Filtered<C, P>>
    where
        C::Item: Clone,
        P: Fn(&C::Item) -> bool + Clone,
    {
        let first = Filtered::new(self.begin, self.end.clone(), pred.clone());
        let last = Filtered::new(self.end.clone(), self.end, pred);
        Bound::new(first, last)
    }

    /// 追加映射阶段。
    #[must_use]
    pub fn map<F, O>(self, f: F) -> Bound<Mapped<C, F>>
    where
        F: Fn(C::Item) -> O + Clone,
    {
        let first = Mapped::new(self.begin, self.end.clone(), f.clone());
        let last = Mapped::new(self.end.clone(), self.end, f);
        Bound::new(first, last)
    }

    /// 从起始游标走到结束游标，对每个元素调用`f`。
    pub fn foreach<F>(self, mut f: F)
    where
        F: FnMut(C::Item),
    {
        let mut first = self.begin;
        while first.has_more(&self.end) {
            f(first.current());
            first.advance();
        }
    }

    /// 同[`Bound::foreach`]，但`f`可以失败：遇到第一个`Err`立即停止并返回，后续元素不再求值。
    pub fn try_foreach<F, E>(self, mut f: F) -> Result<(), E>
    where
        F: FnMut(C::Item) -> Result<(), E>,
    {
        let mut first = self.begin;
        while first.has_more(&self.end) {
            f(first.current())?;
            first.advance();
        }
        Ok(())
    }
}

impl<C: Cursor> IntoIterator for Bound<C> {
    type Item = C::Item;
    type IntoIter = Walk<C>;

    fn into_iter(self) -> Self::IntoIter {
        Walk::new(self.begin, self.end)
    }
}
