use crate::cursor::Cursor;
use std::fmt;

/// 过滤视图：只暴露满足谓词的元素。
///
/// 跳过不满足谓词的元素只发生在构造和[`Cursor::advance`]中，读取是幂等的：
/// 构造后及每次前进后，视图要么位于结束位置，要么缓存了当前位置上满足谓词的元素。
/// 每个底层元素只读取一次、只测试一次。
pub struct Filtered<C: Cursor, P> {
    current: C,
    begin: C,
    end: C,
    pred: P,
    head: Option<C::Item>,
}

impl<C, P> Filtered<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    pub fn new(begin: C, end: C, pred: P) -> Self {
        let mut view = Filtered { current: begin.clone(), begin, end, pred, head: None };
        view.seek();
        view
    }

    /// 构造时传入的起始游标，仅保留，不参与遍历。
    pub fn origin(&self) -> &C {
        &self.begin
    }

    /// 从当前位置起找到第一个满足谓词的元素，或者停在结束位置。
    fn seek(&mut self) {
        self.head = None;
        while self.current.has_more(&self.end) {
            let item = self.current.current();
            if (self.pred)(&item) {
                self.head = Some(item);
                return;
            }
            self.current.advance();
        }
    }
}

impl<C, P> Clone for Filtered<C, P>
where
    C: Cursor,
    C::Item: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Filtered {
            current: self.current.clone(),
            begin: self.begin.clone(),
            end: self.end.clone(),
            pred: self.pred.clone(),
            head: self.head.clone(),
        }
    }
}

impl<C, P> fmt::Debug for Filtered<C, P>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("current", &self.current)
            .field("end", &self.end)
            .field("head", &self.head)
            .finish_non_exhaustive()
    }
}

impl<C, P> Cursor for Filtered<C, P>
where
    C: Cursor,
    C::Item: Clone,
    P: Fn(&C::Item) -> bool + Clone,
{
    type Item = C::Item;

    fn advance(&mut self) {
        // 结束位置上前进是空操作
        if self.current.has_more(&self.end) {
            self.current.advance();
            self.seek();
        }
    }

    fn current(&self) -> C::Item {
        // `head`为空说明已在结束位置，交给底层游标处理越界读取
        self.head.clone().unwrap_or_else(|| self.current.current())
    }

    fn has_more(&self, _end: &Self) -> bool {
        self.current.has_more(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Sequence, SliceCursor};
    use std::cell::Cell;

    fn drain<C: Cursor>(mut view: C, end: &C) -> Vec<C::Item> {
        let mut items = vec![];
        while view.has_more(end) {
            items.push(view.current());
            view.advance();
        }
        items
    }

    #[test]
    fn test_filtered_skips_non_matching() {
        let data = [1, 2, 3, 4, 5, 6];
        let (begin, end) = (&data).cursors();
        let even = |x: &&i32| **x % 2 == 0;
        let view = Filtered::new(begin, end, even);
        let sentinel = Filtered::new(end, end, even);
        assert_eq!(drain(view, &sentinel), vec![&2, &4, &6]);
    }

    #[test]
    fn test_filtered_pre_skips_on_construction() {
        let data = [1, 3, 4];
        let (begin, end) = (&data).cursors();
        let view = Filtered::new(begin, end, |x: &&i32| **x % 2 == 0);
        assert_eq!(*view.current(), 4);
        assert_eq!(view.origin().position(), 0);
    }

    #[test]
    fn test_filtered_read_is_idempotent() {
        let tested = Cell::new(0);
        let data = [1, 2, 3];
        let (begin, end) = (&data).cursors();
        let view = Filtered::new(begin, end, |x: &&i32| {
            tested.set(tested.get() + 1);
            **x > 1
        });
        assert_eq!(tested.get(), 2);
        assert_eq!(*view.current(), 2);
        assert_eq!(*view.current(), 2);
        assert_eq!(tested.get(), 2);
    }

    #[test]
    fn test_filtered_no_match() {
        let data = [1, 3, 5];
        let (begin, end) = (&data).cursors();
        let never = |_: &&i32| false;
        let mut view = Filtered::new(begin, end, never);
        let sentinel = Filtered::new(end, end, never);
        assert!(!view.has_more(&sentinel));
        view.advance();
        assert!(!view.has_more(&sentinel));
    }

    #[test]
    fn test_filtered_end_view_reads_nothing() {
        let tested = Cell::new(0);
        let data = [1, 2];
        let end = SliceCursor::end(&data);
        let sentinel = Filtered::new(end, end, |_: &&i32| {
            tested.set(tested.get() + 1);
            true
        });
        assert_eq!(tested.get(), 0);
        assert!(!sentinel.has_more(&sentinel.clone()));
    }

    #[test]
    fn test_filtered_each_element_tested_once() {
        let tested = Cell::new(0);
        let data = [1, 2, 3, 4, 5, 6, 7];
        let (begin, end) = (&data).cursors();
        let odd = |x: &&i32| {
            tested.set(tested.get() + 1);
            **x % 2 == 1
        };
        let items = drain(Filtered::new(begin, end, odd), &Filtered::new(end, end, odd));
        assert_eq!(items, vec![&1, &3, &5, &7]);
        assert_eq!(tested.get(), data.len());
    }
}
