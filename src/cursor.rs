use std::fmt;

/// 游标：序列上的一个位置，支持前进、读取、与结束位置比较。
///
/// 游标要么可读（live），要么等于结束位置（end）。对结束位置调用[`Cursor::current`]属于违约，
/// 本库自身的遍历从不这样做。
pub trait Cursor: Clone {
    /// 读取得到的元素类型
    type Item;

    /// 前进一个位置
    fn advance(&mut self);

    /// 读取当前位置的元素
    fn current(&self) -> Self::Item;

    /// 是否还未到达`end`，即仍有元素可读
    fn has_more(&self, end: &Self) -> bool;
}

/// 可以给出一对`(begin, end)`游标的序列。
pub trait Sequence {
    type Cursor: Cursor;

    fn cursors(self) -> (Self::Cursor, Self::Cursor);
}

/// 切片、`Vec`、数组的原生游标，借用底层存储。
///
/// 起止游标只要起始地址相同即视为同一序列，因此结束游标可以取自同一序列的前缀子切片。
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn begin(data: &'a [T]) -> Self {
        SliceCursor { data, pos: 0 }
    }

    pub fn end(data: &'a [T]) -> Self {
        SliceCursor { data, pos: data.len() }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

// 手动实现，避免对`T`附加`Clone`/`Copy`约束
impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor").field("pos", &self.pos).field("len", &self.data.len()).finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn current(&self) -> Self::Item {
        &self.data[self.pos]
    }

    fn has_more(&self, end: &Self) -> bool {
        debug_assert!(std::ptr::eq(self.data.as_ptr(), end.data.as_ptr()), "cursors from different sequences");
        debug_assert!(end.pos <= end.data.len(), "end cursor past its sequence");
        self.pos != end.pos
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn cursors(self) -> (Self::Cursor, Self::Cursor) {
        (SliceCursor::begin(self), SliceCursor::end(self))
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn cursors(self) -> (Self::Cursor, Self::Cursor) {
        self.as_slice().cursors()
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn cursors(self) -> (Self::Cursor, Self::Cursor) {
        self.as_slice().cursors()
    }
}

/// 把一对游标桥接为标准库迭代器，用于`for`循环及`Iterator`适配器。
///
/// 前进推迟到下一次`next`，调用方提前停止时不会多求值一个元素。
#[derive(Debug, Clone)]
pub struct Walk<C> {
    current: C,
    end: C,
    started: bool,
}

impl<C: Cursor> Walk<C> {
    pub fn new(begin: C, end: C) -> Self {
        Walk { current: begin, end, started: false }
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
        } else if self.current.has_more(&self.end) {
            self.current.advance();
        }
        if self.current.has_more(&self.end) { Some(self.current.current()) } else { None }
    }
}

impl<C: Cursor> std::iter::FusedIterator for Walk<C> {}
