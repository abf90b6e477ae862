//! 流水线入口：把序列或一对游标包装成根[`Bound`]。

use crate::bound::Bound;
use crate::cursor::{Cursor, Sequence};
use crate::filtered::Filtered;
use crate::mapped::Mapped;

pub fn chain<S: Sequence>(seq: S) -> Bound<S::Cursor> {
    let (begin, end) = seq.cursors();
    Bound::new(begin, end)
}

pub fn chain_between<C: Cursor>(begin: C, end: C) -> Bound<C> {
    Bound::new(begin, end)
}

/// 等价于`chain(seq).map(f)`。
pub fn map<S, F, O>(seq: S, f: F) -> Bound<Mapped<S::Cursor, F>>
where
    S: Sequence,
    F: Fn(<S::Cursor as Cursor>::Item) -> O + Clone,
{
    chain(seq).map(f)
}

pub fn map_between<C, F, O>(begin: C, end: C, f: F) -> Bound<Mapped<C, F>>
where
    C: Cursor,
    F: Fn(C::Item) -> O + Clone,
{
    chain_between(begin, end).map(f)
}

/// 等价于`chain(seq).filter(pred)`。
pub fn filter<S, P>(seq: S, pred: P) -> Bound<Filtered<S::Cursor, P>>
where
    S: Sequence,
    <S::Cursor as Cursor>::Item: Clone,
    P: Fn(&<S::Cursor as Cursor>::Item) -> bool + Clone,
{
    chain(seq).filter(pred)
}

pub fn filter_between<C, P>(begin: C, end: C, pred: P) -> Bound<Filtered<C, P>>
where
    C: Cursor,
    C::Item: Clone,
    P: Fn(&C::Item) -> bool + Clone,
{
    chain_between(begin, end).filter(pred)
}

/// 等价于`chain(seq).foreach(f)`。
pub fn foreach<S, F>(seq: S, f: F)
where
    S: Sequence,
    F: FnMut(<S::Cursor as Cursor>::Item),
{
    chain(seq).foreach(f);
}

pub fn foreach_between<C, F>(begin: C, end: C, f: F)
where
    C: Cursor,
    F: FnMut(C::Item),
{
    chain_between(begin, end).foreach(f);
}
