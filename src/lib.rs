//! 惰性求值的函数式流水线：在已有序列上组合`map`、`filter`，由`foreach`逐个拉取元素。
//!
//! 每次`map`/`filter`只是把上一阶段的游标包进新的视图，不分配中间容器；
//! `foreach`每前进一步，才让该元素依次穿过全部阶段。
//! 例外：构造`filter`阶段时会向前求值到第一个满足谓词的元素（或结束位置），此后读取不再移动游标。
//!
//! ```
//! use fpchain::chain;
//!
//! let vec = vec!["1", "2", "3", "4", "5", "6", "7"];
//! let mut odd_squares = vec![];
//! chain(&vec)
//!     .map(|s| s.parse::<i64>().unwrap_or(0))
//!     .map(|n| n * n)
//!     .filter(|n| n % 2 == 1)
//!     .foreach(|n| odd_squares.push(n));
//! assert_eq!(odd_squares, vec![1, 9, 25, 49]);
//! ```

pub mod bound;
pub mod chain;
pub mod cursor;
pub mod filtered;
pub mod mapped;

pub use bound::Bound;
pub use chain::{chain, chain_between, filter, filter_between, foreach, foreach_between, map, map_between};
pub use cursor::{Cursor, Sequence, SliceCursor, Walk};
pub use filtered::Filtered;
pub use mapped::Mapped;
