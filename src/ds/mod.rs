pub mod min_heap;
pub mod monotonic_deque;
pub mod recency_list;
pub mod slot_arena;

pub use min_heap::{ByFn, HeapOrder, MinHeap, Natural};
pub use monotonic_deque::{Indexed, MonotonicDeque};
pub use recency_list::{RecencyIter, RecencyList};
pub use slot_arena::{SlotArena, SlotId};
