pub mod entry;
pub mod maxheap;

pub use entry::HeapEntry;
pub use maxheap::MaxHeap;
