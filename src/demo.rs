use log::debug;

use maxheap::MaxHeap;

fn main() {
    env_logger::init();
    let mut my_heap = MaxHeap::new();
    for n in [6, 8, 2, 7, 13] {
        my_heap.add(n, n);
    }
    println!("{}", my_heap);
    for _ in 0..6 {
        let res = my_heap.remove();
        debug!("remove() = {:?}, {} left", res, my_heap.len());
    }
    println!("{}", my_heap);
}
