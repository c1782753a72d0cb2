use crate::heap::{Heap, HeapPage};
use crate::page::Page;
use crate::page_store::PageStore;
use common::prelude::*;
use common::PAGE_SIZE;
use rand::rngs::SmallRng;
use rand::Rng;
use std::hint::black_box;

pub enum BenchOp {
    Push(Vec<u8>),
    ReadSlot(SlotId),
    Scan,
}

pub fn gen_page_bench_workload(
    rng: &mut SmallRng,
    num_ops: usize,
    min_size: usize,
    max_size: usize,
) -> Vec<BenchOp> {
    let mut res = Vec::new();
    let mut random_bytes =
        common::testutil::get_random_vec_of_byte_vec(rng, num_ops, min_size, max_size);
    let mut expected_max_slot = 0;
    let seed_insert = 5;
    // Seed the first ops to be pushes so reads have something to hit
    for _ in 0..seed_insert {
        expected_max_slot += 1;
        res.push(BenchOp::Push(random_bytes.pop().unwrap()));
    }
    for _ in seed_insert..num_ops {
        let op = match rng.random_range(0..100) {
            0..30 => {
                expected_max_slot += 1;
                BenchOp::Push(random_bytes.pop().unwrap())
            }
            30..40 => BenchOp::Scan,
            _ => BenchOp::ReadSlot(rng.random_range(0..expected_max_slot)),
        };
        res.push(op);
    }
    res
}

pub fn bench_page_mixed(workload: &Vec<BenchOp>) {
    let mut buf = Page::new();
    let (mut page, _) = HeapPage::init(buf.to_bytes_mut().as_mut_slice(), PAGE_SIZE);
    for op in workload {
        match op {
            BenchOp::Push(v) => {
                if page.available() >= v.len() {
                    let res = page.push(v);
                    black_box(res);
                }
            }
            BenchOp::ReadSlot(slot) => {
                if (*slot as usize) < page.count() {
                    let res = page.value(*slot as usize);
                    black_box(res);
                }
            }
            BenchOp::Scan => {
                for (slot, value) in page.iter() {
                    black_box(slot);
                    black_box(value);
                }
            }
        }
    }
}

pub fn bench_heap_push(to_push: &[Vec<u8>]) {
    let mut store = PageStore::new();
    let mut heap = Heap::new(&mut store);
    for x in to_push {
        let addr = heap.push(x).unwrap();
        black_box(addr);
    }
}

pub fn bench_heap_mixed(workload: &Vec<BenchOp>) {
    let mut store = PageStore::new();
    let mut heap = Heap::new(&mut store);
    let mut addrs: Vec<Address> = Vec::new();
    for op in workload {
        match op {
            BenchOp::Push(v) => {
                let addr = heap.push(v).unwrap();
                addrs.push(addr);
                black_box(addr);
            }
            BenchOp::ReadSlot(offset) => {
                let idx = *offset as usize % addrs.len();
                let res = heap.get(addrs[idx]);
                black_box(res);
            }
            BenchOp::Scan => {
                for addr in &addrs {
                    black_box(heap.get(*addr));
                }
            }
        }
    }
}
