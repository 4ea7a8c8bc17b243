//! Pattern 2: Thread-Safe Singleton Counter
//! One OnceLock instance, Mutex-serialized increment/decrement/read
//!
//! Run with: cargo run --bin p2_singleton

use design_patterns::CounterSingleton;
use rayon::prelude::*;
use std::thread;

fn same_instance_example() {
    // There is no public constructor; global() is the only access point.
    let first = CounterSingleton::global();
    let second = CounterSingleton::global();

    println!("Same instance from repeated calls: {}", std::ptr::eq(first, second));

    let elsewhere = thread::spawn(CounterSingleton::global)
        .join()
        .expect("thread completed");
    println!("Same instance from another thread: {}", std::ptr::eq(first, elsewhere));
}

fn counter_contract_example() {
    let counter = CounterSingleton::global();

    println!("Start value: {}", counter.value());
    println!("decrement() at zero -> {} (counter stays at {})", counter.decrement(), counter.value());

    counter.increment();
    counter.increment();
    println!("After two increments: {}", counter.value());
    println!("decrement() -> {}", counter.decrement());
    println!("Final value: {}", counter.value());
}

fn spawned_threads_example() {
    let counter = CounterSingleton::global();
    // Drain whatever earlier sections left behind.
    while counter.decrement() {}

    let threads: u64 = 10;
    let handles: Vec<_> = (0..threads)
        .map(|_| thread::spawn(|| CounterSingleton::global().increment()))
        .collect();
    for handle in handles {
        handle.join().expect("thread completed");
    }

    println!("{} threads, one increment each: {}", threads, counter.value());
}

fn parallel_iterator_example() {
    let counter = CounterSingleton::global();
    while counter.decrement() {}

    (0..100u64)
        .into_par_iter()
        .for_each(|_| CounterSingleton::global().increment());

    println!("100 parallel increments: {}", counter.value());
}

fn main() {
    println!("=== Single Instance ===\n");
    same_instance_example();

    println!("\n=== Counter Contract ===\n");
    counter_contract_example();

    println!("\n=== No Lost Updates (spawn/join) ===\n");
    spawned_threads_example();

    println!("\n=== No Lost Updates (rayon) ===\n");
    parallel_iterator_example();

    println!("\n=== Key Points ===");
    println!("1. OnceLock initializes the single instance exactly once");
    println!("2. global() is the only access point; no constructor is reachable");
    println!("3. increment/decrement/value all serialize on the same Mutex");
    println!("4. decrement at zero is a no-op that reports false");
}
