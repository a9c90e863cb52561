use std::cell::Cell;
use std::thread;

use super::*;
use crate::param::InitPolicy;

crate::param!(Counter: u32);
crate::param!(Greeting: String = "hello");
crate::param!(Seeded: u64 => next_seed);
crate::param!(Scratch: Vec<u8>);
crate::param!(Fresh: i32 = 7);

thread_local! {
	static SEEDS: Cell<u64> = const { Cell::new(0) };
}

fn next_seed() -> u64 {
	SEEDS.with(|seeds| {
		let n = seeds.get() + 1;
		seeds.set(n);
		n * 100
	})
}

#[test]
fn test_initial_values_follow_policy() {
	thread::spawn(|| {
		assert_eq!(get::<Counter>(), 0);
		assert_eq!(get::<Greeting>(), "hello");
		assert_eq!(get::<Seeded>(), 100);
	})
	.join()
	.unwrap();

	assert_eq!(Counter::POLICY, InitPolicy::Zero);
	assert_eq!(Greeting::POLICY, InitPolicy::Constant);
	assert_eq!(Seeded::POLICY, InitPolicy::Producer);
}

#[test]
fn test_producer_runs_once_per_thread() {
	thread::spawn(|| {
		assert_eq!(get::<Seeded>(), 100);
		assert_eq!(get::<Seeded>(), 100);
		set::<Seeded>(5);
		assert_eq!(get::<Seeded>(), 5);
		assert_eq!(SEEDS.with(Cell::get), 1);
	})
	.join()
	.unwrap();
}

#[test]
fn test_set_is_thread_local() {
	thread::spawn(|| {
		set::<Counter>(42);
		let other = thread::spawn(|| get::<Counter>()).join().unwrap();
		assert_eq!(other, 0);
		assert_eq!(get::<Counter>(), 42);
	})
	.join()
	.unwrap();
}

#[test]
fn test_replace_returns_previous() {
	thread::spawn(|| {
		assert_eq!(replace::<Greeting>("hi".into()), "hello");
		assert_eq!(replace::<Greeting>("hey".into()), "hi");
		assert_eq!(get::<Greeting>(), "hey");
	})
	.join()
	.unwrap();
}

#[test]
fn test_with_borrows_live_value() {
	thread::spawn(|| {
		update::<Scratch, _>(|bytes| bytes.extend_from_slice(b"abc"));
		let len = with::<Scratch, _>(|bytes| bytes.len());
		assert_eq!(len, 3);
		update::<Scratch, _>(|bytes| bytes.push(b'd'));
		assert_eq!(with::<Scratch, _>(|bytes| bytes.clone()), b"abcd");
	})
	.join()
	.unwrap();
}

#[test]
fn test_reset_reseeds_from_policy() {
	thread::spawn(|| {
		set::<Fresh>(99);
		assert_eq!(reset::<Fresh>(), 99);
		assert_eq!(get::<Fresh>(), 7);
	})
	.join()
	.unwrap();
}

#[test]
fn test_with_allows_changing_the_same_param() {
	thread::spawn(|| {
		let seen = with::<Counter, _>(|value| {
			set::<Counter>(*value + 5);
			let inner = get::<Counter>();
			(*value, inner)
		});
		assert_eq!(seen, (0, 5));
		assert_eq!(get::<Counter>(), 5);

		let nested = with::<Counter, _>(|_| try_with::<Counter, _>(|value| *value));
		assert_eq!(nested, Ok(5));
		assert_eq!(try_set::<Counter>(3), Ok(()));
		assert_eq!(get::<Counter>(), 3);
	})
	.join()
	.unwrap();
}

#[test]
fn test_update_result_wins_over_inner_writes() {
	thread::spawn(|| {
		let len = update::<Scratch, _>(|bytes| {
			set::<Scratch>(b"ignored".to_vec());
			bytes.push(b'z');
			bytes.len()
		});
		assert_eq!(len, 1);
		assert_eq!(get::<Scratch>(), b"z");
	})
	.join()
	.unwrap();
}

#[test]
fn test_names_are_module_qualified() {
	assert!(Counter::NAME.ends_with("registry::tests::Counter"));
	assert_ne!(Counter::NAME, Fresh::NAME);
}
