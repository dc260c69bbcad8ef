//! Ordering, eviction and indexing properties checked against a `VecDeque` model

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ring_buffer::{RingBuffer, RingBufferError};

/// Push `values` into both a ring buffer and a bounded `VecDeque` model
fn fill_with_model(capacity: usize, values: &[u32]) -> (RingBuffer<u32>, VecDeque<u32>) {
    let mut buf = RingBuffer::new(capacity).unwrap();
    let mut model = VecDeque::with_capacity(capacity);
    for &value in values {
        let evicted = buf.push(value);
        let expected = if model.len() == capacity {
            model.pop_front()
        } else {
            None
        };
        assert_eq!(evicted, expected);
        model.push_back(value);
        assert!(buf.len() <= buf.capacity());
    }
    (buf, model)
}

fn random_values(rng: &mut ChaCha8Rng, count: usize) -> Vec<u32> {
    (0..count).map(|_| rng.gen_range(0..1000)).collect()
}

#[test]
fn test_reference_scenario() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut buf = RingBuffer::new(5).unwrap();
    for i in 0..12 {
        buf.push(i);
    }

    let forward: Vec<_> = buf.iter().copied().collect();
    assert_eq!(forward, vec![7, 8, 9, 10, 11]);

    let reverse: Vec<_> = buf.iter_rev().copied().collect();
    assert_eq!(reverse, vec![11, 10, 9, 8, 7]);

    // Step the reverse view manually until it reaches its end state
    let mut stepped = Vec::new();
    let mut rit = buf.iter_rev();
    while let Some(item) = rit.next() {
        stepped.push(*item);
    }
    assert_eq!(stepped, reverse);

    let newest_first: Vec<_> = (0..buf.len() as isize).map(|i| buf[i]).collect();
    assert_eq!(newest_first, vec![11, 10, 9, 8, 7]);

    let oldest_first: Vec<_> = (buf.oldest()..=0).map(|i| buf[i]).collect();
    assert_eq!(oldest_first, vec![7, 8, 9, 10, 11]);
}

#[test]
fn test_eviction_keeps_last_capacity_items() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    for capacity in 1..=9 {
        for extra in 0..20 {
            let values = random_values(&mut rng, capacity + extra);
            let (buf, model) = fill_with_model(capacity, &values);
            assert_eq!(buf.len(), capacity);
            assert!(buf.iter().eq(values[extra..].iter()));
            assert!(buf.iter().eq(model.iter()));
        }
    }
}

#[test]
fn test_reverse_is_forward_reversed() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let capacity = rng.gen_range(1..16);
        let count = rng.gen_range(0..40);
        let values = random_values(&mut rng, count);
        let (buf, _) = fill_with_model(capacity, &values);

        let mut forward: Vec<_> = buf.iter().collect();
        let reverse: Vec<_> = buf.iter_rev().collect();
        assert_eq!(forward.len(), reverse.len());
        forward.reverse();
        assert_eq!(forward, reverse);
    }
}

#[test]
fn test_relative_indices_match_model() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..200 {
        let capacity = rng.gen_range(1..12);
        let count = rng.gen_range(1..30);
        let values = random_values(&mut rng, count);
        let (buf, model) = fill_with_model(capacity, &values);
        let len = buf.len() as isize;

        for age in 0..len {
            let expected = model[model.len() - 1 - age as usize];
            assert_eq!(buf[age], expected, "positive index {age}");
        }

        // Negative side: -len is the newest, then -(len - 1) .. -1 walk ages
        // len - 1 down to 1, matching the positive index of the same magnitude.
        assert_eq!(buf.get(-len), buf.get(0));
        for age in 1..len {
            assert_eq!(buf.get(-age), buf.get(age), "negative index {}", -age);
        }

        assert_eq!(buf.get(0).ok(), model.back());
        assert_eq!(buf.get(buf.oldest()).ok(), model.front());
    }
}

#[test]
fn test_reads_are_idempotent() {
    let mut buf = RingBuffer::new(4).unwrap();
    buf.extend(["a", "b", "c", "d", "e", "f"]);

    let snapshot = (buf.len(), buf.capacity(), buf.oldest(), buf[-2], buf[1]);
    for _ in 0..3 {
        assert_eq!(
            (buf.len(), buf.capacity(), buf.oldest(), buf[-2], buf[1]),
            snapshot
        );
    }
    assert_eq!(buf.to_vec(), buf.to_vec());
}

#[test]
fn test_out_of_range_is_reported() {
    let mut buf = RingBuffer::new(3).unwrap();
    assert_eq!(buf.get(0), Err(RingBufferError::EmptyBufferAccess));
    assert_eq!(buf.get(-1), Err(RingBufferError::EmptyBufferAccess));

    buf.extend(0..10u8);
    for index in [3, 4, 100, -4, -100, isize::MIN, isize::MAX] {
        assert_eq!(
            buf.get(index),
            Err(RingBufferError::IndexOutOfRange { index, len: 3 })
        );
    }
}

#[test]
fn test_zero_capacity_is_rejected() {
    assert_eq!(
        RingBuffer::<String>::new(0).unwrap_err(),
        RingBufferError::InvalidCapacity
    );
}

#[test]
fn test_mutation_through_index_is_visible_to_views() {
    let mut buf = RingBuffer::new(3).unwrap();
    buf.extend(vec![String::from("x"); 5]);
    let oldest = buf.oldest();
    buf[0].push('!');
    buf[oldest].push('?');

    let forward: Vec<_> = buf.iter().map(String::as_str).collect();
    assert_eq!(forward, vec!["x?", "x", "x!"]);
}
