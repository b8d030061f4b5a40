use simple_vector::{SimpleVector, SimpleVectorError};

#[test]
fn test_push_back_doubles_from_one() {
    let mut v = SimpleVector::new();
    let mut capacities = Vec::new();

    for i in 0..9 {
        v.push_back(i);
        capacities.push(v.capacity());
    }

    assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_push_back_within_capacity_does_not_reallocate() {
    let mut v: SimpleVector<i32> = SimpleVector::new();
    v.reserve(10);
    let start = v.as_ptr();

    for i in 0..10 {
        v.push_back(i);
    }

    assert_eq!(v.capacity(), 10);
    assert_eq!(v.as_ptr(), start);
}

#[test]
fn test_reallocation_count_is_logarithmic() {
    let mut v = SimpleVector::new();
    let mut reallocations = 0u32;
    let mut last_capacity = v.capacity();

    let n = 1000usize;
    for i in 0..n {
        v.push_back(i);
        if v.capacity() != last_capacity {
            reallocations += 1;
            last_capacity = v.capacity();
        }
    }

    let bound = (n as f64).log2().ceil() as u32 + 1;
    assert!(reallocations <= bound, "{reallocations} > {bound}");
}

#[test]
fn test_insert_into_full_vector_doubles() {
    let mut v = SimpleVector::from([1, 2]);
    v.insert(1, 5);

    assert_eq!(v.capacity(), 4);
    assert_eq!(v, [1, 5, 2]);

    let mut empty = SimpleVector::new();
    empty.insert(0, 42);
    assert_eq!(empty.capacity(), 1);
    assert_eq!(empty, [42]);
}

#[test]
fn test_reserve_is_exact() {
    let mut v = SimpleVector::from([1, 2, 3]);

    v.reserve(7);
    assert_eq!(v.capacity(), 7);
    assert_eq!(v.len(), 3);
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn test_reserve_never_shrinks() {
    let mut v = SimpleVector::from([1, 2, 3]);
    v.reserve(10);

    v.reserve(4);
    assert_eq!(v.capacity(), 10);

    v.reserve(0);
    assert_eq!(v.capacity(), 10);
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn test_resize_past_capacity_doubles_new_size() {
    let mut v = SimpleVector::from([String::from("a"), String::from("b")]);
    assert_eq!(v.capacity(), 2);

    v.resize(5);

    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 10);
    assert_eq!(v[0], "a");
    assert_eq!(v[1], "b");
    assert!(v[2..].iter().all(String::is_empty));
}

#[test]
fn test_resize_within_capacity_keeps_buffer() {
    let mut v = SimpleVector::new();
    v.reserve(8);
    v.push_back(1);
    v.push_back(2);
    let start = v.as_ptr();

    v.resize(6);

    assert_eq!(v, [1, 2, 0, 0, 0, 0]);
    assert_eq!(v.capacity(), 8);
    assert_eq!(v.as_ptr(), start);
}

#[test]
fn test_resize_within_capacity_resets_stale_slots() {
    let mut v = SimpleVector::from([1, 2, 3, 4]);
    v.pop_back();
    v.pop_back();

    v.resize(4);

    assert_eq!(v, [1, 2, 0, 0]);
    assert_eq!(v.capacity(), 4);
}

#[test]
fn test_resize_shrink_truncates() {
    let mut v = SimpleVector::from([1, 2, 3, 4]);

    v.resize(1);
    assert_eq!(v, [1]);
    assert_eq!(v.capacity(), 4);

    v.resize(0);
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 4);
}

#[test]
fn test_relocation_keeps_order_of_owned_values() {
    let mut v = SimpleVector::new();
    for word in ["one", "two", "three", "four", "five"] {
        v.push_back(String::from(word));
    }

    assert_eq!(v.capacity(), 8);
    assert_eq!(v, ["one", "two", "three", "four", "five"].map(String::from));
}

#[test]
fn test_failed_reserve_leaves_vector_untouched() {
    let mut v = SimpleVector::from([1u64, 2, 3]);

    let result = v.try_reserve(usize::MAX);

    assert_eq!(
        result,
        Err(SimpleVectorError::AllocationFailed {
            requested: usize::MAX
        })
    );
    assert_eq!(v, [1, 2, 3]);
    assert_eq!(v.capacity(), 3);
}

#[test]
fn test_resize_capacity_overflow() {
    let mut v = SimpleVector::from([1u8]);

    let result = v.try_resize(usize::MAX);

    assert_eq!(
        result,
        Err(SimpleVectorError::CapacityOverflow {
            requested_size: usize::MAX
        })
    );
    assert_eq!(v, [1]);
}

#[test]
fn test_repeated_extend_doubles_like_push_back() {
    let mut v = SimpleVector::new();
    let mut reallocations = 0u32;
    let mut last_capacity = v.capacity();

    for i in 0..1000usize {
        v.extend([i]);
        if v.capacity() != last_capacity {
            reallocations += 1;
            last_capacity = v.capacity();
        }
    }

    assert_eq!(reallocations, 11);
    assert_eq!(v.capacity(), 1024);
    assert_eq!(v.len(), 1000);
}

#[test]
fn test_extend_takes_exact_fit_when_doubling_is_too_small() {
    let mut v = SimpleVector::from([1, 2]);

    v.extend([3, 4, 5, 6, 7]);
    assert_eq!(v.capacity(), 7);

    v.extend([8]);
    assert_eq!(v.capacity(), 14);
    assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8]);
}
