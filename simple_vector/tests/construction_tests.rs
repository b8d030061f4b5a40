use simple_vector::{reserve, SimpleVector};

#[test]
fn test_default_construction() {
    let v: SimpleVector<i32> = SimpleVector::new();

    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
    assert!(v.is_empty());

    let v: SimpleVector<i32> = SimpleVector::default();
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_sized_construction_uses_defaults() {
    let v: SimpleVector<i32> = SimpleVector::with_size(5);

    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 5);
    assert!(v.iter().all(|&x| x == 0));
}

#[test]
fn test_sized_construction_with_zero() {
    let v: SimpleVector<String> = SimpleVector::with_size(0);

    assert!(v.is_empty());
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_construction_with_fill_value() {
    let v = SimpleVector::with_value(3, &String::from("abc"));

    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 3);
    assert!(v.iter().all(|s| s == "abc"));
}

#[test]
fn test_construction_from_list() {
    let v = SimpleVector::from([1, 2, 3]);

    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 3);
    assert_eq!(v, [1, 2, 3]);
    assert_eq!(v[0], 1);
    assert_eq!(v[2], 3);
}

#[test]
fn test_construction_from_slice() {
    let source = [4, 5, 6, 7];
    let v = SimpleVector::from(&source[1..]);

    assert_eq!(v, [5, 6, 7]);
    assert_eq!(v.capacity(), 3);

    let v = SimpleVector::from_slice(&source);
    assert_eq!(v.as_slice(), &source);
}

#[test]
fn test_construction_from_reserve_hint() {
    let v: SimpleVector<i32> = SimpleVector::with_reserve(reserve(5));

    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 5);
    assert!(v.is_empty());

    let v: SimpleVector<i32> = reserve(7).into();
    assert_eq!(v.capacity(), 7);
}

#[test]
fn test_reserve_hint_of_zero_does_not_allocate() {
    let v: SimpleVector<i32> = SimpleVector::with_reserve(reserve(0));

    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_collect_reserves_exactly() {
    let v: SimpleVector<i32> = (1..=4).collect();

    assert_eq!(v, [1, 2, 3, 4]);
    assert_eq!(v.capacity(), 4);
}

#[test]
fn test_fallible_constructors() {
    let v = SimpleVector::<u8>::try_with_size(2).unwrap();
    assert_eq!(v, [0, 0]);

    let v = SimpleVector::try_with_value(2, &9u8).unwrap();
    assert_eq!(v, [9, 9]);

    assert!(SimpleVector::<u64>::try_with_size(usize::MAX).is_err());
}
