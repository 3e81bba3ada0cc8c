use dynarray::DynArray;

#[test]
fn test_iterator_empty_array() {
    let array: DynArray<i32> = DynArray::new();

    let mut iter = array.iter();
    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_populated_array() {
    let array = DynArray::from(vec!["hello", "world", "test"]);

    let mut iter = array.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));

    assert_eq!(iter.next(), Some(&"hello"));
    assert_eq!(iter.len(), 2);

    assert_eq!(iter.next(), Some(&"world"));
    assert_eq!(iter.next(), Some(&"test"));
    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_stops_at_len() {
    let mut array = DynArray::new();
    array.extend_from_slice(&[1, 2, 3, 4, 5]);
    array.pop().unwrap();

    assert!(array.capacity() > 4);
    assert_eq!(array.iter().count(), 4);
}

#[test]
fn test_for_loop() {
    let array = DynArray::from(vec![1, 2, 3]);

    let mut sum = 0;
    for element in &array {
        sum += element;
    }
    assert_eq!(sum, 6);
}

#[test]
fn test_reverse_iterator() {
    let mut array = DynArray::new();
    array.prepend_slice(&['a', 'b', 'c']);

    let collected: Vec<char> = array.iter_rev().copied().collect();
    assert_eq!(collected, vec!['c', 'b', 'a']);
}

#[test]
fn test_iterator_both_ends() {
    let array = DynArray::from(vec![1, 2, 3, 4]);

    let mut iter = array.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_iterator_clone() {
    let array = DynArray::from(vec![1, 2, 3]);

    let mut iter = array.iter();
    iter.next();
    let rest: Vec<_> = iter.clone().collect();

    assert_eq!(rest, vec![&2, &3]);
    assert_eq!(iter.next(), Some(&2));
}

#[test]
fn test_owning_iterator() {
    let mut array = DynArray::new();
    array.extend_from_slice(&[String::from("a"), String::from("b"), String::from("c")]);
    array.pop().unwrap();

    let mut iter = array.into_iter();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next_back(), Some(String::from("b")));
    assert_eq!(iter.next(), Some(String::from("a")));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_collect_round_trip() {
    let array: DynArray<i32> = vec![3, 1, 2].into_iter().collect();
    let doubled: DynArray<i32> = array.iter().map(|x| x * 2).collect();

    assert_eq!(doubled, [6, 2, 4]);
}
