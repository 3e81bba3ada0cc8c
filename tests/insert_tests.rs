use dynarray::DynArray;

#[test]
fn test_insert_front_back_middle() {
    let mut array = DynArray::from(vec![1, 8, 4, 3]);

    array.insert(0, 100);
    array.insert(1000, 99);
    array.insert(2, 49);

    assert_eq!(array.to_vec(), vec![100, 1, 49, 8, 4, 3, 99]);
}

#[test]
fn test_insert_at_len_appends() {
    let mut array = DynArray::from(vec![1, 2, 3]);
    array.insert(3, 4);

    assert_eq!(array.to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_insert_before_last() {
    let mut array = DynArray::from(vec![1, 2, 3]);
    array.insert(2, 9);

    assert_eq!(array.to_vec(), vec![1, 2, 9, 3]);
}

#[test]
fn test_insert_negative_index() {
    let mut array = DynArray::from(vec![1, 2, 3]);

    // -1 converts with the length before the insert: before the last element
    array.insert(-1, 9);
    assert_eq!(array.to_vec(), vec![1, 2, 9, 3]);

    array.insert(-4, 0);
    assert_eq!(array.to_vec(), vec![0, 1, 2, 9, 3]);
}

#[test]
fn test_insert_negative_past_start_prepends() {
    let mut array = DynArray::from(vec![1, 2]);
    array.insert(-10, 0);

    assert_eq!(array.to_vec(), vec![0, 1, 2]);
}

#[test]
fn test_insert_into_empty() {
    let mut array = DynArray::new();
    array.insert(0, "only");
    assert_eq!(array.to_vec(), vec!["only"]);

    let mut array = DynArray::new();
    array.insert(-1, "only");
    assert_eq!(array.to_vec(), vec!["only"]);
}

#[test]
fn test_insert_without_growth() {
    let mut array = DynArray::new();
    array.extend_from_slice(&[1, 2, 3, 4, 5]);
    let capacity = array.capacity();

    array.insert(1, 10);
    array.insert(0, 20);

    assert_eq!(array.capacity(), capacity);
    assert_eq!(array.to_vec(), vec![20, 1, 10, 2, 3, 4, 5]);
}

#[test]
fn test_delete_then_insert_restores() {
    let original = vec![5, 6, 7, 8, 9];

    for index in 0..original.len() {
        let mut array = DynArray::from(original.clone());
        let removed = array.delete(index).unwrap();
        array.insert(isize::try_from(index).unwrap(), removed);

        assert_eq!(array.to_vec(), original, "round trip at index {index}");
    }
}

#[test]
fn test_prepend_many_through_growth() {
    let mut array = DynArray::new();
    for item in 0..50 {
        array.prepend(item);
    }

    let expected: Vec<i32> = (0..50).rev().collect();
    assert_eq!(array.to_vec(), expected);
}

#[test]
fn test_mixed_insertions() {
    let mut array = DynArray::new();
    array.append(3);
    array.prepend(1);
    array.insert(1, 2);
    array.extend_from_slice(&[4, 5]);
    array.prepend_slice(&[-1, 0]);
    array.insert(-1, 45);

    assert_eq!(array.to_vec(), vec![-1, 0, 1, 2, 3, 4, 45, 5]);
}
