extern crate std;

use std::{
    boxed::Box,
    format,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
    string::{String, ToString},
    vec,
    vec::Vec,
};

use core::{any::Any, cell::Cell, fmt::Write};

use super::{BoxedList, ErasedList};
use crate::linked_list::intrusive::error::SortError;

fn list_of(values: &[i32]) -> BoxedList<i32> {
    let mut list = BoxedList::new();
    for value in values {
        list.append(Box::new(*value));
    }
    list
}

fn collect(list: &BoxedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_append_owns_elements_in_order() {
    let list = list_of(&[5, 7, 3, 4, 9]);
    assert_eq!(list.count(), 5);
    assert_eq!(list.head(), Some(&5));
    assert_eq!(collect(&list), vec![5, 7, 3, 4, 9]);
}

#[test]
fn test_push_pop() {
    let mut list = BoxedList::new();
    list.push(Box::new(1));
    list.push(Box::new(2));
    list.append(Box::new(3));

    assert_eq!(list.pop().as_deref(), Some(&2));
    assert_eq!(list.pop().as_deref(), Some(&1));
    assert_eq!(list.pop().as_deref(), Some(&3));
    assert!(list.pop().is_none());
    assert!(list.is_empty());
}

#[test]
fn test_traversals() {
    let mut list = list_of(&[5, 7, 3, 4, 9]);

    let collected = list.fold(Vec::new(), |mut acc, value| {
        acc.push(*value);
        acc
    });
    assert_eq!(collected, vec![5, 7, 3, 4, 9]);

    list.map(|value| *value += 1);
    assert_eq!(collect(&list), vec![6, 8, 4, 5, 10]);

    let mut sums = list_of(&[1, 2, 3, 4, 5]);
    sums.fold_mut(0, |acc, value| {
        *value += acc;
        *value
    });
    assert_eq!(collect(&sums), vec![1, 3, 6, 10, 15]);
}

#[test_log::test]
fn test_sort() {
    let mut list = list_of(&[5, 7, 3, 4, 9]);

    list.sort(|a, b| a <= b);
    assert_eq!(collect(&list), vec![3, 4, 5, 7, 9]);

    list.sort(|a, b| a >= b);
    assert_eq!(collect(&list), vec![9, 7, 5, 4, 3]);

    assert_eq!(
        list.try_sort(|a, b| a < b && b % 2 == 0),
        Err(SortError::NotTotalOrder { position: 0 })
    );
    assert_eq!(list.count(), 5);
}

#[test]
fn test_display_and_debug() {
    let list = list_of(&[3, 4, 5]);
    assert_eq!(format!("{list}"), "[3 4 5]");
    assert_eq!(format!("{list:?}"), "[3, 4, 5]");

    let empty = BoxedList::<i32>::new();
    assert_eq!(format!("{empty}"), "[]");

    let mut out = String::new();
    list.print(&mut out, |out, value| write!(out, "<{value}>"))
        .unwrap();
    assert_eq!(out, "[<3> <4> <5>]");
}

#[test]
fn test_every_payload_is_released_once() {
    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let drops = Rc::new(Cell::new(0));
    let mut list = BoxedList::new();
    for _ in 0..4 {
        list.append(Box::new(Tracked(drops.clone())));
    }

    let popped = list.pop();
    assert_eq!(drops.get(), 0);
    drop(popped);
    assert_eq!(drops.get(), 1);

    drop(list);
    assert_eq!(drops.get(), 4);
}

#[test]
fn test_map_into_changes_element_type() {
    let words: BoxedList<String> = [
        "It", "may", "be", "faster", "to", "just", "count", "manually", "...",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();
    assert_eq!(format!("{words}"), "[It may be faster to just count manually ...]");

    let mut lengths = words.map_into(|word| word.len());
    assert_eq!(format!("{lengths}"), "[2 3 2 6 2 4 5 8 3]");

    let total = lengths.fold_mut(0, |acc, len| {
        *len += acc;
        *len
    });
    assert_eq!(total, 35);
    assert_eq!(format!("{lengths}"), "[2 5 7 13 15 19 24 32 35]");
}

#[test]
fn test_extend_and_into_iter() {
    let mut list: BoxedList<i32> = (1..=3).collect();
    list.extend([4, 5]);
    assert_eq!(collect(&list), vec![1, 2, 3, 4, 5]);

    let iter = list.into_iter();
    assert_eq!(iter.len(), 5);
    let owned: Vec<i32> = iter.map(|value| *value).collect();
    assert_eq!(owned, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_extend_keeps_list_when_source_panics() {
    let mut list: BoxedList<i32> = (1..=3).collect();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        list.extend((4..).map(|value| {
            if value == 6 {
                panic!("source gave out");
            }
            value
        }));
    }));
    assert!(result.is_err());
    assert_eq!(list.count(), 3);
    assert_eq!(collect(&list), vec![1, 2, 3]);

    list.extend([4]);
    assert_eq!(collect(&list), vec![1, 2, 3, 4]);
}

#[test]
fn test_reverse() {
    let mut list = list_of(&[1, 2, 3]);
    list.reverse();
    assert_eq!(collect(&list), vec![3, 2, 1]);
}

#[test]
fn test_unsized_payloads() {
    let mut list = BoxedList::<str>::new();
    list.append(Box::from("pear"));
    list.append(Box::from("fig"));
    list.append(Box::from("apple"));

    list.sort(|a, b| a.len() <= b.len());
    assert_eq!(list.to_string(), "[fig pear apple]");
}

#[test]
fn test_erased_list() {
    let mut list = ErasedList::new();
    list.append_value(5i32);
    list.append_value(String::from("x"));
    list.append(Box::new(7i32) as Box<dyn Any>);

    list.map(|payload| {
        if let Some(value) = payload.downcast_mut::<i32>() {
            *value += 1;
        }
    });

    let ints: Vec<i32> = list
        .iter()
        .filter_map(|payload| payload.downcast_ref::<i32>())
        .copied()
        .collect();
    assert_eq!(ints, vec![6, 8]);
    assert_eq!(
        list.iter().nth(1).and_then(|payload| payload.downcast_ref::<String>()),
        Some(&String::from("x"))
    );
}

#[test]
fn test_empty_list() {
    let mut list = BoxedList::<i32>::new();
    assert_eq!(list.fold(0, |acc, value| acc + value), 0);
    list.map(|_| unreachable!());
    list.sort(|_, _| unreachable!());
    assert!(list.head().is_none());
    assert_eq!(list.iter().len(), 0);
}
