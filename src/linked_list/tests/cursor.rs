extern crate std;

use std::vec;
use std::vec::Vec;

use crate::linked_list::{cursor::Cursor, list::LinkedList};

fn list_of(values: &[u32]) -> LinkedList {
    let mut list = LinkedList::new();
    for &value in values {
        list.push_back(value).unwrap();
    }
    list
}

#[test]
fn test_cursor_on_empty_list() {
    let list = LinkedList::new();
    assert!(list.cursor(0).is_none());
    assert!(Cursor::new(&list, 3).is_none());
}

#[test]
fn test_cursor_positions() {
    let list = list_of(&[10, 20, 30]);

    for index in 0..3 {
        let cursor = list.cursor(index).unwrap();
        assert_eq!(cursor.index(), index);
        assert_eq!(cursor.current(), list.get(index).unwrap());
        assert_eq!(cursor.has_next(), index != 2);
    }

    // No element lives at the length.
    assert!(list.cursor(3).is_none());
    assert!(list.cursor(4).is_none());
}

#[test]
fn test_has_next_does_not_move() {
    let list = list_of(&[1, 2]);
    let cursor = list.cursor(0).unwrap();
    assert!(cursor.has_next());
    assert!(cursor.has_next());
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.current(), 1);
}

#[test]
fn test_advance() {
    let list = list_of(&[1, 2, 3]);
    let mut cursor = list.cursor(1).unwrap();

    assert!(cursor.advance());
    assert_eq!(cursor.current(), 3);
    assert_eq!(cursor.index(), 2);

    assert!(!cursor.advance());
    assert_eq!(cursor.current(), 3);
    assert_eq!(cursor.index(), 2);
}

#[test]
fn test_remaining() {
    let list = list_of(&[1, 2, 3, 4]);
    let cursor = list.cursor(2).unwrap();
    assert_eq!(cursor.remaining().collect::<Vec<_>>(), vec![3, 4]);

    let copy = cursor.clone();
    assert_eq!(copy.index(), 2);
    assert!(core::ptr::eq(copy.list(), &list));
}

#[test]
fn test_dropping_cursor_keeps_list() {
    let mut list = list_of(&[1, 2]);
    {
        let cursor = list.cursor(1).unwrap();
        drop(cursor);
    }
    list.push_back(3).unwrap();
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}
