#![cfg(test)]

use super::*;
use crate::config::Config;
use crate::linked::create;
use crate::traits::cursor::sealed::Sealed;
use crate::traits::{Backward, Edit, Forward, Jump, Query, Seed};
use crate::util::error::Unsupported;
use crate::util::panic::assert_panics;

fn list(items: &[i32]) -> Cursor<i32> {
    create(items.to_vec(), Config::default())
}

fn empty() -> Cursor<i32> {
    create(Vec::new(), Config::default())
}

#[test]
fn test_boundaries() {
    let a = list(&[1, 2, 3, 4, 5]);

    assert!(a.is_start(), "A new cursor should start on the first element.");
    assert!(a.end().is_end());
    assert!(empty().is_start(), "The empty marker is the start of an empty list.");
    assert!(empty().end().is_end(), "The empty marker is the end of an empty list.");
}

#[test]
fn test_empty_list() {
    assert!(empty().is_empty());
    assert!(Cursor::<i32>::default().is_empty());
    assert_eq!(empty().size(), 0);
    assert_eq!(empty().data(), Datum::Empty);
    assert!(empty().clear().is_empty());
    assert!(list(&[1, 2, 3, 4, 5]).clear().is_empty());
    assert!(!list(&[1, 2, 3]).is_empty());
}

#[test]
fn test_empty_list_gating() {
    let a = empty();

    assert_eq!(a.kind(), Kind::Empty);
    assert_eq!(
        a.try_insert_before([4, 5, 6]),
        Err(Unsupported {
            operation: Operation::InsertBefore,
            kind: Kind::Empty
        }),
        "There's nothing to insert before in an empty list."
    );
    assert!(a.try_insert_after([4]).is_err());
    assert!(a.try_remove_current().is_err());
    assert!(a.try_remove_before().is_err());
    assert!(a.try_remove_after().is_err());
    assert!(a.try_shift_left().is_err());
    assert!(a.try_shift_right().is_err());

    assert!(a.next().previous().start().end().is_empty(), "Empty lists can still be navigated.");
    assert_eq!(a.insert_start([1, 2, 3]).end().data(), Datum::Value(&3));
    assert_eq!(a.insert_end([4]).data(), Datum::Value(&4));

    assert_panics!({ empty().remove_current() }, "remove_current");
}

#[test]
fn test_empty_single_link_is_navigable() {
    let a = create(Vec::<i32>::new(), Config::new().single());

    assert_eq!(a.kind(), Kind::Empty, "Emptiness takes priority over the link type.");
    assert!(a.supports(Operation::Previous));
    assert!(a.supports(Operation::Start));
}

#[test]
fn test_single_link_omits_backwards_navigation() {
    let a = create([1, 2, 3], Config::new().single());

    assert_eq!(a.kind(), Kind::SingleLink);
    assert!(!a.supports(Operation::Previous));
    assert!(!a.supports(Operation::Start));
    assert!(!a.supports(Operation::End));

    let descendants = [
        a.next(),
        a.next().next().next(),
        a.insert_before([0]),
        a.insert_end([4, 5]),
        a.next().remove_current(),
        a.next().shift_left(),
        a.remove_after(),
    ];
    for cursor in &descendants {
        assert!(
            !cursor.capabilities().contains(Capabilities::PREVIOUS)
                && !cursor.capabilities().contains(Capabilities::JUMP),
            "Every descendant of a singly linked cursor should stay singly linked."
        );
    }

    assert_panics!({ create([1, 2, 3], Config::new().single()).previous() }, "previous");
    assert_eq!(a.next().next().next().data(), Datum::Value(&1), "Circular lists still wrap.");
}

#[test]
fn test_finite_lists() {
    let a = create([1, 2, 3, 4, 5], Config::new().finite(true));
    let b = a.next().next().next().next();

    assert_eq!(a.kind(), Kind::BoundedStart);
    assert!(a.try_previous().is_err(), "The first element of a finite list has no previous.");
    assert_eq!(a.next().kind(), Kind::Full);

    assert_eq!(b.kind(), Kind::BoundedEnd);
    assert_eq!(b.data(), Datum::Value(&5));
    assert!(b.try_next().is_err(), "The last element of a finite list has no next.");
    assert_eq!(a.end(), b, "Jumping and walking to the end should agree.");
    assert_panics!({ create([1, 2, 3], Config::new().finite(true)).end().next() }, "bounded end");
}

#[test]
fn test_finite_single_element() {
    let a = create([7], Config::new().finite(true));

    assert_eq!(a.kind(), Kind::BoundedStart, "The start rule is checked before the end rule.");
    assert_eq!(a.next(), a, "Moving forwards off the only element should stay put.");
}

#[test]
fn test_finite_single_link_halts() {
    let a = create([1, 2, 3], Config::new().single().finite(true));

    assert_eq!(a.next().next().next().data(), Datum::Value(&3));
    assert_eq!(a.next().next().next().next().data(), Datum::Value(&3));
}

#[test]
fn test_traversal() {
    let a = list(&[1, 2, 3, 4, 5]);
    let b = a.next();
    let c = b.next();
    let d = c.next();
    let e = d.previous();
    let f = e.next().next().next();
    let g = f.previous().previous();

    assert_eq!(a.data(), Datum::Value(&1));
    assert_eq!(b.data(), Datum::Value(&2));
    assert_eq!(c.data(), Datum::Value(&3));
    assert_eq!(d.data(), Datum::Value(&4));
    assert_eq!(e.data(), Datum::Value(&3));
    assert_eq!(f.data(), Datum::Value(&1));
    assert_eq!(g.data(), Datum::Value(&4));

    assert_eq!(a.end().data(), Datum::Value(&5));
    assert_eq!(a.end().start().data(), Datum::Value(&1));
    assert_eq!(a.end().next().data(), Datum::Value(&1), "Circular lists wrap forwards.");
}

#[test]
fn test_round_trip() {
    for n in 1..=6 {
        let items: Vec<i32> = (0..n).collect();
        for start in 0..n {
            let mut cursor = list(&items);
            for _ in 0..start {
                cursor = cursor.next();
            }

            let origin = cursor.clone();
            for _ in 0..n {
                cursor = cursor.next();
            }
            assert_eq!(cursor, origin, "{n} steps forward should come back around.");
        }
    }
}

#[test]
fn test_insert_start() {
    let a = list(&[4]);
    let b = a.insert_start([3]);
    let c = b.insert_start([1, 2]);

    assert_eq!(a.data(), Datum::Value(&4));
    assert_eq!(b.data(), Datum::Value(&4));
    assert_eq!(c.data(), Datum::Value(&4));
    assert_eq!(b.previous().data(), Datum::Value(&3));
    assert_eq!(c.previous().previous().data(), Datum::Value(&2));
    assert_eq!(c.previous().previous().previous().data(), Datum::Value(&1));
}

#[test]
fn test_insert_end() {
    let a = list(&[1]);
    let b = a.insert_end([2]);
    let c = b.insert_end([3, 4]);

    assert_eq!(a.data(), Datum::Value(&1));
    assert_eq!(b.next().data(), Datum::Value(&2));
    assert_eq!(c.next().next().data(), Datum::Value(&3));
    assert_eq!(c.next().next().next().data(), Datum::Value(&4));
}

#[test]
fn test_insert_before() {
    let a = list(&[1, 2, 6, 7, 8]);
    let b = a.next().next();
    let c = b.insert_before([5]).previous();
    let d = c.insert_before([3, 4]);

    assert_eq!(a.data(), Datum::Value(&1));
    assert_eq!(b.data(), Datum::Value(&6));
    assert_eq!(c.data(), Datum::Value(&5));
    assert_eq!(c.previous().data(), Datum::Value(&2));
    assert_eq!(c.previous().previous().previous().data(), Datum::Value(&8));
    assert_eq!(d.size(), 8);
    assert_eq!(d.to_vec(), [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_insert_after() {
    let a = list(&[1, 2, 6, 7, 8]);
    let b = a.next();
    let c = b.insert_after([3]);
    let d = c.insert_after([4, 5]);

    assert_eq!(b.data(), Datum::Value(&2));
    assert_eq!(c.data(), Datum::Value(&2));
    assert_eq!(c.previous().data(), Datum::Value(&1));
    assert_eq!(c.previous().previous().data(), Datum::Value(&8));
    assert_eq!(d.size(), 8);
    assert_eq!(d.to_vec(), [1, 2, 4, 5, 3, 6, 7, 8]);
}

#[test]
fn test_remove_current() {
    let a = list(&[1, 2, 3, 4, 5]);
    let b = a.remove_current();
    let c = b.next().next().remove_current();

    assert_eq!(a.data(), Datum::Value(&1));
    assert_eq!(a.size(), 5);
    assert_eq!(b.data(), Datum::Value(&2));
    assert_eq!(b.size(), 4);
    assert_eq!(c.data(), Datum::Value(&5));
    assert_eq!(c.size(), 3);
    assert!(list(&[1]).remove_current().is_empty());
}

#[test]
fn test_remove_before() {
    let a = list(&[1, 2, 3, 4, 5]);
    let b = a.remove_before();
    let c = a.next().next().remove_before();

    assert_eq!(b, a, "Removing before the start should leave the cursor as it was.");
    assert_eq!(b.data(), Datum::Value(&1));
    assert_eq!(b.size(), 5);
    assert_eq!(c.data(), Datum::Value(&3));
    assert_eq!(c.size(), 4);
}

#[test]
fn test_remove_after() {
    let a = list(&[1, 2, 3, 4, 5]);
    let b = a.remove_after();
    let c = b.end().remove_after();

    assert_eq!(a.data(), Datum::Value(&1));
    assert_eq!(b.data(), Datum::Value(&1));
    assert_eq!(b.size(), 4);
    assert_eq!(c.data(), Datum::Value(&5));
    assert_eq!(c.size(), 4);
}

#[test]
fn test_shifts() {
    let a = list(&[1, 2, 3]);

    assert_eq!(a.shift_left().data(), Datum::Value(&1), "The first element can't move left.");
    assert_eq!(a.shift_left().next().data(), Datum::Value(&2));
    assert_eq!(a.next().shift_left().data(), Datum::Value(&2));
    assert_eq!(a.next().shift_left().next().data(), Datum::Value(&1));
    assert_eq!(a.end().shift_right().data(), Datum::Value(&3), "The last element can't move right.");
    assert_eq!(a.end().shift_right().previous().data(), Datum::Value(&2));

    let b = list(&[1, 2, 3, 4, 5]).next().next();
    assert_eq!(b.shift_left().data(), Datum::Value(&3));
    assert_eq!(b.shift_left().next().data(), Datum::Value(&2));
    assert_eq!(b.start().shift_right().data(), Datum::Value(&1));
    assert_eq!(b.start().shift_right().next().data(), Datum::Value(&3));
}

#[test]
fn test_sizes() {
    let cursors = [
        empty(),
        list(&[1]),
        list(&[1, 2, 3]).next(),
        list(&[1, 2, 3]).end(),
        create([1, 2], Config::new().single()),
    ];

    for cursor in &cursors {
        assert_eq!(cursor.insert_end([9]).size(), cursor.size() + 1);
        let removed = cursor.try_remove_current().unwrap_or_else(|_| cursor.clone());
        assert_eq!(removed.size(), cursor.size().saturating_sub(1));
    }
}

#[test]
fn test_combined() {
    let a = list(&[1, 2, 3, 4, 5]);
    let b = a.previous();
    let c = b.start().next();
    let d = c.remove_after();
    let e = d.next();
    let f = e.insert_before([3]).previous();
    let g = f.remove_current();
    let h = g.insert_before([3]).start();
    let i = h.insert_end([6, 7, 8]).end();
    let j = i.next().next();
    let k = j.clear().insert_start([1, 2, 3]).end();

    assert_eq!(a.data(), Datum::Value(&1));
    assert_eq!(b.data(), Datum::Value(&5));
    assert_eq!(c.data(), Datum::Value(&2));
    assert_eq!(d.data(), Datum::Value(&2));
    assert_eq!(e.data(), Datum::Value(&4));
    assert_eq!(f.data(), Datum::Value(&3));
    assert_eq!(g.data(), Datum::Value(&4));
    assert_eq!(h.data(), Datum::Value(&1));
    assert_eq!(i.data(), Datum::Value(&8));
    assert_eq!(j.data(), Datum::Value(&2));
    assert_eq!(k.data(), Datum::Value(&3));
    assert_eq!(a.to_vec(), [1, 2, 3, 4, 5], "No edit should have touched the first cursor.");
}

#[test]
fn test_typed_variants() {
    let full: FullCursor<i32> = list(&[1, 2, 3])
        .try_into()
        .expect("A circular doubly linked list should be full.");

    assert_eq!(Forward::next(&full).data(), Datum::Value(&2));
    assert_eq!(Backward::previous(&full).data(), Datum::Value(&3));
    assert_eq!(Jump::end(&full).data(), Datum::Value(&3));
    assert_eq!(Edit::shift_right(&full).to_vec(), [2, 1, 3]);
    assert_eq!(Seed::clear(&full).kind(), Kind::Empty);

    let wrapped: Cursor<i32> = full.clone().into();
    assert_eq!(wrapped.data(), full.data());

    match create([1, 2, 3], Config::new().finite(true)).end() {
        Cursor::BoundedEnd(bounded) => {
            assert_eq!(bounded.previous().data(), Datum::Value(&2));
            assert_eq!(bounded.remove_current().data(), Datum::Value(&2));
        },
        other => panic!("Expected a bounded end cursor, found {other:?}."),
    }

    assert!(
        SingleLinkCursor::try_from(list(&[1])).is_err(),
        "Conversions into the wrong variant should fail."
    );
}

#[test]
fn test_iteration() {
    let a = list(&[1, 2, 3]).next();

    assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3], "Iteration starts at the front.");
    assert_eq!(a.index(), Some(1));
    assert_eq!(empty().iter().count(), 0);
    assert_eq!((1..=3).collect::<Cursor<_>>(), list(&[1, 2, 3]));
}

#[test]
fn test_shared_between_threads() {
    let a = list(&[1, 2, 3, 4]);

    std::thread::scope(|scope| {
        let first = scope.spawn(|| a.next().data().value().copied());
        let last = scope.spawn(|| a.end().data().value().copied());
        assert_eq!(first.join().ok().flatten(), Some(2));
        assert_eq!(last.join().ok().flatten(), Some(4));
    });
    assert_eq!(a.data(), Datum::Value(&1));
}

#[test]
fn test_kind_capabilities() {
    assert_eq!(Capabilities::ALL, Capabilities::all(), "ALL should name every flag.");
    assert_eq!(Kind::Full.capabilities(), Capabilities::all());
    assert_eq!(Kind::Empty.capabilities(), Capabilities::NAVIGATION);
    assert!(
        !Kind::Empty.capabilities().intersects(
            Capabilities::REMOVE | Capabilities::RELATIVE_INSERT | Capabilities::SHIFT
        ),
        "An empty list has nothing to edit relative to."
    );
    assert_eq!(
        Kind::SingleLink.capabilities(),
        Capabilities::NEXT | Capabilities::REMOVE | Capabilities::RELATIVE_INSERT | Capabilities::SHIFT
    );
    assert_eq!(
        Kind::BoundedStart.capabilities() - Kind::BoundedEnd.capabilities(),
        Capabilities::NEXT,
        "The bounded kinds should differ only in their direction."
    );
    assert!(Kind::BoundedEnd.capabilities().contains(Operation::Previous.requires()));
    assert!(!Kind::SingleLink.capabilities().contains(Operation::End.requires()));
    assert!(Capabilities::empty().is_empty());
}

#[test]
fn test_kind_matches_variant() {
    let single = Config::new().single();
    let finite = Config::new().finite(true);
    let cursors = [
        empty(),
        list(&[1, 2, 3]),
        list(&[1, 2, 3]).end(),
        create([1, 2, 3], single),
        create(Vec::<i32>::new(), single),
        create([1], finite),
        create([1, 2, 3], finite).next(),
        create([1, 2, 3], finite).end(),
        create([1, 2, 3], finite).end().remove_current().remove_current(),
    ];

    for cursor in &cursors {
        assert_eq!(
            cursor.kind(),
            Kind::classify(cursor.raw()),
            "The reported kind should match the state of {cursor:?}."
        );
        let expected = match cursor {
            Cursor::Empty(_) => Kind::Empty,
            Cursor::SingleLink(_) => Kind::SingleLink,
            Cursor::BoundedStart(_) => Kind::BoundedStart,
            Cursor::BoundedEnd(_) => Kind::BoundedEnd,
            Cursor::Full(_) => Kind::Full,
        };
        assert_eq!(cursor.kind(), expected, "The reported kind should match the variant.");
    }

    let bounded: BoundedEndCursor<i32> = create([1, 2], finite)
        .end()
        .try_into()
        .expect("The last element of a finite list should be a bounded end.");
    assert_eq!(bounded.kind(), Kind::BoundedEnd);
    assert_eq!(bounded.capabilities(), Kind::BoundedEnd.capabilities());
    assert_eq!(EmptyCursor::<i32>::try_from(empty()).ok().map(|c| c.kind()), Some(Kind::Empty));
}
