extern crate quickcheck;
use quickcheck::quickcheck;
use std::collections::BTreeSet;
use tagged_avl::{AvlTree, Balance, InvariantError};

fn shape<T: std::fmt::Debug>(t: &AvlTree<T>) -> String {
    format!("{:?}", t)
}

#[test]
fn ascending_three_rotates_once() {
    let t = AvlTree::new().insert(1).insert(2).insert(3);
    assert_eq!(shape(&t), "AvlTree(#3, (2 = (1 = . .) (3 = . .)))");
    assert_eq!(t.height(), 2);
}

#[test]
fn zigzag_three_rotates_twice() {
    let t = AvlTree::new().insert(3).insert(1).insert(2);
    assert_eq!(shape(&t), "AvlTree(#3, (2 = (1 = . .) (3 = . .)))");
    assert_eq!(t, AvlTree::from([1, 2, 3]));
}

#[test]
fn old_versions_survive() {
    let t0 = AvlTree::new();
    let t1 = t0.insert(1);
    let t2 = t1.insert(2);
    let t3 = t2.insert(3);

    assert_eq!(shape(&t0), "AvlTree(EMPTY)");
    assert_eq!(shape(&t1), "AvlTree(#1, (1 = . .))");
    assert_eq!(shape(&t2), "AvlTree(#2, (1 + . (2 = . .)))");
    assert_eq!(shape(&t3), "AvlTree(#3, (2 = (1 = . .) (3 = . .)))");

    for t in [&t0, &t1, &t2, &t3] {
        t.check().unwrap();
    }
}

#[test]
fn duplicate_returns_same_root() {
    let t: AvlTree<_> = (0..100).collect();
    for k in [0, 17, 50, 99] {
        let t2 = t.insert(k);
        assert!(t2.ptr_eq(&t));
        assert_eq!(t2.len(), 100);
    }
}

#[test]
fn string_keys() {
    let t: AvlTree<String> =
        ["pear", "apple", "fig", "apple", "kiwi"].map(String::from).into();
    assert_eq!(t.len(), 4);
    assert_eq!(
        shape(&t),
        r#"AvlTree(#4, ("fig" + ("apple" = . .) ("pear" - ("kiwi" = . .) .)))"#
    );
    t.check().unwrap();
}

#[test]
fn thousand_ascending_keys() {
    let t: AvlTree<u32> = (0..1000).collect();
    t.check().unwrap();
    assert_eq!(t.len(), 1000);

    let bound = 1.45 * (1001f64).log2() + 2.0;
    assert!((t.height() as f64) <= bound, "height {}", t.height());
}

#[test]
fn readers_share_a_root() {
    let tree: AvlTree<u32> = (0..256).collect();
    let t = &tree;

    let grown = std::thread::scope(|s| {
        let readers: Vec<_> = (0..4)
            .map(|_| s.spawn(move || (t.check(), t.height())))
            .collect();
        let writer =
            s.spawn(move || (256..512).fold(t.clone(), |t, k| t.insert(k)));

        for r in readers {
            let (res, ht) = r.join().unwrap();
            assert_eq!(res, Ok(()));
            assert_eq!(ht, t.height());
        }
        writer.join().unwrap()
    });

    assert_eq!(t.len(), 256);
    assert_eq!(grown.len(), 512);
    grown.check().unwrap();
}

#[test]
fn error_messages() {
    let e = InvariantError::WrongTag {
        depth: 2,
        tag: Balance::Balanced,
        left: 1,
        right: 0,
    };
    assert_eq!(
        e.to_string(),
        "tag Balanced at depth 2 does not match subtree heights 1 and 0"
    );

    let e = InvariantError::LenMismatch {
        recorded: 4,
        counted: 3,
    };
    assert_eq!(e.to_string(), "tree records 4 keys but holds 3");
}

quickcheck! {
    fn qc_len_matches_btreeset(xs: Vec<u8>) -> () {
        let mut set = BTreeSet::new();
        let mut t = AvlTree::new();

        for x in xs.iter() {
            assert_eq!(set.insert(*x), t.insert_mut(*x));
            assert_eq!(set.len(), t.len());
        }
        t.check().unwrap();
    }

    fn qc_clone_is_independent(xs: Vec<i16>, ys: Vec<i16>) -> bool {
        let t: AvlTree<_> = xs.into_iter().collect();
        let before = format!("{:?}", t);
        let mut t2 = t.clone();
        t2.extend(ys);
        t2.check().is_ok() && format!("{:?}", t) == before
    }
}
