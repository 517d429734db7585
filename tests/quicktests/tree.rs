use balanced_bst::Tree;

use std::collections::BTreeSet;

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            // Repeats come back as errors and are otherwise ignored.
            let _ = tree.insert(*x);
        }

        xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = Tree::from_values(xs.iter().copied());
        let added: BTreeSet<_> = xs.into_iter().collect();

        nots.iter()
            .filter(|x| !added.contains(*x))
            .all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            let _ = tree.insert(*x);
        }
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn duplicate_insert_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
        let mut tree = Tree::from_values(xs);
        let _ = tree.insert(x);
        let before: Vec<i8> = tree.iter().copied().collect();

        tree.insert(x).is_err()
            && tree.len() == before.len()
            && tree.iter().copied().eq(before)
    }
}

quickcheck::quickcheck! {
    fn rebalance_keeps_values(xs: Vec<i16>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            let _ = tree.insert(*x);
        }
        let before: Vec<i16> = tree.iter().copied().collect();

        tree.rebalance();
        tree.balanced()
            && tree.iter().copied().eq(before.iter().copied())
            && before.windows(2).all(|pair| pair[0] < pair[1])
    }
}
