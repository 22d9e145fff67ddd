use spellset::{AvlSet, BstSet, HashSet, Set};

fn main() {
    let mut avl = AvlSet::new();
    let mut bst = BstSet::new();
    let mut hash = HashSet::new(|x: &u32| u64::from(*x));
    for x in 1..=9 {
        avl.insert(x);
        bst.insert(x);
        hash.insert(x);
    }
    hash.insert(9);

    assert!(avl.contains(&4));
    assert!(!bst.contains(&10));
    assert_eq!(hash.len(), 9);

    println!("avl:  {} elements, height {}", avl.size(), avl.height());
    println!("bst:  {} elements, height {}", bst.size(), bst.height());
    println!(
        "hash: {} elements, {} buckets, load factor {:.2}",
        hash.size(),
        hash.capacity(),
        hash.load_factor()
    );
}
