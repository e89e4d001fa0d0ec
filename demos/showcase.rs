//! A simple showcase of the collections.
//!
//! The HashSet part builds a set, adds a few elements, duplicates included,
//! and prints them in iteration order, first with the borrowing iterator then
//! with an explicit cursor.
//!
//! The ArrayList part builds `[1, 2, 4, 5]`, inserts the missing 3, and prints
//! the list reversed.

extern crate buckets;

use buckets::arraylist::ArrayList;
use buckets::failure::Result;
use buckets::hashset::HashSet;

fn print<'a, I>(label: &str, elements: I)
where
    I: IntoIterator<Item = &'a i32>,
{
    let elements: Vec<_> = elements.into_iter().map(|e| e.to_string()).collect();
    println!("{:>10}: {}", label, elements.join(" "));
}

fn hashset() -> Result<()> {
    let mut set: HashSet<i32> = HashSet::new();

    for value in [1, 2, 2, 3] {
        let added = set.try_add(value)?;
        println!("{:>10}: {} -> {}", "add", value, added);
    }

    println!("{:>10}: {} (capacity {})", "count", set.len(), set.capacity());
    print("iter", &set);

    let mut cursor = set.cursor();
    let mut walked = Vec::new();

    while cursor.advance(&set)? {
        walked.push(*cursor.current(&set)?);
    }

    print("cursor", &walked);

    set.try_union_with(4..20)?;
    println!("{:>10}: {} (capacity {})", "grown", set.len(), set.capacity());

    Ok(())
}

fn arraylist() -> Result<()> {
    let mut list = ArrayList::new();

    for value in [1, 2, 4, 5] {
        list.try_add(value)?;
    }

    list.insert(2, 3)?;
    print("inserted", &list);

    list.reverse();
    print("reversed", &list);

    Ok(())
}

fn main() {
    if let Err(failure) = hashset().and_then(|_| arraylist()) {
        eprintln!("showcase failed: {}", failure);
        std::process::exit(1);
    }
}
