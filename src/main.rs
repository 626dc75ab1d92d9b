//! # Linear sets
//!
//! Prints a few set operations, mixing a [`LinearSet`] with a standard [`HashSet`].

use linset::prelude::*;
use std::collections::HashSet;

fn main() {
    let a: LinearSet<u32> = linear_set![1, 2, 4];
    let b: HashSet<u32> = [2, 3, 4].into();
    let c = a.union(&b);
    let d = a.inter(&b);

    println!("A:     {a}\nB:     {b:?}\nA ∪ B: {c}\nA ∩ B: {d}");
    println!("A ⊆ A ∪ B: {}", a.subset(&c));
    println!("A ∩ B = B ∩ A: {}", d == SetTrait::inter(&b, &a));
}
