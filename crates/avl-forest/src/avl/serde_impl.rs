//! `serde` support: a tree is written as an ascending sequence and read back
//! by inserting every element, so duplicates in the input collapse.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use super::tree::AvlTree;

impl<T, C> Serialize for AvlTree<T, C>
where
    T: Serialize,
    C: Fn(&T, &T) -> i32,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct AvlTreeVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for AvlTreeVisitor<T>
where
    T: Deserialize<'de> + PartialOrd,
{
    type Value = AvlTree<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut tree = AvlTree::new();
        while let Some(value) = seq.next_element()? {
            tree.insert(value);
        }
        Ok(tree)
    }
}

impl<'de, T> Deserialize<'de> for AvlTree<T>
where
    T: Deserialize<'de> + PartialOrd,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(AvlTreeVisitor(PhantomData))
    }
}
