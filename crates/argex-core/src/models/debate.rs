//! The debate record: keyed arguments plus keyed outgoing relations.
//!
//! On the wire both collections are JSON objects keyed by argument id. They are
//! held here as vectors so declaration order survives a round trip and a
//! repeated edge key reaches graph construction instead of being silently
//! collapsed by a map. The workspace builds `serde_json` with
//! `preserve_order`, so the order also survives a pass through `Value`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::argument::Argument;
use super::relation::Relation;
use crate::votes::aggregate_votes;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Debate {
    #[serde(rename = "nodes", default, with = "keyed")]
    pub arguments: Vec<Argument>,
    #[serde(rename = "edges", default, with = "keyed")]
    pub relations: Vec<Relation>,
}

impl Debate {
    pub fn new(arguments: Vec<Argument>, relations: Vec<Relation>) -> Self {
        Self {
            arguments,
            relations,
        }
    }

    pub fn argument(&self, id: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.id == id)
    }

    pub fn argument_mut(&mut self, id: &str) -> Option<&mut Argument> {
        self.arguments.iter_mut().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.argument(id).is_some()
    }

    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Relations whose successor is `id`, in declaration order.
    pub fn relations_into<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Relation> + 'a {
        self.relations.iter().filter(move |r| r.successor_id == id)
    }

    /// Fill every missing initial weight from the argument's vote tally
    /// (no tally counts as no votes). Returns how many were filled.
    pub fn derive_initial_weights(&mut self, neutral: f64) -> usize {
        let mut filled = 0;
        for argument in self.arguments.iter_mut().filter(|a| a.initial_weight.is_none()) {
            let weight = argument
                .votes
                .as_ref()
                .map_or(neutral, |votes| aggregate_votes(votes, neutral));
            argument.initial_weight = Some(weight);
            filled += 1;
        }
        filled
    }

    /// Write final weights back onto the record. Unknown ids are ignored.
    pub fn set_final_weights<'a, I>(&mut self, weights: I)
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        for (id, weight) in weights {
            if let Some(argument) = self.argument_mut(id) {
                argument.final_weight = Some(weight);
            }
        }
    }

    /// The sub-record induced by `ids`: the listed arguments in declaration
    /// order and every relation with both endpoints inside.
    pub fn restricted_to(&self, ids: &HashSet<&str>) -> Debate {
        let arguments = self
            .arguments
            .iter()
            .filter(|a| ids.contains(a.id.as_str()))
            .cloned()
            .collect();
        let relations = self
            .relations
            .iter()
            .filter(|r| ids.contains(r.source_id.as_str()) && ids.contains(r.successor_id.as_str()))
            .cloned()
            .collect();
        Debate::new(arguments, relations)
    }
}

/// Items stored under their id in a JSON object.
pub trait Keyed {
    fn key(&self) -> &str;
    fn set_key(&mut self, key: String);
}

impl Keyed for Argument {
    fn key(&self) -> &str {
        &self.id
    }

    fn set_key(&mut self, key: String) {
        self.id = key;
    }
}

impl Keyed for Relation {
    fn key(&self) -> &str {
        &self.source_id
    }

    fn set_key(&mut self, key: String) {
        self.source_id = key;
    }
}

/// Order-preserving (de)serialization of `Vec<T>` as a keyed JSON object.
mod keyed {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Keyed;

    #[allow(clippy::ptr_arg)]
    pub fn serialize<T, S>(items: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize + Keyed,
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(items.len()))?;
        for item in items {
            map.serialize_entry(item.key(), item)?;
        }
        map.end()
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        T: Deserialize<'de> + Keyed,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(KeyedVisitor(PhantomData))
    }

    struct KeyedVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for KeyedVisitor<T>
    where
        T: Deserialize<'de> + Keyed,
    {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object keyed by argument id")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, mut item)) = access.next_entry::<String, T>()? {
                item.set_key(key);
                items.push(item);
            }
            Ok(items)
        }
    }
}
