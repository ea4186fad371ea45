// used for the lookup tables, hashed with seahash
use core::hash::{BuildHasher, BuildHasherDefault};
use seahash::SeaHasher;
use std::borrow::Borrow;
use std::collections::hash_map::{Entry, RandomState};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::{debug, warn};

// our own stuff that we need
use crate::error::Result;
use crate::metadata::{Declaration, Enumeration};
use crate::representation::{Integral, Representation};

pub type IndexHasher = BuildHasherDefault<SeaHasher>;

/// Case folding used wherever a comparison ignores case.
///
/// Folds to upper case, where both lower-case sigma forms meet.
pub(crate) fn fold(text: &str) -> String {
    text.to_uppercase()
}

// ------------- Member -------------
/// A declared constant with its description already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<U: Integral> {
    name: &'static str,
    value: U,
    description: &'static str,
    explicit: bool,
}

impl<U: Integral> Member<U> {
    pub fn new(declaration: Declaration<U>) -> Self {
        Self {
            name: declaration.name(),
            value: declaration.value(),
            description: declaration.description().unwrap_or(declaration.name()),
            explicit: declaration.description().is_some(),
        }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn value(&self) -> U {
        self.value
    }
    pub fn description(&self) -> &'static str {
        self.description
    }
    /// False when the description only fell back to the name.
    pub fn has_description(&self) -> bool {
        self.explicit
    }
}

// ------------- Lookups -------------
/// A key to many values, where the values keep their insertion order.
#[derive(Debug)]
pub struct Lookup<K, V, H = RandomState> {
    index: HashMap<K, Vec<V>, H>,
}
impl<K: Eq + Hash, V, H: BuildHasher + Default> Lookup<K, V, H> {
    pub fn new() -> Self {
        Self {
            index: HashMap::<K, Vec<V>, H>::default(),
        }
    }
    pub fn insert(&mut self, key: K, value: V) {
        self.index.entry(key).or_default().push(value);
    }
    pub fn lookup<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
    pub fn len(&self) -> usize {
        self.index.len()
    }
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
impl<K: Eq + Hash, V, H: BuildHasher + Default> Default for Lookup<K, V, H> {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- LookupIndex -------------
/// The read-only tables for one enumeration type.
///
/// Positions stored in the maps refer to `members`, which is kept in
/// declaration order. Where several constants share a value, `by_value` points
/// at the first one declared.
#[derive(Debug)]
pub struct LookupIndex<E: Enumeration> {
    representation: Representation,
    members: Vec<Member<E::Underlying>>,
    by_name: HashMap<&'static str, usize, IndexHasher>,
    by_folded_name: HashMap<String, usize, IndexHasher>,
    by_value: HashMap<E::Underlying, usize, IndexHasher>,
    by_description: Lookup<&'static str, usize, IndexHasher>,
    // distinct non-zero values, largest bit pattern first
    flags: Vec<usize>,
    enumeration: PhantomData<fn() -> E>,
}

impl<E: Enumeration> LookupIndex<E> {
    /// Builds every table in a single pass over the provider's declarations.
    pub fn load() -> Self {
        let mut index = Self {
            representation: Representation::of::<E>(),
            members: Vec::new(),
            by_name: HashMap::default(),
            by_folded_name: HashMap::default(),
            by_value: HashMap::default(),
            by_description: Lookup::new(),
            flags: Vec::new(),
            enumeration: PhantomData,
        };
        for declaration in E::declarations() {
            index.keep(declaration);
        }
        let members = &index.members;
        index
            .flags
            .sort_by_key(|&position| std::cmp::Reverse(members[position].value().to_bits()));
        debug!(
            enumeration = E::NAME,
            representation = %index.representation,
            constants = index.members.len(),
            "built lookup index"
        );
        index
    }
    fn keep(&mut self, declaration: Declaration<E::Underlying>) {
        let position = self.members.len();
        match self.by_name.entry(declaration.name()) {
            Entry::Vacant(e) => {
                e.insert(position);
            }
            Entry::Occupied(_e) => {
                warn!(
                    enumeration = E::NAME,
                    name = declaration.name(),
                    "duplicate constant name ignored"
                );
                return;
            }
        };
        let member = Member::new(declaration);
        self.by_folded_name
            .entry(fold(member.name()))
            .or_insert(position);
        if let Entry::Vacant(e) = self.by_value.entry(member.value()) {
            e.insert(position);
            if member.value() != E::Underlying::ZERO {
                self.flags.push(position);
            }
        }
        self.by_description.insert(member.description(), position);
        self.members.push(member);
    }

    pub fn enumeration(&self) -> &'static str {
        E::NAME
    }
    pub fn representation(&self) -> Representation {
        self.representation
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    pub fn members(&self) -> &[Member<E::Underlying>] {
        &self.members
    }
    pub fn names(&self) -> Vec<&'static str> {
        self.members.iter().map(Member::name).collect()
    }
    pub fn values(&self) -> Vec<E::Underlying> {
        self.members.iter().map(Member::value).collect()
    }
    pub fn constants(&self) -> Vec<E> {
        self.members
            .iter()
            .map(|member| E::from_underlying(member.value()))
            .collect()
    }

    /// Overflow-checked conversion of any integral input into this type's domain.
    pub fn convert<I: Integral>(&self, input: I) -> Result<E::Underlying> {
        Representation::narrow(input).map_err(|overflow| overflow.within(E::NAME))
    }
    pub fn contains_value(&self, value: E::Underlying) -> bool {
        self.by_value.contains_key(&value)
    }
    /// Exact-case only.
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }
    /// The first-declared constant holding `value`.
    pub fn member(&self, value: E::Underlying) -> Option<&Member<E::Underlying>> {
        self.by_value
            .get(&value)
            .map(|&position| &self.members[position])
    }
    pub fn member_named(&self, name: &str, ignore_case: bool) -> Option<&Member<E::Underlying>> {
        let position = if ignore_case {
            self.by_folded_name.get(&fold(name))
        } else {
            self.by_name.get(name)
        };
        position.map(|&position| &self.members[position])
    }
    pub fn name(&self, value: E::Underlying) -> Option<&'static str> {
        self.member(value).map(Member::name)
    }
    pub(crate) fn flags(&self) -> impl Iterator<Item = &Member<E::Underlying>> {
        self.flags.iter().map(|&position| &self.members[position])
    }
    pub(crate) fn by_description(&self) -> &Lookup<&'static str, usize, IndexHasher> {
        &self.by_description
    }
}
