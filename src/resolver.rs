//! Name or predicate lookup over any normalized table.

use schema::{MoveRecord, SpeciesRecord};

use crate::errors::{EntityKind, GameMasterError, GameMasterResult};

/// A table entity addressable by name.
pub trait Named {
    const KIND: EntityKind;

    fn name(&self) -> &str;
}

impl Named for SpeciesRecord {
    const KIND: EntityKind = EntityKind::Species;

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for MoveRecord {
    const KIND: EntityKind = EntityKind::Move;

    fn name(&self) -> &str {
        &self.name
    }
}

/// What to match an entity against.
pub enum Criteria<'a, T> {
    /// Case-insensitive, whitespace-trimmed exact match on the entity name.
    Name(&'a str),
    Predicate(&'a dyn Fn(&T) -> bool),
}

impl<'a, T> From<&'a str> for Criteria<'a, T> {
    fn from(name: &'a str) -> Self {
        Criteria::Name(name)
    }
}

impl<'a, T: Named> Criteria<'a, T> {
    pub fn matches(&self, entity: &T) -> bool {
        match self {
            Criteria::Name(name) => entity.name().trim().to_lowercase() == name.trim().to_lowercase(),
            Criteria::Predicate(predicate) => predicate(entity),
        }
    }

    fn describe(&self) -> String {
        match self {
            Criteria::Name(name) => name.to_string(),
            Criteria::Predicate(_) => "<predicate>".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    First,
    All,
}

#[derive(Debug, PartialEq)]
pub enum SearchResult<'a, T> {
    One(&'a T),
    Many(Vec<&'a T>),
}

/// Search `table` in either mode. Only `First` can fail.
pub fn find<'a, T: Named>(
    table: &'a [T],
    criteria: Criteria<'_, T>,
    mode: SearchMode,
) -> GameMasterResult<SearchResult<'a, T>> {
    match mode {
        SearchMode::First => find_first(table, criteria).map(SearchResult::One),
        SearchMode::All => Ok(SearchResult::Many(find_all(table, criteria))),
    }
}

pub fn find_first<'a, T: Named>(table: &'a [T], criteria: Criteria<'_, T>) -> GameMasterResult<&'a T> {
    table
        .iter()
        .find(|entity| criteria.matches(entity))
        .ok_or_else(|| GameMasterError::not_found(T::KIND, criteria.describe()))
}

/// All matches in table order; possibly empty.
pub fn find_all<'a, T: Named>(table: &'a [T], criteria: Criteria<'_, T>) -> Vec<&'a T> {
    table.iter().filter(|entity| criteria.matches(entity)).collect()
}
