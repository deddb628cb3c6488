use super::encoder::{CHAIN_ALPHABET, DEFAULT_CHAIN_BASE, int_to_chain};
use super::error::ChainIdError;
use pdbtbx::PDB;
use std::collections::HashMap;
use tracing::trace;

/// Anything carrying a chain identifier that compaction may rewrite.
pub trait ChainLabel {
    fn chain_id(&self) -> &str;

    /// Replaces the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ChainIdError::Rejected`] if the implementor refuses `id`.
    fn set_chain_id(&mut self, id: &str) -> Result<(), ChainIdError>;
}

impl ChainLabel for pdbtbx::Chain {
    fn chain_id(&self) -> &str {
        self.id()
    }

    fn set_chain_id(&mut self, id: &str) -> Result<(), ChainIdError> {
        if self.set_id(id) {
            Ok(())
        } else {
            Err(ChainIdError::Rejected { id: id.to_string() })
        }
    }
}

/// Mapping from compacted chain identifier to the original identifier.
///
/// Entries keep insertion order: chains that were already one character long
/// come first, followed by renamed chains in the order they were visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ChainMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Original identifier of the chain now called `new_id`.
    pub fn get(&self, new_id: &str) -> Option<&str> {
        self.index
            .get(new_id)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, new_id: &str) -> bool {
        self.index.contains_key(new_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(new, original)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(new, old)| (new.as_str(), old.as_str()))
    }

    /// Only the entries whose identifier actually changed.
    pub fn renamed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(new, old)| new != old)
    }

    fn claim(&mut self, new_id: String, original: String) {
        if self.index.contains_key(&new_id) {
            return;
        }
        self.index.insert(new_id.clone(), self.entries.len());
        self.entries.push((new_id, original));
    }
}

/// Renames every chain to a single-character identifier.
///
/// Chains whose identifier is already one character long are left alone.
/// Every other chain takes the first character of its identifier if no chain
/// claimed it before, and otherwise the first free identifier from
/// [`int_to_chain`] over the full 62-symbol alphabet. Chains are visited in
/// iteration order, so the result is fully determined by that order and the
/// initial identifiers. An identifier that occurs more than once (the same
/// chain in several models) is mapped to the same new identifier each time.
///
/// # Errors
///
/// Returns [`ChainIdError::OutOfChains`] once all 62 single-character
/// identifiers are taken, or whatever [`ChainLabel::set_chain_id`] reports.
pub fn rename_chains<'a, C, I>(chains: I) -> Result<ChainMap, ChainIdError>
where
    C: ChainLabel + 'a,
    I: IntoIterator<Item = &'a mut C>,
{
    let mut chains: Vec<&'a mut C> = chains.into_iter().collect();
    let mut map = ChainMap::new();

    for chain in &chains {
        let id = chain.chain_id();
        if is_compact(id) {
            map.claim(id.to_string(), id.to_string());
        }
    }

    let mut assigned: HashMap<String, String> = HashMap::new();
    let mut cursor = 0;

    for chain in chains.iter_mut() {
        let original = chain.chain_id().to_string();
        if is_compact(&original) {
            continue;
        }

        let new_id = match assigned.get(&original) {
            Some(new_id) => new_id.clone(),
            None => {
                let new_id = match original.chars().next().map(String::from) {
                    Some(first) if !map.contains(&first) => first,
                    _ => next_free_id(&map, &mut cursor)?,
                };
                trace!(original = %original, new = %new_id, "Assigned compact chain identifier.");
                map.claim(new_id.clone(), original.clone());
                assigned.insert(original, new_id.clone());
                new_id
            }
        };

        chain.set_chain_id(&new_id)?;
    }

    Ok(map)
}

/// Compacts the chain identifiers of every model in `pdb`.
///
/// # Errors
///
/// See [`rename_chains`].
pub fn compact_structure(pdb: &mut PDB) -> Result<ChainMap, ChainIdError> {
    rename_chains(pdb.chains_mut())
}

fn is_compact(id: &str) -> bool {
    id.chars().count() == 1
}

fn next_free_id(map: &ChainMap, cursor: &mut i64) -> Result<String, ChainIdError> {
    while *cursor < DEFAULT_CHAIN_BASE {
        let candidate = int_to_chain(*cursor, DEFAULT_CHAIN_BASE)?;
        if !map.contains(&candidate) {
            return Ok(candidate);
        }
        *cursor += 1;
    }
    Err(ChainIdError::OutOfChains {
        available: CHAIN_ALPHABET.len(),
    })
}
