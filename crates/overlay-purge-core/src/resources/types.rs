use std::collections::BTreeMap;

/// Transformation name → public ids of the derivatives it produced.
///
/// Ids keep the order in which pages arrived. Keys iterate in name order so a
/// run's delete calls are issued in a stable sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformationMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl TransformationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append ids under `transformation`, extending any list already present.
    pub fn append<I>(&mut self, transformation: &str, public_ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut public_ids = public_ids.into_iter().peekable();
        if public_ids.peek().is_none() {
            return;
        }
        self.entries
            .entry(transformation.to_string())
            .or_default()
            .extend(public_ids);
    }

    pub fn get(&self, transformation: &str) -> Option<&[String]> {
        self.entries.get(transformation).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, ids)| (name.as_str(), ids.as_slice()))
    }

    /// Number of transformations with at least one derived resource.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all ids across transformations.
    pub fn total_resources(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
