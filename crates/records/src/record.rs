use agglo_core::*;

/// One row of the dataset.
///
/// The id is unique across a dataset and seeds the label of the
/// singleton cluster the record starts out in. Attributes are kept
/// in column order; for the grocery schema that is [`ATTRIBUTES`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: Id,
    attributes: Vec<Energy>,
}

impl Record {
    pub fn new(id: Id, attributes: Vec<Energy>) -> Self {
        Self { id, attributes }
    }
    pub fn id(&self) -> Id {
        self.id
    }
    pub fn attributes(&self) -> &[Energy] {
        &self.attributes
    }
    /// number of attributes
    pub fn dimension(&self) -> usize {
        self.attributes.len()
    }
}

impl From<(Id, Vec<Energy>)> for Record {
    fn from((id, attributes): (Id, Vec<Energy>)) -> Self {
        Self::new(id, attributes)
    }
}

impl<const D: usize> From<(Id, [Energy; D])> for Record {
    fn from((id, attributes): (Id, [Energy; D])) -> Self {
        Self::new(id, attributes.to_vec())
    }
}

impl Arbitrary for Record {
    fn random() -> Self {
        Self::new(
            rand::random_range(0..Id::from(u32::MAX)),
            (0..N_ATTRIBUTES)
                .map(|_| rand::random_range(0u32..64))
                .map(Energy::from)
                .collect(),
        )
    }
}

/// display Record as id followed by its attribute values
impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:", self.id)?;
        for x in self.attributes.iter() {
            write!(f, " {}", x)?;
        }
        Ok(())
    }
}
