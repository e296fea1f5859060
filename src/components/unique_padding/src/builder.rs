use crate::{PaddingOwner, UniquePaddingElement};
use data_units::ByteUnits;

/// Collects unique padding bytes, merging each byte into the previous run
/// when it directly follows it and has the same owner.
#[derive(Clone, Debug, Default)]
pub struct UniquePaddingBuilder {
    elements: Vec<UniquePaddingElement>,
}

impl UniquePaddingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: ByteUnits, owner: PaddingOwner) {
        if let Some(previous) = self.elements.last_mut() {
            if previous.owner == owner && previous.end() == index {
                previous.span_length += ByteUnits::ONE;
                return;
            }
        }

        self.elements
            .push(UniquePaddingElement::new(index, ByteUnits::ONE, owner));
    }

    pub fn extend(&mut self, indexes: &[ByteUnits], owner: PaddingOwner) {
        for index in indexes {
            self.push(*index, owner);
        }
    }

    pub fn elements(&self) -> &[UniquePaddingElement] {
        &self.elements
    }

    pub fn build(self) -> Vec<UniquePaddingElement> {
        self.elements
    }
}
