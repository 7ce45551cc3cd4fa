use crate::error::ValidationError;
use crate::field::Field;
use crate::product::ProductDraft;

/// A draft that passed [`validate`]. Only obtainable through validation, so
/// record assembly cannot be reached with a missing required field.
#[derive(Debug, Clone, Copy)]
pub struct ValidDraft<'a>(&'a ProductDraft);

impl<'a> ValidDraft<'a> {
    pub fn draft(&self) -> &'a ProductDraft {
        self.0
    }
}

/// Check every required field and report all missing ones together.
pub fn validate(draft: &ProductDraft) -> Result<ValidDraft<'_>, ValidationError> {
    let missing: Vec<Field> = Field::REQUIRED
        .iter()
        .copied()
        .filter(|field| !is_present(draft, *field))
        .collect();
    if missing.is_empty() {
        Ok(ValidDraft(draft))
    } else {
        Err(ValidationError { missing })
    }
}

fn is_present(draft: &ProductDraft, field: Field) -> bool {
    match field {
        Field::Name => !draft.name.trim().is_empty(),
        Field::ProductType => !draft.product_types.is_empty(),
        Field::Brand => !draft.brand.trim().is_empty(),
        Field::Fabric => !draft.fabric.is_empty(),
        Field::Image => draft.image.is_some(),
        Field::Colour => draft.has_colour(),
        Field::Pattern => !draft.pattern.is_empty(),
        Field::Fit => !draft.fit.is_empty(),
        Field::GarmentClosure => !draft.garment_closure.is_empty(),
        Field::Care => !draft.care.is_empty(),
        Field::Price | Field::OccasionRegion => true,
    }
}
