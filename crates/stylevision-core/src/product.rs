use std::fmt;

use serde::{Deserialize, Serialize};

use crate::description::GenerationOutcome;
use crate::error::{PriceFormatError, StylevisionError};
use crate::field::Field;
use crate::product_id::ProductId;
use crate::vocabulary::{COLOUR_PLACEHOLDER, PATTERN_PLACEHOLDER};

/// Lifecycle of a draft. `Saved` is terminal and is immediately followed by a
/// fresh `Empty` draft with a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftState {
    Empty,
    Filling,
    Described,
    Saved,
}

impl DraftState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftState::Empty => "empty",
            DraftState::Filling => "filling",
            DraftState::Described => "described",
            DraftState::Saved => "saved",
        }
    }
}

impl fmt::Display for DraftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unsaved product entry. Mutated freely until saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: ProductId,
    pub name: String,
    pub product_types: Vec<String>,
    pub price: String,
    pub brand: String,
    pub colour: String,
    pub pattern: Vec<String>,
    pub fabric: Vec<String>,
    pub care: Vec<String>,
    pub fit: Vec<String>,
    pub garment_closure: Vec<String>,
    pub occasion_region: Vec<String>,
    /// Filename of the image written for this draft.
    pub image: Option<String>,
    pub description: Option<GenerationOutcome>,
    /// Attributes changed after the description was generated.
    #[serde(default)]
    pub description_stale: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftUpdate {
    pub name: Option<String>,
    pub product_types: Option<Vec<String>>,
    pub price: Option<String>,
    pub brand: Option<String>,
    pub colour: Option<String>,
    pub pattern: Option<Vec<String>>,
    pub fabric: Option<Vec<String>>,
    pub care: Option<Vec<String>>,
    pub fit: Option<Vec<String>>,
    pub garment_closure: Option<Vec<String>>,
    pub occasion_region: Option<Vec<String>>,
}

impl ProductDraft {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: String::new(),
            product_types: Vec::new(),
            price: String::new(),
            brand: String::new(),
            colour: COLOUR_PLACEHOLDER.to_string(),
            pattern: Vec::new(),
            fabric: Vec::new(),
            care: Vec::new(),
            fit: Vec::new(),
            garment_closure: Vec::new(),
            occasion_region: Vec::new(),
            image: None,
            description: None,
            description_stale: false,
        }
    }

    pub fn state(&self) -> DraftState {
        if self.description.is_some() && !self.description_stale {
            DraftState::Described
        } else if self.is_blank() {
            DraftState::Empty
        } else {
            DraftState::Filling
        }
    }

    /// A colour has been chosen (the placeholder does not count).
    pub fn has_colour(&self) -> bool {
        let colour = self.colour.trim();
        !colour.is_empty() && colour != COLOUR_PLACEHOLDER
    }

    pub fn image_filename(&self) -> String {
        self.id.image_filename()
    }

    /// Apply a partial update. Unknown vocabulary values reject the whole
    /// update; an unparseable price is cleared and reported back instead.
    pub fn apply(
        &mut self,
        update: DraftUpdate,
    ) -> Result<Option<PriceFormatError>, StylevisionError> {
        let product_types = checked(Field::ProductType, update.product_types)?;
        let pattern = checked(
            Field::Pattern,
            update.pattern.map(|values| {
                values
                    .into_iter()
                    .filter(|v| v.trim() != PATTERN_PLACEHOLDER)
                    .collect()
            }),
        )?;
        let fabric = checked(Field::Fabric, update.fabric)?;
        let care = checked(Field::Care, update.care)?;
        let fit = checked(Field::Fit, update.fit)?;
        let garment_closure = checked(Field::GarmentClosure, update.garment_closure)?;
        let occasion_region = checked(Field::OccasionRegion, update.occasion_region)?;
        let colour = update.colour.map(checked_colour).transpose()?;

        let before = self.clone();

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(colour) = colour {
            self.colour = colour;
        }
        if let Some(v) = product_types {
            self.product_types = v;
        }
        if let Some(v) = pattern {
            self.pattern = v;
        }
        if let Some(v) = fabric {
            self.fabric = v;
        }
        if let Some(v) = care {
            self.care = v;
        }
        if let Some(v) = fit {
            self.fit = v;
        }
        if let Some(v) = garment_closure {
            self.garment_closure = v;
        }
        if let Some(v) = occasion_region {
            self.occasion_region = v;
        }

        let mut price_error = None;
        if let Some(price) = update.price {
            match check_price(&price) {
                Ok(()) => self.price = price,
                Err(e) => {
                    self.price.clear();
                    price_error = Some(e);
                }
            }
        }

        if self.description.is_some() && !self.same_attributes(&before) {
            self.description_stale = true;
        }

        Ok(price_error)
    }

    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.brand.trim().is_empty()
            && self.price.trim().is_empty()
            && !self.has_colour()
            && self.product_types.is_empty()
            && self.pattern.is_empty()
            && self.fabric.is_empty()
            && self.care.is_empty()
            && self.fit.is_empty()
            && self.garment_closure.is_empty()
            && self.occasion_region.is_empty()
            && self.image.is_none()
            && self.description.is_none()
    }

    /// Every user-editable attribute matches `other`. Image and description
    /// are not compared.
    pub fn same_attributes(&self, other: &ProductDraft) -> bool {
        self.name == other.name
            && self.product_types == other.product_types
            && self.price == other.price
            && self.brand == other.brand
            && self.colour == other.colour
            && self.pattern == other.pattern
            && self.fabric == other.fabric
            && self.care == other.care
            && self.fit == other.fit
            && self.garment_closure == other.garment_closure
            && self.occasion_region == other.occasion_region
    }
}

/// Accept an empty price or one that parses as a finite decimal.
pub fn check_price(input: &str) -> Result<(), PriceFormatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(()),
        _ => Err(PriceFormatError {
            input: input.to_string(),
        }),
    }
}

/// Trim, drop blanks and duplicates (first occurrence wins), and check
/// membership in the field's vocabulary if it has one.
fn checked(
    field: Field,
    values: Option<Vec<String>>,
) -> Result<Option<Vec<String>>, StylevisionError> {
    let Some(values) = values else {
        return Ok(None);
    };
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if value.is_empty() || out.iter().any(|v| v == value) {
            continue;
        }
        if let Some(vocab) = field.vocabulary() {
            if !vocab.contains(&value) {
                return Err(StylevisionError::InvalidInput(format!(
                    "unknown {} value: {value:?}",
                    field.label()
                )));
            }
        }
        out.push(value.to_string());
    }
    Ok(Some(out))
}

fn checked_colour(colour: String) -> Result<String, StylevisionError> {
    let trimmed = colour.trim();
    if trimmed.is_empty() || trimmed == COLOUR_PLACEHOLDER {
        return Ok(COLOUR_PLACEHOLDER.to_string());
    }
    match Field::Colour.vocabulary() {
        Some(vocab) if vocab.contains(&trimmed) => Ok(trimmed.to_string()),
        _ => Err(StylevisionError::InvalidInput(format!(
            "unknown Colour value: {trimmed:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft::new(ProductId::parse("25_00000042").unwrap())
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn new_draft_is_empty_with_placeholder_colour() {
        let d = draft();
        assert_eq!(d.state(), DraftState::Empty);
        assert_eq!(d.colour, COLOUR_PLACEHOLDER);
        assert!(!d.has_colour());
        assert_eq!(d.image_filename(), "25_00000042.jpg");
    }

    #[test]
    fn apply_moves_draft_to_filling() {
        let mut d = draft();
        let notice = d
            .apply(DraftUpdate {
                name: Some("Silk Wrap Dress".into()),
                fabric: Some(strings(&["Silk"])),
                ..Default::default()
            })
            .unwrap();
        assert!(notice.is_none());
        assert_eq!(d.state(), DraftState::Filling);
        assert_eq!(d.fabric, strings(&["Silk"]));
    }

    #[test]
    fn apply_rejects_unknown_vocabulary_without_partial_change() {
        let mut d = draft();
        let err = d
            .apply(DraftUpdate {
                name: Some("Tee".into()),
                fabric: Some(strings(&["Unobtainium"])),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StylevisionError::InvalidInput(_)));
        assert!(err.to_string().contains("Unobtainium"));
        assert!(d.name.is_empty());
    }

    #[test]
    fn apply_dedups_and_preserves_order() {
        let mut d = draft();
        d.apply(DraftUpdate {
            care: Some(strings(&["Hand Wash", " Dry Clean ", "Hand Wash", ""])),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(d.care, strings(&["Hand Wash", "Dry Clean"]));
    }

    #[test]
    fn pattern_placeholder_is_dropped() {
        let mut d = draft();
        d.apply(DraftUpdate {
            pattern: Some(strings(&[PATTERN_PLACEHOLDER, "Floral"])),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(d.pattern, strings(&["Floral"]));
    }

    #[test]
    fn occasion_region_accepts_free_text() {
        let mut d = draft();
        d.apply(DraftUpdate {
            occasion_region: Some(strings(&["Rajasthan weddings"])),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(d.occasion_region, strings(&["Rajasthan weddings"]));
    }

    #[test]
    fn colour_must_come_from_vocabulary() {
        let mut d = draft();
        d.apply(DraftUpdate {
            colour: Some("Red".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(d.has_colour());

        let err = d
            .apply(DraftUpdate {
                colour: Some("Ultraviolet".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StylevisionError::InvalidInput(_)));
        assert_eq!(d.colour, "Red");

        d.apply(DraftUpdate {
            colour: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(d.colour, COLOUR_PLACEHOLDER);
    }

    #[test]
    fn bad_price_is_cleared_and_reported() {
        let mut d = draft();
        d.apply(DraftUpdate {
            price: Some("808.08".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(d.price, "808.08");

        let notice = d
            .apply(DraftUpdate {
                price: Some("eight dollars".into()),
                name: Some("Kurta".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(notice.unwrap().input, "eight dollars");
        assert!(d.price.is_empty());
        assert_eq!(d.name, "Kurta");
    }

    #[test]
    fn check_price_rules() {
        assert!(check_price("").is_ok());
        assert!(check_price("12").is_ok());
        assert!(check_price(" 12.50 ").is_ok());
        assert!(check_price("-3").is_ok());
        assert!(check_price("inf").is_err());
        assert!(check_price("NaN").is_err());
        assert!(check_price("12,50").is_err());
    }

    #[test]
    fn editing_after_description_marks_it_stale() {
        let mut d = draft();
        d.description = Some(GenerationOutcome::Generated("Lovely.".into()));
        assert_eq!(d.state(), DraftState::Described);

        d.apply(DraftUpdate {
            name: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert!(!d.description_stale, "unchanged value is not an edit");

        d.apply(DraftUpdate {
            fit: Some(strings(&["Slim"])),
            ..Default::default()
        })
        .unwrap();
        assert!(d.description_stale);
        assert_eq!(d.state(), DraftState::Filling);
        assert!(d.description.is_some());
    }
}
