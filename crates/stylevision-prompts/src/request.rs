use serde::{Deserialize, Serialize};
use stylevision_core::ProductDraft;

/// What the text generator receives: the product name plus the labelled
/// attributes that have a value.
///
/// Occasion/region is never part of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionRequest {
    pub product_name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub label: String,
    pub value: String,
}

impl DescriptionRequest {
    pub fn from_draft(draft: &ProductDraft) -> Self {
        let colour = if draft.has_colour() {
            draft.colour.trim().to_string()
        } else {
            String::new()
        };
        let candidates = [
            ("Product Type", draft.product_types.join(", ")),
            ("Colour", colour),
            ("Pattern", draft.pattern.join(", ")),
            ("Fabric", draft.fabric.join(", ")),
            ("Fit", draft.fit.join(", ")),
            ("Garment Closure", draft.garment_closure.join(", ")),
            ("Care Instructions", draft.care.join(", ")),
        ];
        let attributes = candidates
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| Attribute {
                label: label.to_string(),
                value,
            })
            .collect();
        Self {
            product_name: draft.name.trim().to_string(),
            attributes,
        }
    }

    /// Render the attribute block, product name first.
    pub fn append_attributes(&self, prompt: &mut String) {
        prompt.push_str("Attributes provided:\n");
        prompt.push_str(&format!("Product Name: {}\n", self.product_name));
        for attr in &self.attributes {
            prompt.push_str(&format!("{}: {}\n", attr.label, attr.value));
        }
    }
}
