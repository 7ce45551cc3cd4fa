use serde::{Deserialize, Serialize};

use crate::merge::{merge_buckets, Bucket, RawBuckets};
use crate::summary::{record_sections, render_summary};
use crate::validation::ValidDraft;

/// A finalised product row. Field order is the catalog column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub p_id: String,
    pub name: String,
    pub products: String,
    pub price: String,
    pub brand: String,
    pub img: String,
    pub theme_merged_color_pattern: String,
    pub theme_merged_fit: String,
    pub theme_merged_fabric_care: String,
    pub formatted: String,
    pub description_generated: String,
}

impl ProductRecord {
    pub const COLUMNS: [&'static str; 11] = [
        "p_id",
        "name",
        "products",
        "price",
        "brand",
        "img",
        "theme_merged_color_pattern",
        "theme_merged_fit",
        "theme_merged_fabric_care",
        "formatted",
        "description_generated",
    ];

    /// Build the row for a validated draft.
    ///
    /// `name` is trimmed but keeps its case; products, price and brand are
    /// lower-cased. The description is whatever text the draft holds,
    /// including a generation failure message.
    pub fn assemble(valid: ValidDraft<'_>) -> Self {
        let draft = valid.draft();
        let merged = merge_buckets(&RawBuckets::from_draft(draft));
        let garment_closure = lower_join(&draft.garment_closure);
        let occasion_region = lower_join(&draft.occasion_region);
        let formatted = render_summary(&record_sections(
            &merged,
            &garment_closure,
            &occasion_region,
        ));

        Self {
            p_id: draft.id.to_string(),
            name: draft.name.trim().to_string(),
            products: lower_join(&draft.product_types),
            price: draft.price.to_lowercase(),
            brand: draft.brand.trim().to_lowercase(),
            img: draft.image_filename(),
            theme_merged_color_pattern: merged.render(Bucket::ColorPattern),
            theme_merged_fit: merged.render(Bucket::Fit),
            theme_merged_fabric_care: merged.render(Bucket::FabricCare),
            formatted,
            description_generated: draft
                .description
                .as_ref()
                .map(|d| d.display_text())
                .unwrap_or_default(),
        }
    }

    /// Field values in [`Self::COLUMNS`] order.
    pub fn to_row(&self) -> [&str; 11] {
        [
            &self.p_id,
            &self.name,
            &self.products,
            &self.price,
            &self.brand,
            &self.img,
            &self.theme_merged_color_pattern,
            &self.theme_merged_fit,
            &self.theme_merged_fabric_care,
            &self.formatted,
            &self.description_generated,
        ]
    }
}

fn lower_join(values: &[String]) -> String {
    values
        .iter()
        .map(|v| v.to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}
