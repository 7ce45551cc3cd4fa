use crate::merge::{Bucket, MergedBuckets};
use crate::product::ProductDraft;

/// One `Label: v1, v2` line. Each source is comma-split into values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub label: &'static str,
    pub sources: Vec<String>,
}

impl SummarySection {
    pub fn new(label: &'static str, sources: Vec<String>) -> Self {
        Self { label, sources }
    }
}

/// Render sections as `Label: v1, v2` lines joined with `\n`.
///
/// Values are de-duplicated case-insensitively within a section, keeping the
/// casing and position of the first occurrence. Sections with no values are
/// skipped.
pub fn render_summary(sections: &[SummarySection]) -> String {
    let mut lines = Vec::new();
    for section in sections {
        let mut seen: Vec<String> = Vec::new();
        let mut values: Vec<&str> = Vec::new();
        for part in section.sources.iter().flat_map(|s| s.split(',')) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let key = part.to_lowercase();
            if !seen.contains(&key) {
                seen.push(key);
                values.push(part);
            }
        }
        if !values.is_empty() {
            lines.push(format!("{}: {}", section.label, values.join(", ")));
        }
    }
    lines.join("\n")
}

/// Live preview built from the raw selections of a draft.
pub fn preview_sections(draft: &ProductDraft) -> Vec<SummarySection> {
    let colour = if draft.has_colour() {
        vec![draft.colour.clone()]
    } else {
        Vec::new()
    };
    vec![
        SummarySection::new("Product Name", vec![draft.name.clone()]),
        SummarySection::new("Product Type", draft.product_types.clone()),
        SummarySection::new("Primary Colour", colour),
        SummarySection::new("Primary Pattern", draft.pattern.clone()),
        SummarySection::new("Brand", vec![draft.brand.clone()]),
        SummarySection::new("Fabric", draft.fabric.clone()),
        SummarySection::new("Care", draft.care.clone()),
        SummarySection::new("Fit", draft.fit.clone()),
        SummarySection::new("Garment Closure", draft.garment_closure.clone()),
        SummarySection::new(
            "Occasion & Region (for Dupattas)",
            draft.occasion_region.clone(),
        ),
    ]
}

pub fn render_preview(draft: &ProductDraft) -> String {
    render_summary(&preview_sections(draft))
}

/// Sections persisted with a saved record, built from the merged buckets.
pub fn record_sections(
    merged: &MergedBuckets,
    garment_closure: &str,
    occasion_region: &str,
) -> Vec<SummarySection> {
    vec![
        SummarySection::new(
            Bucket::ColorPattern.label(),
            vec![merged.render(Bucket::ColorPattern)],
        ),
        SummarySection::new(
            Bucket::FabricCare.label(),
            vec![merged.render(Bucket::FabricCare)],
        ),
        SummarySection::new(Bucket::Fit.label(), vec![merged.render(Bucket::Fit)]),
        SummarySection::new("Garment Closure", vec![garment_closure.to_string()]),
        SummarySection::new(
            "Occasion & Region (Dupatta)",
            vec![occasion_region.to_string()],
        ),
    ]
}
