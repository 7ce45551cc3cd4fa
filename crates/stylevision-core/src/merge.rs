//! De-duplication of descriptive words across the three theme buckets.
//!
//! Each word ends up in exactly one bucket: the first one in
//! [`BUCKET_PRIORITY`] whose raw input contains it.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::product::ProductDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    FabricCare,
    ColorPattern,
    Fit,
}

/// Claim order. A token claimed by an earlier bucket is removed from later ones.
pub const BUCKET_PRIORITY: [Bucket; 3] = [Bucket::FabricCare, Bucket::ColorPattern, Bucket::Fit];

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::FabricCare => "fabric_care",
            Bucket::ColorPattern => "color_pattern",
            Bucket::Fit => "fit",
        }
    }

    /// Column holding the merged bucket in the catalog.
    pub fn column(&self) -> &'static str {
        match self {
            Bucket::FabricCare => "theme_merged_fabric_care",
            Bucket::ColorPattern => "theme_merged_color_pattern",
            Bucket::Fit => "theme_merged_fit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::FabricCare => "Fabric and Care",
            Bucket::ColorPattern => "Color and Pattern",
            Bucket::Fit => "Fit",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comma-joined, lower-cased bucket text before de-duplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBuckets {
    pub fabric_care: String,
    pub color_pattern: String,
    pub fit: String,
}

impl RawBuckets {
    /// fabric + care, colour + pattern, fit.
    pub fn from_draft(draft: &ProductDraft) -> Self {
        let colour = draft
            .has_colour()
            .then(|| draft.colour.trim().to_string());
        Self {
            fabric_care: join_lower(draft.fabric.iter().chain(draft.care.iter())),
            color_pattern: join_lower(colour.iter().chain(draft.pattern.iter())),
            fit: join_lower(draft.fit.iter()),
        }
    }

    pub fn get(&self, bucket: Bucket) -> &str {
        match bucket {
            Bucket::FabricCare => &self.fabric_care,
            Bucket::ColorPattern => &self.color_pattern,
            Bucket::Fit => &self.fit,
        }
    }
}

/// Pairwise-disjoint token sets, one per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedBuckets {
    fabric_care: BTreeSet<String>,
    color_pattern: BTreeSet<String>,
    fit: BTreeSet<String>,
}

impl MergedBuckets {
    pub fn get(&self, bucket: Bucket) -> &BTreeSet<String> {
        match bucket {
            Bucket::FabricCare => &self.fabric_care,
            Bucket::ColorPattern => &self.color_pattern,
            Bucket::Fit => &self.fit,
        }
    }

    fn get_mut(&mut self, bucket: Bucket) -> &mut BTreeSet<String> {
        match bucket {
            Bucket::FabricCare => &mut self.fabric_care,
            Bucket::ColorPattern => &mut self.color_pattern,
            Bucket::Fit => &mut self.fit,
        }
    }

    /// Tokens sorted lexicographically, joined with `", "`.
    pub fn render(&self, bucket: Bucket) -> String {
        self.get(bucket)
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Rendered buckets as raw input, for feeding the merge its own output.
    pub fn to_raw(&self) -> RawBuckets {
        RawBuckets {
            fabric_care: self.render(Bucket::FabricCare),
            color_pattern: self.render(Bucket::ColorPattern),
            fit: self.render(Bucket::Fit),
        }
    }
}

/// Split on commas, trim, drop empty tokens. Case is left alone.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn merge_buckets(raw: &RawBuckets) -> MergedBuckets {
    let mut merged = MergedBuckets::default();
    let mut claimed: BTreeSet<String> = BTreeSet::new();
    for bucket in BUCKET_PRIORITY {
        let tokens: BTreeSet<String> = tokenize(raw.get(bucket))
            .into_iter()
            .filter(|t| !claimed.contains(t))
            .collect();
        claimed.extend(tokens.iter().cloned());
        *merged.get_mut(bucket) = tokens;
    }
    merged
}

fn join_lower<'a>(values: impl Iterator<Item = &'a String>) -> String {
    values
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(fabric_care: &str, color_pattern: &str, fit: &str) -> RawBuckets {
        RawBuckets {
            fabric_care: fabric_care.into(),
            color_pattern: color_pattern.into(),
            fit: fit.into(),
        }
    }

    fn union(sets: &[&BTreeSet<String>]) -> BTreeSet<String> {
        sets.iter().flat_map(|s| s.iter().cloned()).collect()
    }

    fn cases() -> Vec<RawBuckets> {
        vec![
            raw("", "", ""),
            raw("cotton, hand wash", "red, cotton", ""),
            raw("cotton, dry clean, hand wash", "red, blue, cotton", "slim, relaxed, cotton"),
            raw("silk", "silk", "silk"),
            raw("", "red, slim", "slim, loose"),
            raw(" wool ,, ", ",,", " , regular"),
            raw("a, b, c", "c, d, e", "e, f, a"),
            raw("Cotton", "cotton", "COTTON"),
        ]
    }

    #[test]
    fn priority_order_is_fabric_care_then_color_pattern_then_fit() {
        assert_eq!(
            BUCKET_PRIORITY,
            [Bucket::FabricCare, Bucket::ColorPattern, Bucket::Fit]
        );
    }

    #[test]
    fn pattern_colliding_with_fabric_goes_to_fabric_bucket() {
        let merged = merge_buckets(&raw("cotton, hand wash", "red, cotton", "regular"));
        assert_eq!(merged.render(Bucket::FabricCare), "cotton, hand wash");
        assert_eq!(merged.render(Bucket::ColorPattern), "red");
        assert_eq!(merged.render(Bucket::Fit), "regular");
    }

    #[test]
    fn fit_loses_tokens_claimed_by_either_earlier_bucket() {
        let merged = merge_buckets(&raw(
            "cotton, dry clean, hand wash",
            "red, blue, cotton",
            "slim, relaxed, cotton, blue",
        ));
        assert_eq!(merged.render(Bucket::ColorPattern), "blue, red");
        assert_eq!(merged.render(Bucket::Fit), "relaxed, slim");
    }

    #[test]
    fn merged_buckets_are_disjoint_and_cover_the_input() {
        for input in cases() {
            let merged = merge_buckets(&input);
            let f = merged.get(Bucket::FabricCare);
            let c = merged.get(Bucket::ColorPattern);
            let t = merged.get(Bucket::Fit);
            assert!(f.is_disjoint(c), "{input:?}");
            assert!(f.is_disjoint(t), "{input:?}");
            assert!(c.is_disjoint(t), "{input:?}");

            let raw_f = tokenize(&input.fabric_care);
            let raw_c = tokenize(&input.color_pattern);
            let raw_t = tokenize(&input.fit);
            assert_eq!(union(&[f, c, t]), union(&[&raw_f, &raw_c, &raw_t]), "{input:?}");
        }
    }

    #[test]
    fn merge_is_idempotent() {
        for input in cases() {
            let once = merge_buckets(&input);
            let twice = merge_buckets(&once.to_raw());
            assert_eq!(once, twice, "{input:?}");
        }
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let merged = merge_buckets(&raw("Cotton", "cotton", ""));
        assert_eq!(merged.render(Bucket::ColorPattern), "cotton");
    }

    #[test]
    fn tokenize_drops_blank_tokens() {
        let tokens = tokenize(" a , ,b,, ");
        assert_eq!(tokens.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn raw_buckets_from_draft_lowercase_and_skip_placeholder() {
        let mut draft = crate::validation::tests::complete_draft();
        draft.fabric = vec!["Cotton".into()];
        draft.care = vec!["Hand Wash".into()];
        draft.pattern = vec!["Polka Dots".into()];
        let raw = RawBuckets::from_draft(&draft);
        assert_eq!(raw.fabric_care, "cotton, hand wash");
        assert_eq!(raw.color_pattern, "red, polka dots");
        assert_eq!(raw.fit, "relaxed");

        draft.colour = crate::vocabulary::COLOUR_PLACEHOLDER.into();
        assert_eq!(RawBuckets::from_draft(&draft).color_pattern, "polka dots");
    }
}
