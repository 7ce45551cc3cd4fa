use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocabulary;

/// A user-facing field of the product entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    ProductType,
    Price,
    Brand,
    Colour,
    Pattern,
    Fabric,
    Image,
    Care,
    Fit,
    GarmentClosure,
    OccasionRegion,
}

impl Field {
    /// Required fields, in the order missing ones are reported.
    pub const REQUIRED: &[Field] = &[
        Field::Name,
        Field::ProductType,
        Field::Brand,
        Field::Fabric,
        Field::Image,
        Field::Colour,
        Field::Pattern,
        Field::Fit,
        Field::GarmentClosure,
        Field::Care,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::ProductType => "product_type",
            Field::Price => "price",
            Field::Brand => "brand",
            Field::Colour => "colour",
            Field::Pattern => "pattern",
            Field::Fabric => "fabric",
            Field::Image => "image",
            Field::Care => "care",
            Field::Fit => "fit",
            Field::GarmentClosure => "garment_closure",
            Field::OccasionRegion => "occasion_region",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Product Name",
            Field::ProductType => "Product Type",
            Field::Price => "Price (USD)",
            Field::Brand => "Brand Name",
            Field::Colour => "Colour",
            Field::Pattern => "Pattern",
            Field::Fabric => "Fabric",
            Field::Image => "Product Image",
            Field::Care => "Care",
            Field::Fit => "Fit",
            Field::GarmentClosure => "Garment Closure",
            Field::OccasionRegion => "Occasion & Region",
        }
    }

    /// The closed list a multiselect field draws from.
    /// `None` for free-text fields and for occasion/region.
    pub fn vocabulary(&self) -> Option<&'static [&'static str]> {
        match self {
            Field::ProductType => Some(vocabulary::PRODUCT_TYPES),
            Field::Colour => Some(vocabulary::COLOURS),
            Field::Pattern => Some(vocabulary::PATTERNS),
            Field::Fabric => Some(vocabulary::FABRICS),
            Field::Care => Some(vocabulary::CARE),
            Field::Fit => Some(vocabulary::FITS),
            Field::GarmentClosure => Some(vocabulary::GARMENT_CLOSURES),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
