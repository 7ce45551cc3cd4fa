use serde::{Deserialize, Serialize};

/// First entry of the colour picker; never a real selection.
pub const COLOUR_PLACEHOLDER: &str = "-- Select Colour --";

/// First entry of the pattern picker. Dropped when submitted.
pub const PATTERN_PLACEHOLDER: &str = "-- Select Pattern --";

pub const PRODUCT_TYPES: &[&str] = &[
    "Blazer", "Clothing Set", "Bralette", "Dress", "Dupatta", "Hoodie", "Jacket", "Jeans",
    "Joggers", "Jumpsuit", "Kurta", "Kurti", "Lehenga", "Maternity", "Other", "Pants",
    "Pullover", "Saree", "Shawl", "Shirt", "Shorts", "Skirt", "Sweater", "Sweatshirt",
    "T-Shirt", "Top", "Vest",
];

pub const COLOURS: &[&str] = &[
    "Beige", "Black", "Blue", "Bronze", "Brown", "Burgandy", "Camel", "Champagne",
    "Charcoal", "Coffee", "Copper", "Coral", "Cream", "Fuschia", "Gold", "Green", "Grey",
    "Khaki", "Magenta", "Maroon", "Mauve", "Multi", "Navy", "Olive", "Orange", "Peach",
    "Pink", "Purple", "Other", "Red", "Rose Gold", "Rust", "Silver", "Tan", "Taupe", "Teal",
    "Turquoise", "Violet", "White", "Yellow",
];

pub const PATTERNS: &[&str] = &[
    "Aari Work", "Abstract", "Animal", "Applique", "Arjak", "Argyle", "Bagh", "Bandhani",
    "Batik", "Beads and Stones", "Block Print", "Bohemian", "Boucle", "Brocade",
    "Camouflage", "Cartoon / Graphic / Superhero", "Checked", "Chevron", "Chikankari",
    "Colourblocked", "Cutdana Work", "Dabu", "Distressed", "Embellished", "Embroidered",
    "Ethnic", "Fair Isle", "Faux Fur Trim", "Faux Leather Trim", "Floral", "Foil",
    "Frills Bows and Ruffles", "Fringe / Tassel", "Geometric", "Gotta Pattie",
    "Houndstooth", "Ikat", "Jaali", "Kalamkari", "Kantha Work", "Khari",
    "Kutchi Embroidery", "Leheriya", "Micro or Ditsy", "Military", "Mirror Work",
    "Monochrome", "Mukash", "Nautical", "Ombre", "Paisley", "Patchwork", "Phulkari",
    "Pleated", "Polka Dots", "Rivets", "Ruffles", "Screen Print", "Sequins", "Sheer",
    "Shibori", "Shimmer", "Solid", "Stripes", "Tie Dye", "Tribal", "Utility", "Zardozi",
    "Zari",
];

pub const FABRICS: &[&str] = &[
    "Acrylic", "Bamboo", "Cashmere", "Chiffon", "Corduroy", "Cotton", "Denim", "Elastane",
    "Fleece", "Georgette", "Hemp", "Leather", "Linen", "Lycocell", "Lycra", "Modal",
    "Nylon", "Polyester", "Rayon", "Satin", "Silk", "Spandex", "Suede", "Velvet",
    "Viscose", "Wool",
];

pub const CARE: &[&str] = &[
    "Cold Water", "Cool Iron", "Do Not Bleach", "Dry Clean", "Hand Wash",
    "Iron on Reverse", "Line Dry", "Machine Wash", "No Fabric Softener", "Tumble Dry",
    "Warm Water", "Warm Iron",
];

pub const FITS: &[&str] = &[
    "Bodycon", "Bootcut", "Fitted", "Flare", "High-rise", "Loose", "Mid-rise", "Oversized",
    "Regular", "Relaxed", "Skinny", "Slim", "Straight", "Tapered", "Wide Leg",
];

pub const GARMENT_CLOSURES: &[&str] = &[
    "Button(s)", "Drawstring", "Elasticated", "Front-open", "Hook & Eye", "Slip-on",
    "Snap", "Tie", "Toggle", "Zip",
];

/// Suggested values only; occasion/region accepts free text.
pub const OCCASION_REGIONS: &[&str] = &[
    "Casual", "Daily", "Ethnic", "Festive", "Formal", "Fusion", "Maternity", "Outdoor",
    "Party", "Sports", "Traditional", "Western", "Work",
];

/// Every picker list a form needs, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub colour_placeholder: String,
    pub product_types: Vec<String>,
    pub colours: Vec<String>,
    pub patterns: Vec<String>,
    pub fabrics: Vec<String>,
    pub care: Vec<String>,
    pub fits: Vec<String>,
    pub garment_closures: Vec<String>,
    pub occasion_regions: Vec<String>,
}

impl Vocabulary {
    pub fn standard() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }
        Self {
            colour_placeholder: COLOUR_PLACEHOLDER.to_string(),
            product_types: owned(PRODUCT_TYPES),
            colours: owned(COLOURS),
            patterns: owned(PATTERNS),
            fabrics: owned(FABRICS),
            care: owned(CARE),
            fits: owned(FITS),
            garment_closures: owned(GARMENT_CLOSURES),
            occasion_regions: owned(OCCASION_REGIONS),
        }
    }
}
