pub mod description;
pub mod error;
pub mod field;
pub mod merge;
pub mod product;
pub mod product_id;
pub mod record;
pub mod summary;
pub mod validation;
pub mod vocabulary;

pub use description::GenerationOutcome;
pub use error::{PriceFormatError, StylevisionError, ValidationError};
pub use field::Field;
pub use merge::{merge_buckets, Bucket, MergedBuckets, RawBuckets, BUCKET_PRIORITY};
pub use product::{DraftState, DraftUpdate, ProductDraft};
pub use product_id::ProductId;
pub use record::ProductRecord;
pub use validation::{validate, ValidDraft};
pub use vocabulary::Vocabulary;
