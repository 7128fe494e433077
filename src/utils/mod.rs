pub mod format;
pub mod logging;

pub use format::{
    digits_only, fold_accents, format_phone, format_tax_id, is_filled,
    national_phone_digits,
};
