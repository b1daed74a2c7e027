//! # Domain Types
//!
//! Scalar codecs and identifiers shared by every fundamentals record.
//!
//! | Type | Wire form | Codec |
//! |------|-----------|-------|
//! | [`Money`] | `"14.0782"`, `".42"`, `"None"` | [`parse_money`] / [`format_money`] |
//! | [`CalendarDate`] | `"2020-06-30"` | [`parse_date`] / [`format_date`] |
//! | `i64` | `"152186000000"`, `"None"` | [`parse_int64ish`] |
//! | [`FormType`] | `10K` / `10Q` | `FromStr` / `Display` |
//! | [`Symbol`] | `IBM` | [`Symbol::parse`] |
//!
//! All codecs are pure functions over borrowed strings and can be called
//! from any thread. Malformed input always yields a [`crate::ParseError`]
//! carrying the raw value; only the documented sentinel tokens map to zero.

mod date;
mod form_type;
mod integer;
mod money;
mod symbol;

pub use date::{format_date, parse_date, CalendarDate};
pub use form_type::FormType;
pub use integer::parse_int64ish;
pub use money::{format_money, parse_money, parse_money_field, Money};
pub use symbol::Symbol;
