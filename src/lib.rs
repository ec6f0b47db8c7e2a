//! easycut - validators for Brazilian registration fields
//!
//! This library checks the fields collected by the EasyCut booking site's
//! sign-up forms: CPF/CNPJ taxpayer numbers (check digits and formatting),
//! phone numbers (layout and area code), e-mail addresses, and the complete
//! client and barbershop forms built from them.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod document;
pub mod email;
pub mod form;
pub mod output;
pub mod phone;
