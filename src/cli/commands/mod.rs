//! Command implementations

mod form;
mod format;
mod input;
mod validate;

pub use form::form;
pub use format::format;
pub use validate::{cnpj, cpf, document, email, phone};
