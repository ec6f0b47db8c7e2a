//! Registration form validation
//!
//! Composes the field validators for the two sign-up forms of the booking
//! site: clients and barbershops. Every rule runs, so a report lists all
//! problems at once instead of stopping at the first.
//!
//! Forms deserialize from the JSON the web frontend posts, including its
//! original Portuguese field names (`nomeCompleto`, `telefone`, `senha`...).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::document::validate_document;
use crate::email::validate_email;
use crate::phone::{PhoneType, PhoneValidator};

/// Default minimum password length
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

/// Client sign-up form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientForm {
    /// Full name (first and last name)
    #[serde(alias = "nomeCompleto")]
    pub full_name: String,
    /// Contact e-mail
    pub email: String,
    /// Contact phone
    #[serde(alias = "telefone")]
    pub phone: String,
    /// Chosen password
    #[serde(alias = "senha")]
    pub password: String,
    /// Password typed again
    #[serde(alias = "confirmarSenha")]
    pub confirm_password: String,
    /// Terms of use accepted
    #[serde(alias = "aceitarTermos")]
    pub accept_terms: bool,
}

/// Barbershop sign-up form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarbershopForm {
    /// Trading name of the shop
    #[serde(alias = "nomeBarbearia")]
    pub shop_name: String,
    /// CNPJ of the shop, or CPF of an individual owner
    #[serde(alias = "cnpjCpf")]
    pub document: String,
    /// Person responsible for the account
    #[serde(alias = "responsavel")]
    pub owner: String,
    /// WhatsApp number used for bookings
    pub whatsapp: String,
    /// Contact e-mail
    pub email: String,
    /// Chosen password
    #[serde(alias = "senha")]
    pub password: String,
    /// Password typed again
    #[serde(alias = "confirmarSenha")]
    pub confirm_password: String,
    /// Terms of use accepted
    #[serde(alias = "aceitarTermos")]
    pub accept_terms: bool,
}

/// Result of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormReport {
    /// No errors were found
    pub is_valid: bool,
    /// One entry per failed rule
    pub errors: Vec<String>,
    /// Non-blocking remarks
    pub warnings: Vec<String>,
    /// Normalized field values that passed validation
    pub validated_data: Map<String, Value>,
}

impl FormReport {
    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.validated_data.insert(key.to_string(), value.into());
    }

    fn finish(mut self) -> Self {
        self.is_valid = self.errors.is_empty();
        self
    }
}

/// Validates sign-up forms
#[derive(Debug, Clone)]
pub struct FormValidator {
    phone: PhoneValidator,
    min_password_len: usize,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(PhoneValidator::default(), DEFAULT_MIN_PASSWORD_LEN)
    }
}

impl FormValidator {
    /// Create a validator with a phone validator and password policy
    #[must_use]
    pub const fn new(phone: PhoneValidator, min_password_len: usize) -> Self {
        Self {
            phone,
            min_password_len,
        }
    }

    /// Validate the client sign-up form
    #[must_use]
    pub fn validate_client(&self, form: &ClientForm) -> FormReport {
        let mut report = FormReport::default();

        check_person_name(&mut report, "fullName", "full name", &form.full_name);
        check_email(&mut report, &form.email);

        let phone = form.phone.trim();
        if phone.is_empty() {
            report.error("phone is required");
        } else {
            let result = self.phone.validate(phone);
            if result.is_valid {
                report.set("phone", result.formatted);
                report.set("phoneWhatsapp", result.whatsapp.unwrap_or_default());
                report.set("phoneType", result.phone_type.to_string());
            } else {
                report.error(format!("invalid phone: {}", result.message));
            }
        }

        self.check_password(&mut report, &form.password, &form.confirm_password);
        check_terms(&mut report, form.accept_terms);

        report.finish()
    }

    /// Validate the barbershop sign-up form
    #[must_use]
    pub fn validate_barbershop(&self, form: &BarbershopForm) -> FormReport {
        let mut report = FormReport::default();

        let shop_name = form.shop_name.trim();
        if shop_name.is_empty() {
            report.error("barbershop name is required");
        } else {
            report.set("shopName", shop_name);
        }

        let document = form.document.trim();
        if document.is_empty() {
            report.error("CNPJ/CPF is required");
        } else {
            let result = validate_document(document);
            if result.is_valid {
                report.set("document", result.formatted.unwrap_or_default());
                report.set("documentType", result.document_type.to_string());
            } else {
                report.error(format!("invalid CNPJ/CPF: {}", result.message));
            }
        }

        check_person_name(&mut report, "owner", "owner name", &form.owner);

        let whatsapp = form.whatsapp.trim();
        if whatsapp.is_empty() {
            report.error("WhatsApp is required");
        } else {
            let result = self.phone.validate(whatsapp);
            if result.is_valid {
                if result.phone_type == PhoneType::Landline {
                    report.warn("WhatsApp number looks like a landline");
                }
                report.set("whatsapp", result.formatted);
                report.set("whatsappE164", result.whatsapp.unwrap_or_default());
                report.set("whatsappType", result.phone_type.to_string());
            } else {
                report.error(format!("invalid WhatsApp: {}", result.message));
            }
        }

        check_email(&mut report, &form.email);
        self.check_password(&mut report, &form.password, &form.confirm_password);
        check_terms(&mut report, form.accept_terms);

        report.finish()
    }

    fn check_password(&self, report: &mut FormReport, password: &str, confirmation: &str) {
        if password.is_empty() {
            report.error("password is required");
        } else if password.chars().count() < self.min_password_len {
            report.error(format!(
                "password must have at least {} characters",
                self.min_password_len
            ));
        } else if password != confirmation {
            report.error("passwords do not match");
        }
    }
}

fn check_person_name(report: &mut FormReport, key: &str, label: &str, name: &str) {
    let name = name.trim();
    if name.is_empty() {
        report.error(format!("{label} is required"));
    } else if name.split_whitespace().count() < 2 {
        report.error(format!("{label} must include first and last name"));
    } else {
        report.set(key, name);
    }
}

fn check_email(report: &mut FormReport, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        report.error("email is required");
        return;
    }

    let result = validate_email(email);
    match result.normalized {
        Some(normalized) if result.is_valid => report.set("email", normalized),
        _ => report.error(format!("invalid email: {}", result.message)),
    }
}

fn check_terms(report: &mut FormReport, accepted: bool) {
    if accepted {
        report.set("acceptTerms", true);
    } else {
        report.error("the terms of use must be accepted");
    }
}

/// JSON envelope returned to the frontend for a validated form
///
/// `data` is only present when the form is valid.
#[must_use]
pub fn api_response(report: &FormReport) -> Value {
    let mut response = json!({
        "success": report.is_valid,
        "message": if report.is_valid { "form is valid" } else { "form contains errors" },
        "errors": report.errors,
        "warnings": report.warnings,
    });

    if report.is_valid {
        response["data"] = Value::Object(report.validated_data.clone());
    }

    response
}
