//! Form rules for the catalog and table management screens.
//!
//! Pages keep raw input strings in signals and run them through these helpers
//! on change and on submit; nothing here touches the DOM.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::config::MAX_IMAGE_BYTES;
use crate::net::types::{Id, Table, TableStatus};

/// MIME types accepted for product images.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = ["image/jpeg", "image/jpg", "image/png", "image/gif", "image/webp"];

/// Validation failure shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingFields,
    #[error("Por favor, insira um preço válido maior que zero.")]
    InvalidPrice,
    #[error("Apenas arquivos de imagem são permitidos (JPG, PNG, GIF, WEBP)")]
    UnsupportedImage,
    #[error("A imagem deve ter no máximo 5MB")]
    ImageTooLarge,
    #[error("Por favor, informe o nome da categoria.")]
    MissingCategoryName,
    #[error("Por favor, informe um número de mesa válido.")]
    InvalidTableNumber,
    #[error("Já existe uma mesa com o número {0}. Por favor, escolha outro número.")]
    DuplicateTable(i64),
    #[error("Não é possível excluir a Mesa {0} pois ela está bloqueada.")]
    TableInUse(i64),
}

// =============================================================================
// PRICE INPUT
// =============================================================================

/// Filter a keystroke-level price value: keep digits, `.` and `,`, and drop a
/// leading zero unless it starts a decimal (`0,` / `0.`).
pub fn sanitize_price_input(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',').collect();
    if cleaned.len() > 1 && cleaned.starts_with('0') && !cleaned.starts_with("0.") && !cleaned.starts_with("0,") {
        cleaned[1..].to_owned()
    } else {
        cleaned
    }
}

/// Parse a price typed with `,` as decimal separator.
///
/// Only the first `,` is treated as the separator and trailing garbage after
/// the numeric prefix is ignored, so `"12,5"` and `"12,5x"` both give `12.5`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replacen(',', ".", 1);
    let mut seen_dot = false;
    let end = normalized
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' && !seen_dot {
                seen_dot = true;
                false
            } else {
                !c.is_ascii_digit()
            }
        })
        .map_or(normalized.len(), |(i, _)| i);
    let prefix = &normalized[..end];
    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a stored price for the edit form (`12.5` -> `"12,5"`).
pub fn format_price_input(price: f64) -> String {
    price.to_string().replace('.', ",")
}

// =============================================================================
// PRODUCT FORM
// =============================================================================

/// Raw product form contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub nome: String,
    pub preco: String,
    pub descricao: String,
    pub categoria_id: Option<Id>,
}

/// A product ready to be sent as multipart fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductSubmission {
    pub nome: String,
    pub descricao: String,
    pub preco: f64,
    pub categoria_id: Id,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<ProductSubmission, FormError> {
        let nome = self.nome.trim();
        let categoria_id = match &self.categoria_id {
            Some(id) if !nome.is_empty() && !self.preco.trim().is_empty() => id.clone(),
            _ => return Err(FormError::MissingFields),
        };
        let preco = parse_price(&self.preco).filter(|p| *p > 0.0).ok_or(FormError::InvalidPrice)?;
        Ok(ProductSubmission { nome: nome.to_owned(), descricao: self.descricao.clone(), preco, categoria_id })
    }
}

impl ProductSubmission {
    /// Multipart text fields in wire order; the image is attached separately as `file`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("nome", self.nome.clone()),
            ("descricao", self.descricao.clone()),
            ("preco", self.preco.to_string()),
            ("categoriaId", self.categoria_id.to_string()),
        ]
    }
}

/// Check a selected image's MIME type and size in bytes.
pub fn validate_image(mime: &str, size: f64) -> Result<(), FormError> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime) {
        return Err(FormError::UnsupportedImage);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(FormError::ImageTooLarge);
    }
    Ok(())
}

// =============================================================================
// CATEGORIES & TABLES
// =============================================================================

pub fn validate_category_name(raw: &str) -> Result<String, FormError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FormError::MissingCategoryName);
    }
    Ok(name.to_owned())
}

/// Parse a new table number and reject zero, negatives and numbers already taken.
pub fn validate_table_number(raw: &str, existing: &[Table]) -> Result<i64, FormError> {
    let numero = raw.trim().parse::<i64>().ok().filter(|n| *n > 0).ok_or(FormError::InvalidTableNumber)?;
    if existing.iter().any(|t| t.numero == numero) {
        return Err(FormError::DuplicateTable(numero));
    }
    Ok(numero)
}

/// A table with an open order cannot be removed.
pub fn can_delete_table(table: &Table) -> Result<(), FormError> {
    match table.status {
        TableStatus::Bloqueada => Err(FormError::TableInUse(table.numero)),
        TableStatus::Livre => Ok(()),
    }
}
