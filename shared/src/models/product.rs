//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Product entity (`/produto` endpoint family).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identity
    #[serde(rename = "id_produto")]
    pub id: Option<i64>,
    pub nome: String,
    pub descricao: String,
    pub valor_unitario: Decimal,
    /// Base64 photo, optional on the wire
    #[serde(default)]
    pub foto: Option<String>,
}

/// Product form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(length(min = 1, max = 100, message = "Nome é obrigatório (máximo de 100 caracteres)"))]
    pub nome: String,
    #[validate(length(min = 1, message = "Descrição é obrigatória"))]
    pub descricao: String,
    #[validate(custom(function = "non_negative_price"))]
    pub valor_unitario: Decimal,
    #[serde(default)]
    pub foto: Option<String>,
}

fn non_negative_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("Valor unitário não pode ser negativo".into());
        return Err(err);
    }
    Ok(())
}
