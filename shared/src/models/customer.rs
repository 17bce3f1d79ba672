//! Customer Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer entity (`/cliente` endpoint family).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Server-assigned identity
    #[serde(rename = "id_cliente")]
    pub id: Option<i64>,
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
}

/// Customer form payload (create and update send the full record)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerPayload {
    #[validate(length(min = 1, max = 100, message = "Nome é obrigatório (máximo de 100 caracteres)"))]
    pub nome: String,
    #[validate(length(min = 1, message = "CPF é obrigatório"))]
    pub cpf: String,
    #[validate(length(min = 1, message = "Telefone é obrigatório"))]
    pub telefone: String,
}
