//! Employee Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee entity (`/funcionario` endpoint family).
///
/// `senha` travels on the wire because the BFF requires the full record
/// on create/update; list screens simply never render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Server-assigned identity
    #[serde(rename = "id_funcionario")]
    pub id: Option<i64>,
    pub nome: String,
    pub matricula: String,
    pub cpf: String,
    pub telefone: String,
    #[serde(default)]
    pub senha: String,
    /// Group code ("1".."3"), resolved to a label for display
    pub grupo: String,
}

/// Employee form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeePayload {
    #[validate(length(min = 1, max = 100, message = "Nome é obrigatório (máximo de 100 caracteres)"))]
    pub nome: String,
    #[validate(length(min = 1, message = "Matrícula é obrigatória"))]
    pub matricula: String,
    #[validate(length(min = 1, message = "CPF é obrigatório"))]
    pub cpf: String,
    #[validate(length(min = 1, message = "Telefone é obrigatório"))]
    pub telefone: String,
    #[validate(length(min = 6, message = "Senha deve ter pelo menos 6 caracteres"))]
    pub senha: String,
    #[validate(length(min = 1, message = "Grupo é obrigatório"))]
    pub grupo: String,
}
