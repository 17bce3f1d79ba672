//! Auth API DTOs
//!
//! Request/reply shapes of the two employee login endpoints. The BFF
//! exposes `funcionario/login_local` for reserved `@` accounts and
//! `funcionario/login` for regular employees; both reply with at most a
//! display name and a group code.

use serde::{Deserialize, Serialize};

/// Local login request (`POST funcionario/login_local`).
///
/// The username is sent as typed, including the `@` marker; stripping
/// it is the BFF's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalLoginRequest {
    pub username: String,
    pub senha: String,
}

/// Remote login request (`POST funcionario/login`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteLoginRequest {
    pub cpf: String,
    pub senha: String,
}

/// Reply of both login endpoints.
///
/// The local endpoint omits `nome`; either endpoint may return a group
/// code outside the known map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "group_code")]
    pub grupo: Option<String>,
}

/// The BFF is not consistent about the group code type; it arrives as
/// either a string or a bare number. Normalize both to a string so the
/// label map keys on one shape.
fn group_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Code>::deserialize(deserializer)?.map(|code| match code {
        Code::Text(text) => text,
        Code::Number(number) => number.to_string(),
    }))
}
