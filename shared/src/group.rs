//! Group code vocabulary
//!
//! The auth endpoints return a numeric group code; screens show the
//! display label. The map is a process-wide constant; unmapped codes
//! resolve to a per-path fallback and are never an error.

/// Known group code → display label pairs.
pub const GROUP_LABELS: &[(&str, &str)] = &[
    ("1", "Administrador"),
    ("2", "Atendente de Balcão"),
    ("3", "Atendente de Caixão"),
];

/// Fallback label for unmapped codes on the local login path.
pub const LOCAL_FALLBACK_LABEL: &str = "Administrador";

/// Fallback label for unmapped codes on the remote login path.
pub const UNKNOWN_GROUP_LABEL: &str = "Desconhecido";

/// Look up the display label for a group code.
pub fn group_label(code: &str) -> Option<&'static str> {
    GROUP_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}
