//! List and form screen flows
//!
//! The renderer-agnostic half of each screen pair. A list flow is
//! fetch-all plus delete-then-refetch; a form flow is fetch-one,
//! create-or-update and the advisory duplicate-key pre-check. Every
//! method returns a value the view layer can show; nothing here
//! renders.

use crate::error::{ClientError, ClientResult};
use crate::guard::{FormIntent, Route};
use crate::resource::{Resource, ResourceClient};
use validator::Validate;

/// List screen flow: fetch-all plus delete-then-refetch.
#[derive(Debug, Clone)]
pub struct ListFlow<R: Resource> {
    client: ResourceClient<R>,
}

impl<R: Resource> ListFlow<R> {
    pub fn new(client: ResourceClient<R>) -> Self {
        Self { client }
    }

    pub async fn load(&self) -> ClientResult<Vec<R>> {
        self.client.list_all().await
    }

    /// Delete a record and return the fresh collection. The list is
    /// re-fetched regardless of the ack content, so the table never
    /// depends on what the delete endpoint answered.
    pub async fn remove(&self, id: i64) -> ClientResult<Vec<R>> {
        self.client.delete(id).await?;
        self.client.list_all().await
    }
}

/// Advisory duplicate-key check result.
#[derive(Debug, Clone)]
pub enum DuplicateCheck<R> {
    /// No conflicting record
    Clear,
    /// Another record already owns the key. The screen offers
    /// edit / view / cancel instead of a silent duplicate.
    Conflict {
        existing: R,
        edit: Route,
        view: Route,
        cancel: Route,
    },
}

impl<R> DuplicateCheck<R> {
    pub fn is_conflict(&self) -> bool {
        matches!(self, DuplicateCheck::Conflict { .. })
    }
}

/// Outcome of a form submission.
#[derive(Debug, Clone)]
pub enum SubmitOutcome<R> {
    /// Record persisted; the server-assigned id for the success notice
    Saved(i64),
    /// The pre-check found the key under another id; nothing was sent
    Duplicate(DuplicateCheck<R>),
}

/// Form screen flow: fetch-one for edit/view, create-or-update submit,
/// duplicate pre-check on the unique key.
#[derive(Debug, Clone)]
pub struct FormFlow<R: Resource> {
    client: ResourceClient<R>,
    editing_id: Option<i64>,
}

impl<R: Resource> FormFlow<R> {
    /// Flow behind a blank create form.
    pub fn create(client: ResourceClient<R>) -> Self {
        Self {
            client,
            editing_id: None,
        }
    }

    /// Flow behind an edit/view form bound to an existing record.
    pub fn edit(client: ResourceClient<R>, id: i64) -> Self {
        Self {
            client,
            editing_id: Some(id),
        }
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    /// Record backing an edit/view form; `None` on a create form.
    pub async fn load(&self) -> ClientResult<Option<R>> {
        match self.editing_id {
            Some(id) => Ok(Some(self.client.get_one(id).await?)),
            None => Ok(None),
        }
    }

    /// Advisory unique-key lookup, wired to loss of focus on the key
    /// input. A hit under the record currently being edited is not a
    /// conflict. Race-prone by nature; the server-side constraint
    /// stays authoritative.
    pub async fn check_unique_key(&self, key: &str) -> ClientResult<DuplicateCheck<R>> {
        if !R::HAS_UNIQUE_KEY || key.is_empty() {
            return Ok(DuplicateCheck::Clear);
        }
        let existing = match self.client.get_by_cpf(key).await? {
            Some(record) => record,
            None => return Ok(DuplicateCheck::Clear),
        };
        match existing.id() {
            Some(existing_id) if self.editing_id != Some(existing_id) => {
                Ok(DuplicateCheck::Conflict {
                    edit: R::form_route(FormIntent::Edit(existing_id)),
                    view: R::form_route(FormIntent::View(existing_id)),
                    cancel: R::list_route(),
                    existing,
                })
            }
            _ => Ok(DuplicateCheck::Clear),
        }
    }

    /// Validate and persist the form. The advisory duplicate check
    /// runs again before anything is sent; while a conflict stands,
    /// no create or update call is made.
    pub async fn submit(&self, payload: &R::Payload) -> ClientResult<SubmitOutcome<R>> {
        payload
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        if let Some(key) = R::unique_key(payload) {
            let check = self.check_unique_key(key).await?;
            if check.is_conflict() {
                return Ok(SubmitOutcome::Duplicate(check));
            }
        }

        let id = match self.editing_id {
            Some(id) => self.client.update(id, payload).await?,
            None => self.client.create(payload).await?,
        };
        Ok(SubmitOutcome::Saved(id))
    }
}
