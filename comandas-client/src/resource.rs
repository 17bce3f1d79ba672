//! Generic resource client
//!
//! The three resource kinds share one endpoint family shape:
//!
//! - `GET  {base}/{kind}/all`                    full collection
//! - `GET  {base}/{kind}/one?id_{kind}=<id>`     single record (array-wrapped)
//! - `GET  {base}/{kind}/cpf?cpf=<key>`          duplicate-key lookup
//! - `POST {base}/{kind}`                        create
//! - `PUT  {base}/{kind}?id_{kind}=<id>`         update
//! - `DELETE {base}/{kind}?id_{kind}=<id>`       delete
//!
//! [`ResourceClient`] is the stateless wrapper instantiated once per
//! kind; the [`Resource`] trait binds a model to its endpoint family.

use crate::error::{ClientError, ClientResult};
use crate::guard::{FormIntent, Route};
use crate::http::HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{
    Customer, CustomerPayload, Employee, EmployeePayload, Product, ProductPayload,
};
use std::marker::PhantomData;
use validator::Validate;

/// One managed resource kind and the endpoint family it maps to.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// URL path segment (`cliente`, `funcionario`, `produto`)
    const PATH: &'static str;
    /// Query parameter carrying the server-assigned id
    const ID_PARAM: &'static str;
    /// Display label for notices and logs
    const LABEL: &'static str;
    /// Whether the kind exposes the `/cpf` uniqueness endpoint
    const HAS_UNIQUE_KEY: bool;

    /// Form payload sent on create/update
    type Payload: serde::Serialize + Validate + Clone + Send + Sync;

    /// Server-assigned identity, if the record has been persisted
    fn id(&self) -> Option<i64>;

    /// Unique-key value of a payload, when the kind has one
    fn unique_key(payload: &Self::Payload) -> Option<&str>;

    /// Form route for this kind
    fn form_route(intent: FormIntent) -> Route;

    /// List route for this kind
    fn list_route() -> Route;
}

impl Resource for Customer {
    const PATH: &'static str = "cliente";
    const ID_PARAM: &'static str = "id_cliente";
    const LABEL: &'static str = "cliente";
    const HAS_UNIQUE_KEY: bool = true;

    type Payload = CustomerPayload;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn unique_key(payload: &CustomerPayload) -> Option<&str> {
        Some(&payload.cpf)
    }

    fn form_route(intent: FormIntent) -> Route {
        Route::CustomerForm(intent)
    }

    fn list_route() -> Route {
        Route::CustomerList
    }
}

impl Resource for Employee {
    const PATH: &'static str = "funcionario";
    const ID_PARAM: &'static str = "id_funcionario";
    const LABEL: &'static str = "funcionário";
    const HAS_UNIQUE_KEY: bool = true;

    type Payload = EmployeePayload;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn unique_key(payload: &EmployeePayload) -> Option<&str> {
        Some(&payload.cpf)
    }

    fn form_route(intent: FormIntent) -> Route {
        Route::EmployeeForm(intent)
    }

    fn list_route() -> Route {
        Route::EmployeeList
    }
}

impl Resource for Product {
    const PATH: &'static str = "produto";
    const ID_PARAM: &'static str = "id_produto";
    const LABEL: &'static str = "produto";
    // Products have no uniqueness endpoint.
    const HAS_UNIQUE_KEY: bool = false;

    type Payload = ProductPayload;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn unique_key(_payload: &ProductPayload) -> Option<&str> {
        None
    }

    fn form_route(intent: FormIntent) -> Route {
        Route::ProductForm(intent)
    }

    fn list_route() -> Route {
        Route::ProductList
    }
}

/// Stateless CRUD wrapper over the endpoint family of one resource kind.
#[derive(Debug, Clone)]
pub struct ResourceClient<R: Resource> {
    http: HttpClient,
    _kind: PhantomData<R>,
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            _kind: PhantomData,
        }
    }

    /// Fetch the full collection. No pagination or filtering upstream;
    /// the payload goes through [`normalize_collection`] first.
    pub async fn list_all(&self) -> ClientResult<Vec<R>> {
        let payload: Value = self.http.get(&format!("{}/all", R::PATH), &[]).await?;
        serde_json::from_value(normalize_collection(payload)).map_err(Into::into)
    }

    /// Fetch a single record by server-assigned id.
    pub async fn get_one(&self, id: i64) -> ClientResult<R> {
        let payload: Value = self
            .http
            .get(
                &format!("{}/one", R::PATH),
                &[(R::ID_PARAM, id.to_string())],
            )
            .await?;
        let record = first_record(payload)
            .ok_or_else(|| ClientError::NotFound(format!("{} {}", R::LABEL, id)))?;
        serde_json::from_value(record).map_err(Into::into)
    }

    /// Duplicate-key lookup. Absence is a normal outcome, not an error.
    pub async fn get_by_cpf(&self, cpf: &str) -> ClientResult<Option<R>> {
        let payload: Value = self
            .http
            .get(&format!("{}/cpf", R::PATH), &[("cpf", cpf.to_string())])
            .await?;
        match first_record(payload) {
            Some(record) => Ok(Some(serde_json::from_value(record)?)),
            None => Ok(None),
        }
    }

    /// Create a record; returns the server-assigned id for the success
    /// notice. A reply without a resolvable id is an error.
    pub async fn create(&self, payload: &R::Payload) -> ClientResult<i64> {
        let reply: Value = self.http.post(R::PATH, payload).await?;
        resolve_identity::<R>(&reply).ok_or_else(missing_identity::<R>)
    }

    /// Update a record in place; returns the id echoed by the server.
    pub async fn update(&self, id: i64, payload: &R::Payload) -> ClientResult<i64> {
        let reply: Value = self
            .http
            .put(R::PATH, &[(R::ID_PARAM, id.to_string())], payload)
            .await?;
        resolve_identity::<R>(&reply).ok_or_else(missing_identity::<R>)
    }

    /// Delete by id. The ack body is discarded unread; callers re-fetch
    /// the list unconditionally afterwards.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete(R::PATH, &[(R::ID_PARAM, id.to_string())])
            .await
    }
}

fn missing_identity<R: Resource>() -> ClientError {
    ClientError::InvalidResponse(format!("reply for {} carries no id", R::LABEL))
}

/// Unwrap the BFF's occasional double-wrapped list payload.
///
/// List endpoints have been observed answering `[collection, meta]`
/// instead of the collection itself. Undocumented upstream behavior
/// (flagged with the API owner), so the rule is deliberately narrow:
/// a 2-element outer array whose first element is itself an array
/// unwraps to that first element; anything else passes through
/// unchanged.
pub fn normalize_collection(payload: Value) -> Value {
    if let Value::Array(items) = &payload {
        if items.len() == 2 && items[0].is_array() {
            return items[0].clone();
        }
    }
    payload
}

/// The `one`/`cpf` endpoints answer with an array whose first element
/// is the record. A bare object is accepted as-is; empty array and
/// null mean absent.
fn first_record(payload: Value) -> Option<Value> {
    match payload {
        Value::Array(items) => items.into_iter().next(),
        Value::Null => None,
        other => Some(other),
    }
}

/// Identity of a create/update reply: `id` first (the field the
/// screens echo in their success notice), then the kind's `id_*`
/// parameter name.
fn resolve_identity<R: Resource>(reply: &Value) -> Option<i64> {
    reply
        .get("id")
        .and_then(Value::as_i64)
        .or_else(|| reply.get(R::ID_PARAM).and_then(Value::as_i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrapped_collection_is_unwrapped() {
        let wrapped = json!([[{"id": 1}], {"meta": true}]);
        assert_eq!(normalize_collection(wrapped), json!([{"id": 1}]));
    }

    #[test]
    fn flat_collection_passes_through() {
        let flat = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(normalize_collection(flat.clone()), flat);
    }

    #[test]
    fn two_objects_are_not_mistaken_for_a_wrapper() {
        // Two records that happen to form a 2-element array must not
        // be unwrapped; only an array-in-first-position triggers it.
        let records = json!([{"id_cliente": 1}, {"id_cliente": 2}]);
        assert_eq!(normalize_collection(records.clone()), records);
    }

    #[test]
    fn empty_and_non_array_payloads_pass_through() {
        assert_eq!(normalize_collection(json!([])), json!([]));
        assert_eq!(normalize_collection(json!({"a": 1})), json!({"a": 1}));
    }

    #[test]
    fn first_record_takes_the_head_of_an_array() {
        assert_eq!(
            first_record(json!([{"id_cliente": 40}, {"id_cliente": 41}])),
            Some(json!({"id_cliente": 40}))
        );
        assert_eq!(first_record(json!([])), None);
        assert_eq!(first_record(Value::Null), None);
        assert_eq!(first_record(json!({"id_cliente": 40})), Some(json!({"id_cliente": 40})));
    }

    #[test]
    fn identity_prefers_plain_id() {
        assert_eq!(
            resolve_identity::<Customer>(&json!({"id": 7, "id_cliente": 9})),
            Some(7)
        );
        assert_eq!(
            resolve_identity::<Customer>(&json!({"id_cliente": 9})),
            Some(9)
        );
        assert_eq!(resolve_identity::<Customer>(&json!({"nome": "x"})), None);
    }
}
