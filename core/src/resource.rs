//! Generic resource handle and the verb helpers every resource is built from.
//!
//! # Design
//! A resource family is fully described by a static `ResourceKind`
//! (endpoint segment + body wrapper key). `Resource` pairs a kind with a
//! client and an optional id and knows how to issue the handful of REST
//! shapes the service uses:
//!
//! | helper          | request                                  |
//! |-----------------|------------------------------------------|
//! | `list`          | `GET {ep}[?args]`                        |
//! | `fetch`         | `GET {ep}/{id}[?args]`                   |
//! | `fetch_nested`  | `GET {ep}/{id}/{suffix}[?args]`          |
//! | `create`        | `POST {ep}` with `{wrapper: args}`       |
//! | `create_nested` | `POST {ep}/{id}/{suffix}` with wrapper   |
//! | `update`        | `PUT {ep}/{id}` with `{wrapper: args}`   |
//! | `update_nested` | `PUT {ep}/{id}/{suffix}` with wrapper    |
//! | `action`        | `PUT {ep}/{id}/{verb}`, no body          |
//! | `destroy`       | `DELETE {ep}/{id}`                       |
//!
//! Helpers do not validate arguments; the concrete resource methods run
//! `are_arguments_valid` with their own whitelist first. Every helper sends
//! immediately and returns the decoded payload. The read helpers also have
//! `*_response` forms that keep the whole `ApiResponse`, so paging headers
//! such as `X-Pages` stay reachable.

use serde_json::Value;
use url::form_urlencoded;

use crate::client::TeamworkClient;
use crate::error::{ApiError, Result};
use crate::request::Args;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Static description of one resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// Human-readable name used in error messages.
    pub name: &'static str,
    /// Path segment, e.g. `tasks`.
    pub endpoint: &'static str,
    /// Key the create/update payload is nested under, e.g. `todo-list`.
    pub wrapper: &'static str,
}

pub struct Resource<'c, T> {
    client: &'c TeamworkClient<T>,
    kind: &'static ResourceKind,
    id: Option<String>,
}

impl<'c, T: Transport> Resource<'c, T> {
    pub fn new(client: &'c TeamworkClient<T>, kind: &'static ResourceKind, id: Option<String>) -> Self {
        Self { client, kind, id }
    }

    pub fn client(&self) -> &'c TeamworkClient<T> {
        self.client
    }

    pub fn kind(&self) -> &'static ResourceKind {
        self.kind
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// `{ep}/{id}`, or `{ep}/{id}/{suffix}` when a suffix is given. The id is
    /// percent-encoded as a single path segment.
    pub fn member_path(&self, suffix: Option<&str>) -> Result<String> {
        let raw = self.id.as_deref().ok_or(ApiError::MissingId {
            resource: self.kind.name,
        })?;
        let id: String = form_urlencoded::byte_serialize(raw.as_bytes()).collect();
        Ok(match suffix {
            Some(suffix) => format!("{}/{id}/{suffix}", self.kind.endpoint),
            None => format!("{}/{id}", self.kind.endpoint),
        })
    }

    pub fn list(&self, args: Option<&Args>) -> Result<Value> {
        Ok(self.list_response(args)?.into_payload())
    }

    pub fn list_response(&self, args: Option<&Args>) -> Result<ApiResponse> {
        self.list_at_response(self.kind.endpoint, args)
    }

    /// `GET endpoint` for collections that live outside `{ep}`.
    pub fn list_at(&self, endpoint: &str, args: Option<&Args>) -> Result<Value> {
        Ok(self.list_at_response(endpoint, args)?.into_payload())
    }

    pub fn list_at_response(&self, endpoint: &str, args: Option<&Args>) -> Result<ApiResponse> {
        self.client.get(endpoint, args)?.send()
    }

    pub fn fetch(&self, args: Option<&Args>) -> Result<Value> {
        Ok(self.fetch_response(args)?.into_payload())
    }

    pub fn fetch_response(&self, args: Option<&Args>) -> Result<ApiResponse> {
        self.client.get(&self.member_path(None)?, args)?.send()
    }

    pub fn fetch_nested(&self, suffix: &str, args: Option<&Args>) -> Result<Value> {
        self.client.get(&self.member_path(Some(suffix))?, args)?.response()
    }

    pub fn create(&self, wrapper: &str, args: &Args) -> Result<Value> {
        self.client.post(self.kind.endpoint, &wrap(wrapper, args))?.response()
    }

    pub fn create_nested(&self, suffix: &str, wrapper: &str, args: &Args) -> Result<Value> {
        let path = self.member_path(Some(suffix))?;
        self.client.post(&path, &wrap(wrapper, args))?.response()
    }

    pub fn update(&self, wrapper: &str, args: &Args) -> Result<Value> {
        let path = self.member_path(None)?;
        self.client.put(&path, &wrap(wrapper, args))?.response()
    }

    pub fn update_nested(&self, suffix: &str, wrapper: &str, args: &Args) -> Result<Value> {
        let path = self.member_path(Some(suffix))?;
        self.client.put(&path, &wrap(wrapper, args))?.response()
    }

    /// `PUT {ep}/{id}/{verb}` with an empty body, e.g. `complete`.
    pub fn action(&self, verb: &str) -> Result<Value> {
        let path = self.member_path(Some(verb))?;
        self.client.put(&path, &Value::Null)?.response()
    }

    pub fn destroy(&self) -> Result<Value> {
        self.client.delete(&self.member_path(None)?)?.response()
    }
}

/// `{wrapper: args}`.
pub fn wrap(wrapper: &str, args: &Args) -> Value {
    let mut outer = Args::new();
    outer.insert(wrapper.to_string(), Value::Object(args.clone()));
    Value::Object(outer)
}

/// Access to the underlying `Resource` of a concrete handle. The shared
/// verb traits below are written against it.
pub trait Handle<'c, T: Transport + 'c> {
    fn resource(&self) -> &Resource<'c, T>;
}

/// Find, create, update and delete on `{ep}` using the kind's wrapper key.
pub trait Restful<'c, T: Transport + 'c>: Handle<'c, T> {
    /// `GET {ep}/{id}`.
    fn find(&self) -> Result<Value> {
        self.resource().fetch(None)
    }

    /// `POST {ep}` with `{wrapper: args}`.
    fn create(&self, args: &Args) -> Result<Value> {
        let resource = self.resource();
        resource.create(resource.kind().wrapper, args)
    }

    /// `PUT {ep}/{id}` with `{wrapper: args}`.
    fn update(&self, args: &Args) -> Result<Value> {
        let resource = self.resource();
        resource.update(resource.kind().wrapper, args)
    }

    /// `DELETE {ep}/{id}`.
    fn delete(&self) -> Result<Value> {
        self.resource().destroy()
    }
}

pub const TIME_ENTRY_ARGS: &[&str] = &[
    "page",
    "fromdate",
    "fromtime",
    "todate",
    "totime",
    "sortorder",
    "userId",
    "billableType",
    "invoicedType",
    "projectType",
    "showDeleted",
    "updatedAfterDate",
];

pub const CREATE_TIME_ARGS: &[&str] = &[
    "description",
    "person-id",
    "date",
    "time",
    "hours",
    "minutes",
    "isbillable",
    "tags",
];

/// Time logged against a resource.
pub trait TimeTracking<'c, T: Transport + 'c>: Handle<'c, T> {
    /// `GET {ep}/{id}/time/total`.
    fn time_total(&self, args: Option<&Args>) -> Result<Value> {
        self.resource().fetch_nested("time/total", args)
    }

    /// `GET {ep}/{id}/time_entries`.
    fn time_entries(&self, args: Option<&Args>) -> Result<Value> {
        crate::validation::are_arguments_valid(args, TIME_ENTRY_ARGS)?;
        self.resource().fetch_nested("time_entries", args)
    }

    /// `POST {ep}/{id}/time_entries` with `{"time-entry": args}`.
    fn create_time(&self, args: &Args) -> Result<Value> {
        crate::validation::are_arguments_valid(Some(args), CREATE_TIME_ARGS)?;
        self.resource().create_nested("time_entries", "time-entry", args)
    }
}
