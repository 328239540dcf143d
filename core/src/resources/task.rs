//! Tasks (`todo-items` in the service's payloads).

use serde_json::Value;

use crate::error::Result;
use crate::request::Args;
use crate::resource::{Handle, ResourceKind, Restful, TimeTracking};
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::validation::are_arguments_valid;

pub const TASKS: ResourceKind = ResourceKind {
    name: "Task",
    endpoint: "tasks",
    wrapper: "task",
};

const LIST_ARGS: &[&str] = &[
    "filter",
    "page",
    "pageSize",
    "startdate",
    "enddate",
    "updatedAfterDate",
    "completedAfterDate",
    "completedBeforeDate",
    "showDeleted",
    "includeCompletedTasks",
    "includeCompletedSubtasks",
    "creator-ids",
    "include",
    "responsible-party-ids",
    "sort",
    "getSubTasks",
    "nestSubTasks",
    "getFiles",
    "dataSet",
    "includeToday",
    "ignore-start-date",
];

const LIST_V2_ARGS: &[&str] = &[
    "filter",
    "page",
    "pageSize",
    "startdate",
    "enddate",
    "updatedAfterDate",
    "completedAfterDate",
    "completedBeforeDate",
    "showDeleted",
    "includeCompletedTasks",
    "includeCompletedSubtasks",
    "creator-ids",
    "include",
    "responsible-party-ids",
    "sort",
    "getSubTasks",
    "nestSubTasks",
    "getFiles",
    "dataSet",
    "includeToday",
    "ignore-start-date",
    "includeCustomFields",
];

const V2_ENDPOINT: &str = "projects/api/v2/tasks";

resource_handle!(
    /// A task, or the task collection when created without an id.
    Task,
    TASKS
);

impl<'c, T: Transport> Task<'c, T> {
    /// `GET tasks`.
    pub fn all(&self, args: Option<&Args>) -> Result<Value> {
        are_arguments_valid(args, LIST_ARGS)?;
        self.resource().list(args)
    }

    /// Like `all`, keeping status and headers (`X-Page`, `X-Pages`, `X-Records`).
    pub fn all_response(&self, args: Option<&Args>) -> Result<ApiResponse> {
        are_arguments_valid(args, LIST_ARGS)?;
        self.resource().list_response(args)
    }

    /// `GET projects/api/v2/tasks`.
    pub fn all_v2(&self, args: Option<&Args>) -> Result<Value> {
        are_arguments_valid(args, LIST_V2_ARGS)?;
        self.resource().list_at(V2_ENDPOINT, args)
    }

    pub fn all_v2_response(&self, args: Option<&Args>) -> Result<ApiResponse> {
        are_arguments_valid(args, LIST_V2_ARGS)?;
        self.resource().list_at_response(V2_ENDPOINT, args)
    }

    /// `GET tasks/{id}`.
    pub fn get(&self, args: Option<&Args>) -> Result<Value> {
        self.resource().fetch(args)
    }

    /// `PUT tasks/{id}` with `{"todo-item": args}`.
    pub fn edit(&self, args: &Args) -> Result<Value> {
        self.resource().update("todo-item", args)
    }

    /// `PUT tasks/{id}/complete`.
    pub fn complete(&self) -> Result<Value> {
        self.resource().action("complete")
    }

    /// `PUT tasks/{id}/uncomplete`.
    pub fn uncomplete(&self) -> Result<Value> {
        self.resource().action("uncomplete")
    }

    /// `PUT tasks/{id}/files` with `{"task": args}`, e.g. `pendingFileAttachments`.
    pub fn attach_files(&self, args: &Args) -> Result<Value> {
        self.resource().update_nested("files", TASKS.wrapper, args)
    }
}

impl<'c, T: Transport> Restful<'c, T> for Task<'c, T> {}

impl<'c, T: Transport> TimeTracking<'c, T> for Task<'c, T> {}
