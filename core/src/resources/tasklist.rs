//! Task lists (`todo-lists`).

use serde_json::Value;

use crate::error::Result;
use crate::request::Args;
use crate::resource::{Handle, ResourceKind, Restful, TimeTracking};
use crate::transport::Transport;
use crate::validation::are_arguments_valid;

pub const TASKLISTS: ResourceKind = ResourceKind {
    name: "Tasklist",
    endpoint: "tasklists",
    wrapper: "todo-list",
};

const LIST_ARGS: &[&str] = &[
    "projectIds",
    "status",
    "page",
    "pageSize",
    "showMilestones",
    "getOverdueCount",
    "getCompletedCount",
];

const TASK_ARGS: &[&str] = &[
    "filter",
    "page",
    "pageSize",
    "startdate",
    "enddate",
    "include",
    "responsible-party-ids",
    "sort",
    "getSubTasks",
    "nestSubTasks",
    "includeCompletedTasks",
    "includeCompletedSubtasks",
    "showDeleted",
];

resource_handle!(
    /// A task list, or the task list collection when created without an id.
    Tasklist,
    TASKLISTS
);

impl<'c, T: Transport> Tasklist<'c, T> {
    /// `GET tasklists`.
    pub fn all(&self, args: Option<&Args>) -> Result<Value> {
        are_arguments_valid(args, LIST_ARGS)?;
        self.resource().list(args)
    }

    /// `GET tasklists/{id}/tasks`.
    pub fn tasks(&self, args: Option<&Args>) -> Result<Value> {
        are_arguments_valid(args, TASK_ARGS)?;
        self.resource().fetch_nested("tasks", args)
    }

    /// `POST tasklists/{id}/tasks` with `{"todo-item": args}`.
    pub fn create_task(&self, args: &Args) -> Result<Value> {
        self.resource().create_nested("tasks", "todo-item", args)
    }
}

impl<'c, T: Transport> Restful<'c, T> for Tasklist<'c, T> {}

impl<'c, T: Transport> TimeTracking<'c, T> for Tasklist<'c, T> {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ApiError;
    use crate::http::HttpMethod;
    use crate::testing::{client, BASE_URL};

    fn args(value: Value) -> Args {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn tasks_lists_nested_tasks() {
        let client = client(200, r#"{"todo-items":[]}"#);
        Tasklist::with_id(&client, 21)
            .tasks(Some(&args(json!({"filter": "today"}))))
            .unwrap();
        assert_eq!(
            client.transport().last().url,
            format!("{BASE_URL}/tasklists/21/tasks.json?filter=today")
        );
    }

    #[test]
    fn tasks_rejects_unknown_filter_names() {
        let client = client(200, "{}");
        let err = Tasklist::with_id(&client, 21)
            .tasks(Some(&args(json!({"dataSet": "full"}))))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { .. }));
    }

    #[test]
    fn create_task_posts_todo_item() {
        let client = client(201, r#"{"id":"501"}"#);
        let payload = Tasklist::with_id(&client, 21)
            .create_task(&args(json!({"content": "Ship it"})))
            .unwrap();
        assert_eq!(payload["id"], "501");

        let sent = client.transport().last();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, format!("{BASE_URL}/tasklists/21/tasks.json"));
        assert_eq!(sent.body.as_deref(), Some(r#"{"todo-item":{"content":"Ship it"}}"#));
    }

    #[test]
    fn update_uses_todo_list_wrapper() {
        let client = client(200, "{}");
        Tasklist::with_id(&client, 21)
            .update(&args(json!({"name": "Renamed"})))
            .unwrap();
        assert_eq!(
            client.transport().last().body.as_deref(),
            Some(r#"{"todo-list":{"name":"Renamed"}}"#)
        );
    }

    #[test]
    fn all_lists_collection() {
        let client = client(200, "{}");
        Tasklist::new(&client).all(None).unwrap();
        assert_eq!(client.transport().last().url, format!("{BASE_URL}/tasklists.json"));
    }
}
