//! Projects, plus the collections nested under a project.

use serde_json::Value;

use crate::error::Result;
use crate::request::Args;
use crate::resource::{Handle, ResourceKind, Restful, TimeTracking};
use crate::transport::Transport;
use crate::validation::are_arguments_valid;

pub const PROJECTS: ResourceKind = ResourceKind {
    name: "Project",
    endpoint: "projects",
    wrapper: "project",
};

const LIST_ARGS: &[&str] = &[
    "status",
    "updatedAfterDate",
    "updatedAfterTime",
    "orderby",
    "createdAfterDate",
    "createdAfterTime",
    "catId",
    "includePeople",
    "includeProjectOwner",
    "page",
    "pageSize",
    "orderMode",
    "onlyStarredProjects",
    "companyId",
];

const ACTIVITY_ARGS: &[&str] = &["maxItems"];

const MILESTONE_ARGS: &[&str] = &["find", "getProgress"];

const TASKLIST_ARGS: &[&str] = &[
    "status",
    "responsible-party-id",
    "getOverdueCount",
    "getCompletedCount",
    "showMilestones",
    "showTasks",
    "nestSubTasks",
];

resource_handle!(
    /// A project, or the project collection when created without an id.
    Project,
    PROJECTS
);

impl<'c, T: Transport> Project<'c, T> {
    /// `GET projects`.
    pub fn all(&self, args: Option<&Args>) -> Result<Value> {
        are_arguments_valid(args, LIST_ARGS)?;
        self.resource().list(args)
    }

    /// `GET projects/starred`.
    pub fn starred(&self) -> Result<Value> {
        self.resource().list_at("projects/starred", None)
    }

    /// `PUT projects/{id}/star`.
    pub fn star(&self) -> Result<Value> {
        self.resource().action("star")
    }

    /// `PUT projects/{id}/unstar`.
    pub fn unstar(&self) -> Result<Value> {
        self.resource().action("unstar")
    }

    /// `GET projects/{id}/latestActivity`.
    pub fn activity(&self, args: Option<&Args>) -> Result<Value> {
        are_arguments_valid(args, ACTIVITY_ARGS)?;
        self.resource().fetch_nested("latestActivity", args)
    }

    pub fn companies(&self) -> Result<Value> {
        self.resource().fetch_nested("companies", None)
    }

    pub fn people(&self) -> Result<Value> {
        self.resource().fetch_nested("people", None)
    }

    /// `GET projects/{id}/milestones`; `find` is one of
    /// `all|completed|incomplete|late|upcoming`.
    pub fn milestones(&self, args: Option<&Args>) -> Result<Value> {
        are_arguments_valid(args, MILESTONE_ARGS)?;
        self.resource().fetch_nested("milestones", args)
    }

    pub fn tasklists(&self, args: Option<&Args>) -> Result<Value> {
        are_arguments_valid(args, TASKLIST_ARGS)?;
        self.resource().fetch_nested("tasklists", args)
    }

    /// `POST projects/{id}/tasklists` with `{"todo-list": args}`.
    pub fn create_tasklist(&self, args: &Args) -> Result<Value> {
        self.resource().create_nested("tasklists", "todo-list", args)
    }

    /// `POST projects/{id}/milestones` with `{"milestone": args}`.
    pub fn create_milestone(&self, args: &Args) -> Result<Value> {
        self.resource().create_nested("milestones", "milestone", args)
    }
}

impl<'c, T: Transport> Restful<'c, T> for Project<'c, T> {}

impl<'c, T: Transport> TimeTracking<'c, T> for Project<'c, T> {}

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
    fn all_lists_with_whitelisted_query() {
        let client = client(200, r#"{"projects":[]}"#);
        Project::new(&client)
            .all(Some(&args(json!({"status": "ACTIVE"}))))
            .unwrap();
        assert_eq!(
            client.transport().last().url,
            format!("{BASE_URL}/projects.json?status=ACTIVE")
        );
    }

    #[test]
    fn starred_ignores_id() {
        let client = client(200, "{}");
        Project::new(&client).starred().unwrap();
        assert_eq!(
            client.transport().last().url,
            format!("{BASE_URL}/projects/starred.json")
        );
    }

    #[test]
    fn star_and_unstar_are_actions() {
        let client = client(200, "{}");
        let project = Project::with_id(&client, 12);
        project.star().unwrap();
        assert_eq!(client.transport().last().url, format!("{BASE_URL}/projects/12/star.json"));
        project.unstar().unwrap();
        let sent = client.transport().last();
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(sent.url, format!("{BASE_URL}/projects/12/unstar.json"));
    }

    #[test]
    fn activity_validates_max_items() {
        let client = client(200, "{}");
        let project = Project::with_id(&client, 12);
        assert!(matches!(
            project.activity(Some(&args(json!({"limit": 5})))),
            Err(ApiError::InvalidArgument { .. })
        ));
        project.activity(Some(&args(json!({"maxItems": 5})))).unwrap();
        assert_eq!(
            client.transport().last().url,
            format!("{BASE_URL}/projects/12/latestActivity.json?maxItems=5")
        );
    }

    #[test]
    fn nested_collections() {
        let client = client(200, "{}");
        let project = Project::with_id(&client, 3);
        project.companies().unwrap();
        assert_eq!(client.transport().last().url, format!("{BASE_URL}/projects/3/companies.json"));
        project.people().unwrap();
        assert_eq!(client.transport().last().url, format!("{BASE_URL}/projects/3/people.json"));
        project.milestones(Some(&args(json!({"find": "late"})))).unwrap();
        assert_eq!(
            client.transport().last().url,
            format!("{BASE_URL}/projects/3/milestones.json?find=late")
        );
        project.tasklists(None).unwrap();
        assert_eq!(client.transport().last().url, format!("{BASE_URL}/projects/3/tasklists.json"));
    }

    #[test]
    fn create_tasklist_posts_todo_list_wrapper() {
        let client = client(201, r#"{"TASKLISTID":"99"}"#);
        let payload = Project::with_id(&client, 3)
            .create_tasklist(&args(json!({"name": "Launch"})))
            .unwrap();
        assert_eq!(payload["TASKLISTID"], "99");

        let sent = client.transport().last();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, format!("{BASE_URL}/projects/3/tasklists.json"));
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"todo-list": {"name": "Launch"}}));
    }

    #[test]
    fn create_milestone_posts_milestone_wrapper() {
        let client = client(201, "{}");
        Project::with_id(&client, 3)
            .create_milestone(&args(json!({"title": "Beta", "deadline": "20261201"})))
            .unwrap();
        let body: Value =
            serde_json::from_str(client.transport().last().body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"milestone": {"title": "Beta", "deadline": "20261201"}}));
    }

    #[test]
    fn restful_create_and_update_use_project_wrapper() {
        let client = client(200, "{}");
        Project::new(&client)
            .create(&args(json!({"name": "Website"})))
            .unwrap();
        let sent = client.transport().last();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, format!("{BASE_URL}/projects.json"));
        assert_eq!(sent.body.as_deref(), Some(r#"{"project":{"name":"Website"}}"#));

        Project::with_id(&client, 4)
            .update(&args(json!({"name": "Website v2"})))
            .unwrap();
        let sent = client.transport().last();
        assert_eq!(sent.method, HttpMethod::Put);
        assert_eq!(sent.url, format!("{BASE_URL}/projects/4.json"));
    }

    #[test]
    fn create_time_validates_and_wraps() {
        let client = client(201, "{}");
        let project = Project::with_id(&client, 4);
        assert!(matches!(
            project.create_time(&args(json!({"duration": "1h"}))),
            Err(ApiError::InvalidArgument { .. })
        ));
        assert_eq!(client.transport().count(), 0);

        project
            .create_time(&args(json!({"hours": "1", "person-id": "77"})))
            .unwrap();
        let sent = client.transport().last();
        assert_eq!(sent.url, format!("{BASE_URL}/projects/4/time_entries.json"));
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"time-entry": {"hours": "1", "person-id": "77"}}));
    }
}
