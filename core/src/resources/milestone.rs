//! Milestones.

use serde_json::Value;

use crate::error::Result;
use crate::request::Args;
use crate::resource::{Handle, ResourceKind, Restful};
use crate::transport::Transport;
use crate::validation::are_arguments_valid;

pub const MILESTONES: ResourceKind = ResourceKind {
    name: "Milestone",
    endpoint: "milestones",
    wrapper: "milestone",
};

const LIST_ARGS: &[&str] = &["find", "getProgress"];

resource_handle!(Milestone, MILESTONES);

impl<'c, T: Transport> Milestone<'c, T> {
    /// `GET milestones`.
    pub fn all(&self, args: Option<&Args>) -> Result<Value> {
        are_arguments_valid(args, LIST_ARGS)?;
        self.resource().list(args)
    }

    pub fn complete(&self) -> Result<Value> {
        self.resource().action("complete")
    }

    pub fn uncomplete(&self) -> Result<Value> {
        self.resource().action("uncomplete")
    }
}

impl<'c, T: Transport> Restful<'c, T> for Milestone<'c, T> {}
