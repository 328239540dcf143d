//! Concrete resource families.
//!
//! Each one is a newtype over `Resource` with a fixed `ResourceKind` and the
//! domain methods (and whitelists) for that family.

/// Declares a resource newtype with `new` / `with_id` constructors and its
/// `Handle` impl.
macro_rules! resource_handle {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        pub struct $name<'c, T>($crate::resource::Resource<'c, T>);

        impl<'c, T: $crate::transport::Transport> $name<'c, T> {
            /// Handle for collection-level calls.
            pub fn new(client: &'c $crate::client::TeamworkClient<T>) -> Self {
                Self($crate::resource::Resource::new(client, &$kind, None))
            }

            /// Handle bound to one remote entity.
            pub fn with_id(
                client: &'c $crate::client::TeamworkClient<T>,
                id: impl ::std::string::ToString,
            ) -> Self {
                Self($crate::resource::Resource::new(client, &$kind, Some(id.to_string())))
            }
        }

        impl<'c, T: $crate::transport::Transport> $crate::resource::Handle<'c, T> for $name<'c, T> {
            fn resource(&self) -> &$crate::resource::Resource<'c, T> {
                &self.0
            }
        }
    };
}

mod milestone;
mod project;
mod task;
mod tasklist;

pub use milestone::{Milestone, MILESTONES};
pub use project::{Project, PROJECTS};
pub use task::{Task, TASKS};
pub use tasklist::{Tasklist, TASKLISTS};
