//! Data transfer objects for the service layer

pub mod requests;
pub mod views;

pub use requests::{NewGroup, NewMember, NewTemplate, UpdateMember};
pub use views::{GroupWithCount, MessageView};
