//! Tool definitions module.
//!
//! Operations are grouped by the Pylon resource they act on, one file per
//! resource. The registry lists them in catalog order.

pub mod accounts;
pub mod contacts;
pub mod issues;
pub mod knowledge_bases;
pub mod tags;
pub mod teams;
pub mod ticket_forms;
pub mod users;
pub mod webhooks;
