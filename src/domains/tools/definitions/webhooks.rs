//! Webhook tools.

use super::super::operation::{Operation, Param, ParamKind};
use crate::domains::pylon::Endpoint;

pub const GET_WEBHOOKS: Operation = Operation::new(
    "get_webhooks",
    "Get all webhooks from Pylon",
    Endpoint::get("webhooks"),
);

pub const CREATE_WEBHOOK: Operation = Operation::new(
    "create_webhook",
    "Create a new webhook",
    Endpoint::post("webhooks").with_body(&["url", "events", "active"]),
)
.with_params(&[
    Param::required("url", ParamKind::String, "Webhook URL"),
    Param::required("events", ParamKind::StringArray, "Events to listen for"),
    Param::optional("active", ParamKind::Boolean, "Whether webhook is active"),
]);

pub const DELETE_WEBHOOK: Operation = Operation::new(
    "delete_webhook",
    "Delete a webhook",
    Endpoint::delete("webhooks/{webhook_id}"),
)
.with_params(&[Param::required("webhook_id", ParamKind::String, "Webhook ID")])
.with_confirmation("Webhook deleted successfully");
