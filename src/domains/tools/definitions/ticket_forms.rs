//! Ticket form tools.

use super::super::operation::{Operation, Param, ParamKind};
use crate::domains::pylon::Endpoint;

pub const GET_TICKET_FORMS: Operation = Operation::new(
    "get_ticket_forms",
    "Get all ticket forms from Pylon",
    Endpoint::get("ticket-forms"),
);

pub const CREATE_TICKET_FORM: Operation = Operation::new(
    "create_ticket_form",
    "Create a new ticket form",
    Endpoint::post("ticket-forms").with_body(&["name", "description", "fields"]),
)
.with_params(&[
    Param::required("name", ParamKind::String, "Form name"),
    Param::optional("description", ParamKind::String, "Form description"),
    // Field objects are passed through to Pylon as-is.
    Param::required("fields", ParamKind::Array, "Form fields configuration"),
]);
