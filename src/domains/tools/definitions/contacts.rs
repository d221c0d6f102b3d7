//! Contact tools.

use super::super::operation::{Operation, Param, ParamKind};
use crate::domains::pylon::Endpoint;

pub const GET_CONTACTS: Operation = Operation::new(
    "get_contacts",
    "Get contacts from Pylon with optional search and limit",
    Endpoint::get("contacts").with_query(&["search", "limit"]),
)
.with_params(&[
    Param::optional("search", ParamKind::String, "Search term for contacts"),
    Param::optional(
        "limit",
        ParamKind::Number,
        "Maximum number of contacts to return",
    ),
]);

pub const CREATE_CONTACT: Operation = Operation::new(
    "create_contact",
    "Create a new contact in Pylon",
    Endpoint::post("contacts").with_body(&["email", "name", "portal_role"]),
)
.with_params(&[
    Param::required("email", ParamKind::String, "Contact email address"),
    Param::required("name", ParamKind::String, "Contact name"),
    Param::optional("portal_role", ParamKind::String, "Portal role for the contact"),
]);

pub const SEARCH_CONTACTS: Operation = Operation::new(
    "search_contacts",
    "Search for contacts in Pylon",
    Endpoint::get("contacts/search").with_query(&["query"]),
)
.with_params(&[Param::required(
    "query",
    ParamKind::String,
    "Search query for contacts",
)]);
