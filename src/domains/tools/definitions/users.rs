//! User tools: the authenticated user and the organization's users.

use super::super::operation::{Operation, Param, ParamKind};
use crate::domains::pylon::Endpoint;

pub const GET_ME: Operation = Operation::new(
    "get_me",
    "Get current user information from Pylon",
    Endpoint::get("me"),
);

pub const GET_USERS: Operation =
    Operation::new("get_users", "Get all users from Pylon", Endpoint::get("users"));

pub const SEARCH_USERS: Operation = Operation::new(
    "search_users",
    "Search for users in Pylon",
    Endpoint::get("users/search").with_query(&["query"]),
)
.with_params(&[Param::required(
    "query",
    ParamKind::String,
    "Search query for users",
)]);
