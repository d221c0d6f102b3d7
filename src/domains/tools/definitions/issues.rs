//! Issue tools.
//!
//! Issues are Pylon's support tickets. Besides the CRUD-style calls this
//! covers snoozing and the message thread attached to each issue.

use super::super::operation::{Operation, Param, ParamKind};
use crate::domains::pylon::Endpoint;

const ISSUE_ID: Param = Param::required("issue_id", ParamKind::String, "Issue ID");

/// Fields that can be set when creating or updating an issue.
const ISSUE_FIELDS: &[&str] = &["title", "description", "status", "priority", "assignee"];

pub const GET_ISSUES: Operation = Operation::new(
    "get_issues",
    "Get issues from Pylon with optional filtering",
    Endpoint::get("issues").with_query(&["assignee", "status", "limit"]),
)
.with_params(&[
    Param::optional("assignee", ParamKind::String, "Filter by assignee"),
    Param::optional("status", ParamKind::String, "Filter by status"),
    Param::optional(
        "limit",
        ParamKind::Number,
        "Maximum number of issues to return",
    ),
]);

pub const CREATE_ISSUE: Operation = Operation::new(
    "create_issue",
    "Create a new issue in Pylon",
    Endpoint::post("issues").with_body(ISSUE_FIELDS),
)
.with_params(&[
    Param::required("title", ParamKind::String, "Issue title"),
    Param::required("description", ParamKind::String, "Issue description"),
    Param::required("status", ParamKind::String, "Issue status"),
    Param::required("priority", ParamKind::String, "Issue priority"),
    Param::optional("assignee", ParamKind::String, "Issue assignee"),
]);

pub const SEARCH_ISSUES: Operation = Operation::new(
    "search_issues",
    "Search for issues in Pylon",
    Endpoint::get("issues/search").with_query(&["query", "filters"]),
)
.with_params(&[
    Param::required("query", ParamKind::String, "Search query for issues"),
    Param::optional("filters", ParamKind::Object, "Additional search filters"),
]);

pub const GET_ISSUE: Operation = Operation::new(
    "get_issue",
    "Get a specific issue by ID",
    Endpoint::get("issues/{issue_id}"),
)
.with_params(&[ISSUE_ID]);

pub const UPDATE_ISSUE: Operation = Operation::new(
    "update_issue",
    "Update an existing issue",
    Endpoint::patch("issues/{issue_id}").with_body(ISSUE_FIELDS),
)
.with_params(&[
    ISSUE_ID,
    Param::optional("title", ParamKind::String, "Issue title"),
    Param::optional("description", ParamKind::String, "Issue description"),
    Param::optional("status", ParamKind::String, "Issue status"),
    Param::optional("priority", ParamKind::String, "Issue priority"),
    Param::optional("assignee", ParamKind::String, "Issue assignee"),
]);

pub const SNOOZE_ISSUE: Operation = Operation::new(
    "snooze_issue",
    "Snooze an issue until a specified time",
    Endpoint::post("issues/{issue_id}/snooze").with_body(&["until"]),
)
.with_params(&[
    ISSUE_ID,
    Param::required(
        "until",
        ParamKind::String,
        "Snooze until date/time (ISO format)",
    ),
])
.with_confirmation("Issue snoozed successfully");

pub const GET_ISSUE_MESSAGES: Operation = Operation::new(
    "get_issue_messages",
    "Get messages for a specific issue",
    Endpoint::get("issues/{issue_id}/messages"),
)
.with_params(&[ISSUE_ID]);

pub const CREATE_ISSUE_MESSAGE: Operation = Operation::new(
    "create_issue_message",
    "Create a new message for an issue",
    Endpoint::post("issues/{issue_id}/messages").with_body(&["content"]),
)
.with_params(&[
    ISSUE_ID,
    Param::required("content", ParamKind::String, "Message content"),
]);
