//! Team tools.

use super::super::operation::{Operation, Param, ParamKind};
use crate::domains::pylon::Endpoint;

pub const GET_TEAMS: Operation =
    Operation::new("get_teams", "Get all teams from Pylon", Endpoint::get("teams"));

pub const GET_TEAM: Operation = Operation::new(
    "get_team",
    "Get a specific team by ID",
    Endpoint::get("teams/{team_id}"),
)
.with_params(&[Param::required("team_id", ParamKind::String, "Team ID")]);

pub const CREATE_TEAM: Operation = Operation::new(
    "create_team",
    "Create a new team",
    Endpoint::post("teams").with_body(&["name", "description", "members"]),
)
.with_params(&[
    Param::required("name", ParamKind::String, "Team name"),
    Param::optional("description", ParamKind::String, "Team description"),
    Param::optional("members", ParamKind::StringArray, "Team member IDs"),
]);
