use super::super::operation::{Operation, Param, ParamKind};
use crate::domains::pylon::Endpoint;

pub const GET_TAGS: Operation =
    Operation::new("get_tags", "Get all tags from Pylon", Endpoint::get("tags"));

pub const CREATE_TAG: Operation = Operation::new(
    "create_tag",
    "Create a new tag",
    Endpoint::post("tags").with_body(&["name", "color"]),
)
.with_params(&[
    Param::required("name", ParamKind::String, "Tag name"),
    Param::optional("color", ParamKind::String, "Tag color"),
]);
