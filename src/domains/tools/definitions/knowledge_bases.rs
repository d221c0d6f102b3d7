//! Knowledge base tools.

use super::super::operation::{Operation, Param, ParamKind};
use crate::domains::pylon::Endpoint;

const KNOWLEDGE_BASE_ID: Param =
    Param::required("knowledge_base_id", ParamKind::String, "Knowledge base ID");

pub const GET_KNOWLEDGE_BASES: Operation = Operation::new(
    "get_knowledge_bases",
    "Get all knowledge bases from Pylon",
    Endpoint::get("knowledge-bases"),
);

pub const GET_KNOWLEDGE_BASE_ARTICLES: Operation = Operation::new(
    "get_knowledge_base_articles",
    "Get articles from a specific knowledge base",
    Endpoint::get("knowledge-bases/{knowledge_base_id}/articles"),
)
.with_params(&[KNOWLEDGE_BASE_ID]);

pub const CREATE_KNOWLEDGE_BASE_ARTICLE: Operation = Operation::new(
    "create_knowledge_base_article",
    "Create a new article in a knowledge base",
    Endpoint::post("knowledge-bases/{knowledge_base_id}/articles").with_body(&["title", "content"]),
)
.with_params(&[
    KNOWLEDGE_BASE_ID,
    Param::required("title", ParamKind::String, "Article title"),
    Param::required("content", ParamKind::String, "Article content"),
]);
