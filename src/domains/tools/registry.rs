//! Tool Registry - the static catalog of all Pylon tools.
//!
//! This module provides:
//! - The ordered list of every [`Operation`]
//! - Lookup by exact tool name
//! - Tool metadata for listing

use rmcp::model::Tool;

use super::definitions::{
    accounts, contacts, issues, knowledge_bases, tags, teams, ticket_forms, users, webhooks,
};
use super::operation::Operation;

/// Every tool exposed by the server, in the order clients see them.
const CATALOG: &[Operation] = &[
    users::GET_ME,
    contacts::GET_CONTACTS,
    contacts::CREATE_CONTACT,
    issues::GET_ISSUES,
    issues::CREATE_ISSUE,
    knowledge_bases::GET_KNOWLEDGE_BASES,
    knowledge_bases::GET_KNOWLEDGE_BASE_ARTICLES,
    knowledge_bases::CREATE_KNOWLEDGE_BASE_ARTICLE,
    teams::GET_TEAMS,
    teams::GET_TEAM,
    teams::CREATE_TEAM,
    accounts::GET_ACCOUNTS,
    accounts::GET_ACCOUNT,
    users::SEARCH_USERS,
    users::GET_USERS,
    contacts::SEARCH_CONTACTS,
    issues::SEARCH_ISSUES,
    issues::GET_ISSUE,
    issues::UPDATE_ISSUE,
    issues::SNOOZE_ISSUE,
    issues::GET_ISSUE_MESSAGES,
    issues::CREATE_ISSUE_MESSAGE,
    tags::GET_TAGS,
    tags::CREATE_TAG,
    ticket_forms::GET_TICKET_FORMS,
    ticket_forms::CREATE_TICKET_FORM,
    webhooks::GET_WEBHOOKS,
    webhooks::CREATE_WEBHOOK,
    webhooks::DELETE_WEBHOOK,
];

/// Tool registry - read-only access to the catalog.
pub struct ToolRegistry;

impl ToolRegistry {
    /// All operations, in catalog order.
    pub fn operations() -> &'static [Operation] {
        CATALOG
    }

    /// Find an operation by exact name.
    pub fn find(name: &str) -> Option<&'static Operation> {
        CATALOG.iter().find(|op| op.name == name)
    }

    /// Get all tool names.
    #[cfg(test)]
    pub fn tool_names() -> Vec<&'static str> {
        CATALOG.iter().map(|op| op.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        CATALOG.iter().map(Operation::to_tool).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 29);
        assert_eq!(names.first(), Some(&"get_me"));
        assert_eq!(names.last(), Some(&"delete_webhook"));
        assert!(names.contains(&"create_contact"));
        assert!(names.contains(&"snooze_issue"));
        assert!(names.contains(&"create_knowledge_base_article"));
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = ToolRegistry::tool_names().into_iter().collect();
        assert_eq!(names.len(), ToolRegistry::operations().len());
    }

    #[test]
    fn test_descriptions_are_not_empty() {
        for op in ToolRegistry::operations() {
            assert!(!op.description.is_empty(), "{} has no description", op.name);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(ToolRegistry::find("get_team").map(|op| op.name), Some("get_team"));
        assert!(ToolRegistry::find("GET_TEAM").is_none());
        assert!(ToolRegistry::find("pylon_get_team").is_none());
    }

    #[test]
    fn test_required_arguments_match_catalog() {
        let required = |name: &str| -> Vec<&str> {
            ToolRegistry::find(name).unwrap().required().collect()
        };

        assert!(required("get_me").is_empty());
        assert!(required("get_contacts").is_empty());
        assert_eq!(required("create_contact"), ["email", "name"]);
        assert_eq!(
            required("create_issue"),
            ["title", "description", "status", "priority"]
        );
        assert_eq!(
            required("create_knowledge_base_article"),
            ["knowledge_base_id", "title", "content"]
        );
        assert_eq!(required("snooze_issue"), ["issue_id", "until"]);
        assert_eq!(required("create_ticket_form"), ["name", "fields"]);
        assert_eq!(required("create_webhook"), ["url", "events"]);
        assert_eq!(required("delete_webhook"), ["webhook_id"]);
    }

    #[test]
    fn test_path_params_are_required_params() {
        for op in ToolRegistry::operations() {
            for name in op.endpoint.path_params() {
                assert!(
                    op.required().any(|r| r == name),
                    "{}: path parameter {} is not a required argument",
                    op.name,
                    name
                );
            }
        }
    }

    #[test]
    fn test_query_and_body_keys_are_declared() {
        for op in ToolRegistry::operations() {
            for key in op.endpoint.query.iter().chain(op.endpoint.body) {
                assert!(
                    op.params.iter().any(|p| p.name == *key),
                    "{}: {} is sent but not declared",
                    op.name,
                    key
                );
            }
        }
    }

    #[test]
    fn test_get_all_tools() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 29);
        assert!(tools.iter().all(|t| t.input_schema.get("type").is_some()));
    }
}
