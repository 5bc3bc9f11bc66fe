//! Tool catalog and typed tool calls
//!
//! Loosely-typed `arguments` objects are validated into a [`ToolCall`]
//! before anything touches the knowledge base.

use once_cell::sync::Lazy;
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::{json, Value};
use wp_common::{Result, WpError};
use wp_core::render::{render_concept, render_outline, render_search, render_section};
use wp_core::{get_concept, get_section, search, KnowledgeBase, Presentation};

pub const SEARCH_WHITEPAPER: &str = "search_whitepaper";
pub const GET_SECTION: &str = "get_section";
pub const LIST_SECTIONS: &str = "list_sections";
pub const GET_KEY_CONCEPTS: &str = "get_key_concepts";

#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct SearchWhitepaperArgs {
    /// Search query to find relevant information in the whitepaper
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct GetSectionArgs {
    /// Name of the section to retrieve
    pub section: String,
}

#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct ListSectionsArgs {}

#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct GetKeyConceptsArgs {
    /// Name of the concept to explain
    pub concept: String,
}

/// A validated tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    SearchWhitepaper(SearchWhitepaperArgs),
    GetSection(GetSectionArgs),
    ListSections,
    GetKeyConcepts(GetKeyConceptsArgs),
}

impl ToolCall {
    /// Validate `arguments` for the tool called `name`
    ///
    /// Absent, null or empty required strings fail with `MissingParameter`;
    /// non-string values with `InvalidParams`.
    pub fn parse(name: &str, arguments: &Value) -> Result<Self> {
        match name {
            SEARCH_WHITEPAPER => Ok(ToolCall::SearchWhitepaper(SearchWhitepaperArgs {
                query: required_str(arguments, "query")?,
            })),
            GET_SECTION => Ok(ToolCall::GetSection(GetSectionArgs {
                section: required_str(arguments, "section")?,
            })),
            LIST_SECTIONS => Ok(ToolCall::ListSections),
            GET_KEY_CONCEPTS => Ok(ToolCall::GetKeyConcepts(GetKeyConceptsArgs {
                concept: required_str(arguments, "concept")?,
            })),
            _ => Err(WpError::MethodNotFound {
                kind: "tool",
                name: name.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::SearchWhitepaper(_) => SEARCH_WHITEPAPER,
            ToolCall::GetSection(_) => GET_SECTION,
            ToolCall::ListSections => LIST_SECTIONS,
            ToolCall::GetKeyConcepts(_) => GET_KEY_CONCEPTS,
        }
    }

    /// Run the tool and render its text answer
    pub fn execute(&self, kb: &KnowledgeBase, presentation: &Presentation) -> Result<String> {
        match self {
            ToolCall::SearchWhitepaper(args) => {
                let results = search(kb.whitepaper(), &args.query);
                Ok(render_search(&args.query, &results, presentation))
            }
            ToolCall::GetSection(args) => {
                let found = get_section(kb.whitepaper(), &args.section)?;
                Ok(render_section(&found))
            }
            ToolCall::ListSections => Ok(render_outline(kb.whitepaper())),
            ToolCall::GetKeyConcepts(args) => {
                let found = get_concept(kb.glossary(), &args.concept)?;
                Ok(render_concept(&args.concept, &found))
            }
        }
    }
}

fn required_str(arguments: &Value, key: &str) -> Result<String> {
    match arguments.get(key) {
        None | Some(Value::Null) => Err(WpError::MissingParameter(key.to_string())),
        Some(Value::String(s)) if s.is_empty() => Err(WpError::MissingParameter(key.to_string())),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(WpError::InvalidParams(format!(
            "{} must be a string, got {}",
            key, other
        ))),
    }
}

/// Wrap tool output in the `content` envelope
pub fn text_result(text: String) -> Value {
    json!({
        "content": [
            { "type": "text", "text": text }
        ]
    })
}

/// Entry of `tools/list`
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

static INPUT_SCHEMAS: Lazy<[Value; 4]> = Lazy::new(|| {
    [
        input_schema::<SearchWhitepaperArgs>(),
        input_schema::<GetSectionArgs>(),
        input_schema::<ListSectionsArgs>(),
        input_schema::<GetKeyConceptsArgs>(),
    ]
});

fn input_schema<T: JsonSchema>() -> Value {
    let generator = SchemaSettings::draft07()
        .with(|s| s.meta_schema = None)
        .into_generator();
    let mut schema = serde_json::to_value(generator.into_root_schema_for::<T>())
        .unwrap_or_else(|_| json!({ "type": "object" }));

    if let Value::Object(map) = &mut schema {
        map.remove("title");
        map.entry("properties").or_insert_with(|| json!({}));
    }
    schema
}

/// The four tools, with descriptions naming the paper's subject
pub fn catalog(subject: &str) -> Vec<ToolDescriptor> {
    let [search, section, list, concepts] = (*INPUT_SCHEMAS).clone();
    vec![
        ToolDescriptor {
            name: SEARCH_WHITEPAPER,
            description: format!("Search for information in the {} whitepaper", subject),
            input_schema: search,
        },
        ToolDescriptor {
            name: GET_SECTION,
            description: "Get a specific section of the whitepaper".to_string(),
            input_schema: section,
        },
        ToolDescriptor {
            name: LIST_SECTIONS,
            description: "List all sections and subsections in the whitepaper".to_string(),
            input_schema: list,
        },
        ToolDescriptor {
            name: GET_KEY_CONCEPTS,
            description: format!("Get an explanation of key concepts in the {}", subject),
            input_schema: concepts,
        },
    ]
}
