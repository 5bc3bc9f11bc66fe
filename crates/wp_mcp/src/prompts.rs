//! Canned prompts
//!
//! Each prompt expands to a fixed instruction string; there is no templating.

use serde::Serialize;
use serde_json::{json, Value};
use wp_common::{Result, WpError};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CannedPrompt {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub text: &'static str,
}

pub static PROMPTS: [CannedPrompt; 4] = [
    CannedPrompt {
        name: "whitepaper_summary",
        description: "Get a summary of the entire Succinct Network whitepaper",
        text: "Provide a concise summary of the Succinct Network whitepaper, highlighting its key innovations and main components.",
    },
    CannedPrompt {
        name: "proof_contests_explained",
        description: "Get a detailed explanation of how proof contests work",
        text: "Explain in detail how proof contests work in the Succinct Network, including the mechanism design, incentives, and how they balance cost-effectiveness with decentralization.",
    },
    CannedPrompt {
        name: "network_architecture",
        description: "Get an overview of the Succinct Network architecture",
        text: "Describe the architecture of the Succinct Network, including how users and provers interact with the system, and how the application-specific blockchain is designed.",
    },
    CannedPrompt {
        name: "applications",
        description: "Learn about potential applications of the Succinct Network",
        text: "What are the potential applications of the Succinct Network? How can it be used to enhance existing systems or enable new use cases?",
    },
];

pub fn find(name: &str) -> Option<&'static CannedPrompt> {
    PROMPTS.iter().find(|p| p.name == name)
}

/// `prompts/list` result
pub fn list() -> Value {
    json!({ "prompts": PROMPTS })
}

/// `prompts/get` result for `name`
pub fn get(name: Option<&str>) -> Result<Value> {
    let name = name.ok_or_else(|| WpError::InvalidParams("Missing prompt name".to_string()))?;
    let prompt = find(name).ok_or_else(|| WpError::InvalidParams(format!("Unknown prompt: {}", name)))?;

    Ok(json!({
        "description": prompt.description,
        "messages": [
            {
                "role": "user",
                "content": { "type": "text", "text": prompt.text }
            }
        ]
    }))
}
