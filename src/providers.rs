//! Built-in table of hosted text-generation providers, in preference order.
//!
//! Every provider has the same shape: POST a JSON body to an endpoint with a
//! credential attached, then read generated text from a fixed path in the JSON
//! reply. Differences live in the data below, not in control flow.

use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// `Authorization: Token <key>`
    Token,
    /// Key passed as a query-string parameter.
    QueryKey(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Adapter {
    /// Stable identifier used in config (`DISABLED_PROVIDERS`) and logs.
    pub id: &'static str,
    /// Reported back to callers as `provider`.
    pub name: &'static str,
    pub credential_env: &'static str,
    pub base_env: &'static str,
    pub base_url: &'static str,
    pub path: &'static str,
    pub auth: AuthScheme,
    pub extra_headers: &'static [(&'static str, &'static str)],
    pub build_body: fn(&str) -> Value,
    pub extract: fn(&Value) -> Option<String>,
}

const SYSTEM_PROMPT: &str = "You are a world-class web designer and front-end engineer. \
You produce complete, modern, responsive single-file websites with embedded CSS and JavaScript: \
animated gradient backgrounds, glassmorphism cards, 3D hover transforms, floating and glow animations, \
premium buttons, scroll-triggered reveals and accessible semantic markup. \
Return ONLY pure HTML starting with <!DOCTYPE html> and ending with </html>. No markdown, no explanations.";

fn text_at(value: &Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn chat_body(model: &str, prompt: &str, max_tokens: u32, temperature: f32) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": prompt }
        ],
        "max_tokens": max_tokens,
        "temperature": temperature,
    })
}

fn chat_text(value: &Value) -> Option<String> {
    text_at(value, "/choices/0/message/content")
}

fn together_body(prompt: &str) -> Value {
    let mut body = chat_body("meta-llama/Llama-3.3-70B-Instruct-Turbo", prompt, 4000, 0.8);
    body["top_p"] = json!(0.9);
    body
}

fn replicate_body(prompt: &str) -> Value {
    json!({
        "input": {
            "system_prompt": SYSTEM_PROMPT,
            "prompt": prompt,
            "max_new_tokens": 4000,
            "temperature": 0.8
        }
    })
}

/// Replicate streams tokens into an `output` array.
fn replicate_text(value: &Value) -> Option<String> {
    match value.get("output")? {
        Value::Array(parts) => Some(parts.iter().filter_map(Value::as_str).collect()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn cohere_body(prompt: &str) -> Value {
    json!({
        "model": "command",
        "prompt": format!("{SYSTEM_PROMPT}\n\n{prompt}"),
        "max_tokens": 4000,
        "temperature": 0.8,
        "p": 0.9
    })
}

fn cohere_text(value: &Value) -> Option<String> {
    text_at(value, "/generations/0/text")
}

fn fireworks_body(prompt: &str) -> Value {
    let mut body = chat_body("accounts/fireworks/models/llama-v3p1-70b-instruct", prompt, 4000, 0.8);
    body["top_p"] = json!(0.9);
    body
}

fn huggingface_body(prompt: &str) -> Value {
    json!({
        "inputs": format!("{SYSTEM_PROMPT}\n\n{prompt}"),
        "parameters": {
            "max_new_tokens": 4000,
            "temperature": 0.7,
            "top_p": 0.95,
            "repetition_penalty": 1.1,
            "return_full_text": false
        }
    })
}

/// The inference API answers with either a list of generations or a single object.
fn huggingface_text(value: &Value) -> Option<String> {
    text_at(value, "/0/generated_text").or_else(|| text_at(value, "/generated_text"))
}

fn groq_body(prompt: &str) -> Value {
    chat_body("llama-3.1-8b-instant", prompt, 8000, 0.9)
}

fn gemini_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": format!("{SYSTEM_PROMPT}\n\nUSER REQUEST: {prompt}") }]
        }],
        "generationConfig": {
            "temperature": 0.9,
            "topK": 40,
            "topP": 0.95,
            "maxOutputTokens": 8000
        }
    })
}

fn gemini_text(value: &Value) -> Option<String> {
    text_at(value, "/candidates/0/content/parts/0/text")
}

fn openai_body(prompt: &str) -> Value {
    chat_body("gpt-4o-mini", prompt, 4000, 0.7)
}

pub const TOGETHER: Adapter = Adapter {
    id: "together",
    name: "Together AI",
    credential_env: "TOGETHER_API_KEY",
    base_env: "TOGETHER_API_BASE",
    base_url: "https://api.together.xyz/v1",
    path: "/chat/completions",
    auth: AuthScheme::Bearer,
    extra_headers: &[],
    build_body: together_body,
    extract: chat_text,
};

pub const REPLICATE: Adapter = Adapter {
    id: "replicate",
    name: "Replicate",
    credential_env: "REPLICATE_API_TOKEN",
    base_env: "REPLICATE_API_BASE",
    base_url: "https://api.replicate.com/v1",
    path: "/models/meta/meta-llama-3-70b-instruct/predictions",
    auth: AuthScheme::Token,
    // Block until the prediction finishes instead of returning a pending job.
    extra_headers: &[("Prefer", "wait")],
    build_body: replicate_body,
    extract: replicate_text,
};

pub const COHERE: Adapter = Adapter {
    id: "cohere",
    name: "Cohere",
    credential_env: "COHERE_API_KEY",
    base_env: "COHERE_API_BASE",
    base_url: "https://api.cohere.ai/v1",
    path: "/generate",
    auth: AuthScheme::Bearer,
    extra_headers: &[],
    build_body: cohere_body,
    extract: cohere_text,
};

pub const FIREWORKS: Adapter = Adapter {
    id: "fireworks",
    name: "Fireworks AI",
    credential_env: "FIREWORKS_API_KEY",
    base_env: "FIREWORKS_API_BASE",
    base_url: "https://api.fireworks.ai/inference/v1",
    path: "/chat/completions",
    auth: AuthScheme::Bearer,
    extra_headers: &[],
    build_body: fireworks_body,
    extract: chat_text,
};

pub const HUGGINGFACE: Adapter = Adapter {
    id: "huggingface",
    name: "Hugging Face",
    credential_env: "HUGGINGFACE_API_KEY",
    base_env: "HUGGINGFACE_API_BASE",
    base_url: "https://api-inference.huggingface.co",
    path: "/models/codellama/CodeLlama-7b-Instruct-hf",
    auth: AuthScheme::Bearer,
    extra_headers: &[],
    build_body: huggingface_body,
    extract: huggingface_text,
};

pub const GROQ: Adapter = Adapter {
    id: "groq",
    name: "Groq",
    credential_env: "GROQ_API_KEY",
    base_env: "GROQ_API_BASE",
    base_url: "https://api.groq.com/openai/v1",
    path: "/chat/completions",
    auth: AuthScheme::Bearer,
    extra_headers: &[],
    build_body: groq_body,
    extract: chat_text,
};

pub const GEMINI: Adapter = Adapter {
    id: "gemini",
    name: "Gemini",
    credential_env: "GEMINI_API_KEY",
    base_env: "GEMINI_API_BASE",
    base_url: "https://generativelanguage.googleapis.com/v1beta",
    path: "/models/gemini-1.5-flash:generateContent",
    auth: AuthScheme::QueryKey("key"),
    extra_headers: &[],
    build_body: gemini_body,
    extract: gemini_text,
};

pub const OPENAI: Adapter = Adapter {
    id: "openai",
    name: "OpenAI",
    credential_env: "OPENAI_API_KEY",
    base_env: "OPENAI_API_BASE",
    base_url: "https://api.openai.com/v1",
    path: "/chat/completions",
    auth: AuthScheme::Bearer,
    extra_headers: &[],
    build_body: openai_body,
    extract: chat_text,
};

/// All built-in adapters, most preferred first.
pub const BUILTIN: [Adapter; 8] = [TOGETHER, REPLICATE, COHERE, FIREWORKS, HUGGINGFACE, GROQ, GEMINI, OPENAI];
