//! Prompt construction for Mermaid flowchart generation.

use flowchart_llm::{ChatMessage, PromptPayload};

use crate::history::Exchange;

const INPUT_PLACEHOLDER: &str = "{input}";

/// System instruction sent ahead of every request. `{input}` is replaced with
/// the caller's text.
pub const MERMAID_PROMPT_TEMPLATE: &str = "\
You are a flowchart generation assistant. Your task is to generate flowcharts in Mermaid syntax based on the provided instructions.
The flowchart should outline the steps involved in a process, making sure that each step is clearly represented with arrows showing the flow.

CONTEXT:
The context will describe a process, and your task is to visualize it as a flowchart in Mermaid syntax.
You will receive an input question asking for a flowchart, and your goal is to generate the corresponding Mermaid code.
Reply with the Mermaid code only, without any explanation.

QUESTION: {input}

YOUR ANSWER (Mermaid Code):";

/// Build a one-shot prompt for `request`.
///
/// The request is inserted verbatim. An empty request still yields the full
/// template.
pub fn build_prompt(request: &str) -> PromptPayload {
    build_prompt_with_history(request, &[])
}

/// Build a prompt that replays earlier exchanges of a session between the
/// system instruction and the new request.
pub fn build_prompt_with_history(request: &str, history: &[Exchange]) -> PromptPayload {
    let mut messages = Vec::with_capacity(2 + history.len() * 2);
    messages.push(ChatMessage::system(
        MERMAID_PROMPT_TEMPLATE.replace(INPUT_PLACEHOLDER, request),
    ));
    for exchange in history {
        messages.push(ChatMessage::user(exchange.request.clone()));
        messages.push(ChatMessage::assistant(exchange.output.clone()));
    }
    messages.push(ChatMessage::user(request));
    PromptPayload::new(messages)
}
