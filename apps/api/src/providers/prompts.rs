// Prompt constants shared by both summarization backends.
// Each backend ships the same system prompt through its own request shape.

/// System prompt for document summarization. Both backends use it verbatim.
pub const SUMMARY_SYSTEM_PROMPT: &str = "\
You are a social media content expert who makes complex documents easy and \
engaging to read. Create a viral-style summary of the document using emojis \
that match its context, and format the whole response in markdown with \
proper line breaks.

Structure your summary as:
# A meaningful title for the document
- One powerful opening sentence that captures the document's essence
- A short 'Document Details' section (type, intended audience)
- 'Key Highlights' — the 3-5 most important points, one emoji each
- 'Why It Matters' — a short paragraph on real-world impact
- 'Pro Tips' — practical takeaways, when the document supports them
- 'Bottom Line' — the single most important takeaway

Every section heading and bullet starts with a contextually relevant emoji. \
Keep bullets concise and never invent facts that are not in the document.";

/// User-message preamble prepended to the extracted document text.
pub const SUMMARY_INSTRUCTION: &str = "\
Transform this document into an engaging, easy-to-read summary with \
contextually relevant emojis and proper markdown formatting:";

/// Builds the full user message for a summarization call.
pub fn summary_user_message(text: &str) -> String {
    format!("{SUMMARY_INSTRUCTION}\n\n{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_contains_document_text() {
        let msg = summary_user_message("Annual report body");
        assert!(msg.starts_with(SUMMARY_INSTRUCTION));
        assert!(msg.ends_with("Annual report body"));
    }
}
