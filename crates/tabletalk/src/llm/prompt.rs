//! Prompt assembly.
//!
//! Every request becomes the same shape of conversation: one system
//! instruction, the caller's prior turns in their original order, then
//! a single user message holding the dataset context and the question.

use super::message::ChatMessage;

/// Which language the model is asked to reply in.
///
/// This only selects an instruction template. The question itself is
/// never inspected; detecting its language is the model's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyLanguage {
    /// Caller asked for Arabic ("ar").
    Arabic,
    /// Caller asked for English ("en").
    English,
    /// No usable hint: mirror whatever language the question is in.
    #[default]
    MirrorQuestion,
}

impl ReplyLanguage {
    /// Interpret a caller-supplied language hint. Unrecognized hints
    /// fall back to mirroring the question.
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint.map(str::trim) {
            Some(h) if h.eq_ignore_ascii_case("ar") || h.eq_ignore_ascii_case("arabic") => {
                ReplyLanguage::Arabic
            }
            Some(h) if h.eq_ignore_ascii_case("en") || h.eq_ignore_ascii_case("english") => {
                ReplyLanguage::English
            }
            _ => ReplyLanguage::MirrorQuestion,
        }
    }

    /// The system instruction for this reply language.
    pub fn instruction(&self) -> &'static str {
        match self {
            ReplyLanguage::Arabic => {
                "You are a helpful data analyst. Use the given table summary to answer user \
                 queries precisely. Answer in Arabic, keeping column names and numbers exactly \
                 as they appear in the data."
            }
            ReplyLanguage::English => {
                "You are a helpful data analyst. Use the given table summary to answer user \
                 queries precisely. Answer in English."
            }
            ReplyLanguage::MirrorQuestion => {
                "You are a helpful data analyst. Use the given table summary to answer user \
                 queries precisely. Answer in the same language as the user's question."
            }
        }
    }
}

/// Assemble the message list for one question.
///
/// The result is always `history.len() + 2` messages and the final
/// message always ends with the question text.
pub fn assemble(
    language: ReplyLanguage,
    context: &str,
    history: &[ChatMessage],
    question: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(language.instruction()));
    messages.extend(history.iter().cloned());
    messages.push(ChatMessage::user(format!("{context}\n\n{question}")));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::message::Role;

    #[test]
    fn test_hint_parsing() {
        assert_eq!(ReplyLanguage::from_hint(Some("ar")), ReplyLanguage::Arabic);
        assert_eq!(ReplyLanguage::from_hint(Some("AR ")), ReplyLanguage::Arabic);
        assert_eq!(
            ReplyLanguage::from_hint(Some("arabic")),
            ReplyLanguage::Arabic
        );
        assert_eq!(ReplyLanguage::from_hint(Some("en")), ReplyLanguage::English);
        assert_eq!(
            ReplyLanguage::from_hint(Some("klingon")),
            ReplyLanguage::MirrorQuestion
        );
        assert_eq!(ReplyLanguage::from_hint(None), ReplyLanguage::MirrorQuestion);
    }

    #[test]
    fn test_assemble_shape() {
        let history = vec![
            ChatMessage::user("what is this data?"),
            ChatMessage::assistant("A small sales table."),
        ];
        let messages = assemble(
            ReplyLanguage::MirrorQuestion,
            "Columns: a",
            &history,
            "what is the mean of a?",
        );

        assert_eq!(messages.len(), 2 + history.len());
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1], history[0]);
        assert_eq!(messages[2], history[1]);
        assert_eq!(messages[3].role, Role::User);
        assert!(messages[3].content.ends_with("what is the mean of a?"));
        assert!(messages[3].content.starts_with("Columns: a"));
    }

    #[test]
    fn test_arabic_question_passes_through() {
        let question = "ما هو المتوسط؟";
        let messages = assemble(
            ReplyLanguage::from_hint(Some("ar")),
            "Columns: a",
            &[],
            question,
        );

        assert_eq!(messages.len(), 2);
        assert!(messages[0].content.contains("Answer in Arabic"));
        assert!(messages[1].content.ends_with(question));
    }
}
