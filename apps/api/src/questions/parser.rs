//! Response Parser — extracts the question array from a raw model reply.
//!
//! Model replies are JSON in theory, but in practice arrive wrapped in
//! markdown code fences, surrounded by prose, or as an object with a
//! `questions` key. The parser tolerates all of these; a reply with no
//! locatable question array is a `MalformedResponse` error, never a silent
//! empty list.

use serde_json::Value;

use crate::errors::AppError;
use crate::models::question::Question;

/// Extracts the ordered question list from a raw LLM reply.
///
/// Tried in order:
/// 1. a fenced ```json (or bare ```) block containing an array,
/// 2. the first bracket-matched `[` … `]` span anywhere in the reply,
/// 3. the whole reply as JSON — an array, an object with a `questions`
///    array, or any array value inside an object.
///
/// Array elements that are not question-shaped (no `question` string) are
/// skipped; a reply yielding zero questions fails.
pub fn extract_questions(reply: &str) -> Result<Vec<Question>, AppError> {
    let reply = reply.trim();
    if reply.is_empty() {
        return Err(AppError::MalformedResponse(
            "model reply was empty".to_string(),
        ));
    }

    if let Some(inner) = fenced_block(reply) {
        if let Some(questions) = questions_from_json(inner) {
            return non_empty(questions);
        }
    }

    if let Some(span) = find_array_span(reply) {
        if let Some(questions) = questions_from_json(span) {
            return non_empty(questions);
        }
    }

    if let Ok(value) = serde_json::from_str::<Value>(reply) {
        if let Some(arr) = array_in_value(&value) {
            return non_empty(questions_from_array(arr));
        }
    }

    let preview: String = reply.chars().take(200).collect();
    Err(AppError::MalformedResponse(format!(
        "no JSON question array found in model reply (first 200 chars: {preview:?})"
    )))
}

fn non_empty(questions: Vec<Question>) -> Result<Vec<Question>, AppError> {
    if questions.is_empty() {
        Err(AppError::MalformedResponse(
            "model reply contained no question-shaped objects".to_string(),
        ))
    } else {
        Ok(questions)
    }
}

/// Returns the contents of the first ```json (or bare ```) fence, if any.
fn fenced_block(text: &str) -> Option<&str> {
    let (open, tag_len) = match text.find("```json") {
        Some(pos) => (pos, "```json".len()),
        None => (text.find("```")?, "```".len()),
    };
    let after = &text[open + tag_len..];
    let close = after.find("```")?;
    Some(after[..close].trim())
}

/// Finds the first `[` and its matching `]`, respecting JSON string
/// literals and escapes.
fn find_array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parses `text` as a JSON array and keeps the question-shaped elements.
fn questions_from_json(text: &str) -> Option<Vec<Question>> {
    let values: Vec<Value> = serde_json::from_str(text).ok()?;
    Some(questions_from_array(&values))
}

fn questions_from_array(values: &[Value]) -> Vec<Question> {
    values
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}

/// For a whole-reply JSON value: the value itself if it is an array, else
/// the `questions` member, else the first array-valued member of an object.
fn array_in_value(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(arr) => Some(arr),
        Value::Object(map) => {
            if let Some(Value::Array(arr)) = map.get("questions") {
                return Some(arr);
            }
            map.values().find_map(|v| v.as_array())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::DEFAULT_CATEGORY;

    #[test]
    fn test_fenced_json_block() {
        let reply = "```json\n[{\"category\":\"Technical\",\"question\":\"Q1?\"}]\n```";
        let questions = extract_questions(reply).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, "Technical");
        assert_eq!(questions[0].question, "Q1?");
    }

    #[test]
    fn test_fence_without_json_tag() {
        let reply = "```\n[{\"category\":\"Behavioral\",\"question\":\"Tell me about a conflict.\"}]\n```";
        let questions = extract_questions(reply).unwrap();
        assert_eq!(questions[0].category, "Behavioral");
    }

    #[test]
    fn test_array_surrounded_by_prose() {
        let reply = "Here are your questions:\n[{\"category\":\"Role-Specific\",\"question\":\"Why this team?\"}]\nGood luck!";
        let questions = extract_questions(reply).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, "Role-Specific");
    }

    #[test]
    fn test_plain_array() {
        let reply = r#"[
            {"category": "Technical", "question": "Q1?"},
            {"category": "Behavioral", "question": "Q2?"}
        ]"#;
        let questions = extract_questions(reply).unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_object_with_questions_key() {
        let reply = r#"{"questions": [{"category": "Technical", "question": "Q1?"}]}"#;
        let questions = extract_questions(reply).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_object_with_other_array_key() {
        let reply = r#"{"items": [{"category": "Technical", "question": "Q1?"}]}"#;
        let questions = extract_questions(reply).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_missing_category_gets_fallback() {
        let reply = r#"[{"question": "What drew you to this role?"}]"#;
        let questions = extract_questions(reply).unwrap();
        assert_eq!(questions[0].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_non_question_elements_are_skipped() {
        let reply = r#"[
            {"category": "Technical", "question": "Q1?"},
            {"note": "not a question"},
            "loose string"
        ]"#;
        let questions = extract_questions(reply).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_brackets_inside_strings_do_not_confuse_matching() {
        let reply = r#"[{"category": "Technical", "question": "Explain Vec<[u8; 4]> usage?"}]"#;
        let questions = extract_questions(reply).unwrap();
        assert_eq!(questions.len(), 1);
        assert!(questions[0].question.contains("[u8; 4]"));
    }

    #[test]
    fn test_no_array_is_malformed_response() {
        let err = extract_questions("I could not generate questions, sorry.").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_empty_reply_is_malformed_response() {
        let err = extract_questions("   ").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_array_of_strings_is_malformed_response() {
        let err = extract_questions(r#"["just", "strings"]"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_empty_array_is_malformed_response() {
        let err = extract_questions("[]").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}
