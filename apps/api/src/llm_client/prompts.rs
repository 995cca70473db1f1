// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Date format every extractor and matcher asks the model for.
pub const DATE_INSTRUCTION: &str = "Format every date as YYYY-MM-DD. \
    When only a year or a month is known, use the first day of that period. \
    Use an empty string for optional dates that are not mentioned.";

/// Builds a system prompt from a role description and the JSON-only rule.
pub fn json_system(role: &str) -> String {
    format!("{role} {JSON_ONLY_INSTRUCTION}")
}

/// Substitutes `{key}` placeholders in a single pass, so placeholder-like
/// text inside a substituted value is left alone. Unknown placeholders stay.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values.iter().find(|(key, _)| {
            tail.strip_prefix(*key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_system_appends_json_rule() {
        let system = json_system("You are an expert resume parser.");
        assert!(system.starts_with("You are an expert resume parser. "));
        assert!(system.ends_with(JSON_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_fill_template_is_single_pass() {
        let filled = fill_template(
            "A: {a}\nB: {b}",
            &[("a", "mentions {b} literally"), ("b", "[1, 2]")],
        );
        assert_eq!(filled, "A: mentions {b} literally\nB: [1, 2]");
    }

    #[test]
    fn test_fill_template_leaves_json_braces_alone() {
        let filled = fill_template(r#"{"is_match": true} {x} {missing}"#, &[("x", "1")]);
        assert_eq!(filled, r#"{"is_match": true} 1 {missing}"#);
    }
}
