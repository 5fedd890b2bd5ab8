//! Tolerant `{placeholder}` substitution for dialogue line templates.
//!
//! A template line references context values by name: `"We saw {cost} at
//! {store_id}."`. If every referenced key resolves, the substituted string is
//! returned. If *any* key is missing, the original template text is returned
//! unchanged — a missing placeholder is a recoverable condition, never an
//! error. `{{` and `}}` escape literal braces.

use std::collections::BTreeMap;

/// Context mapping for template substitution.
///
/// Values are stored pre-formatted; numeric formatting (thousands separators,
/// percent signs) happens when the context is built, not at render time.
pub type Context = BTreeMap<String, String>;

/// Render `template` against `context`.
///
/// Returns the substituted string when all placeholders resolve, or the
/// template verbatim when any placeholder is unknown or a brace is unbalanced.
#[must_use]
pub fn render(template: &str, context: &Context) -> String {
    try_render(template, context).unwrap_or_else(|| template.to_string())
}

/// Render, returning `None` on the first unresolvable placeholder.
fn try_render(template: &str, context: &Context) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => key.push(c),
                        None => return None,
                    }
                }
                out.push_str(context.get(&key)?);
            }
            '}' => return None,
            _ => out.push(ch),
        }
    }

    Some(out)
}

/// Build a [`Context`] from string pairs.
#[must_use]
pub fn context_from<I, K, V>(pairs: I) -> Context
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn substitutes_known_keys() {
        let ctx = context_from([("store_id", "Store-217"), ("cost", "$35,000")]);
        assert_eq!(
            render("Based on {store_id}, we saw {cost}.", &ctx),
            "Based on Store-217, we saw $35,000."
        );
    }

    #[test]
    fn missing_key_returns_template_unchanged() {
        let ctx = context_from([("store_id", "Store-217")]);
        let template = "We estimated {undefined_field} for {store_id}.";
        assert_eq!(render(template, &ctx), template);
    }

    #[test]
    fn empty_template_is_identity() {
        assert_eq!(render("", &Context::new()), "");
    }

    #[test]
    fn template_without_placeholders_is_identity() {
        let ctx = context_from([("unused", "x")]);
        assert_eq!(render("No placeholders here.", &ctx), "No placeholders here.");
    }

    #[test]
    fn escaped_braces_are_literal() {
        let ctx = context_from([("n", "3")]);
        assert_eq!(render("{{literal}} and {n}", &ctx), "{literal} and 3");
    }

    #[test]
    fn unbalanced_brace_falls_back_to_template() {
        let ctx = context_from([("a", "1")]);
        assert_eq!(render("broken {a", &ctx), "broken {a");
        assert_eq!(render("broken } here", &ctx), "broken } here");
    }
}
