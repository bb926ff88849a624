use serde_json::{Map, Value};
use tracing::trace;

use crate::context::{Context, MissingPolicy};
use crate::parser::{Parser, Segment};
use crate::truthy::{display, truthy};

/// Substitute every `${name}` in `template` from `context`.
///
/// Missing names and falsy values (null, false, 0, "") become the empty
/// string. Substituted text is not re-scanned.
pub fn interpolate(template: &str, context: &Map<String, Value>) -> String {
    substitute(
        template,
        |name| context.get(name).filter(|v| truthy(v)).map(display),
        MissingPolicy::Blank,
    )
}

/// Substitute placeholders from several scopes, first truthy value wins.
/// Unresolved placeholders follow the context's [`MissingPolicy`].
pub fn render(template: &str, context: &Context) -> String {
    if !template.contains("${") {
        return template.to_string();
    }
    substitute(
        template,
        |name| {
            context
                .scopes()
                .iter()
                .filter_map(|scope| scope.get(name))
                .find(|v| truthy(v))
                .map(display)
        },
        context.policy(),
    )
}

fn substitute<F>(template: &str, lookup: F, policy: MissingPolicy) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    for seg in Parser::new(template).parse_segments() {
        match seg {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder { name, raw } => match lookup(name) {
                Some(value) => out.push_str(&value),
                None => {
                    trace!(placeholder = name, "unresolved placeholder");
                    if policy == MissingPolicy::Keep {
                        out.push_str(raw);
                    }
                }
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ctx(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => Map::new(),
        }
    }

    #[test]
    fn substitutes_named_placeholders() {
        let c = ctx(json!({"a": "x", "b": "y"}));
        assert_eq!(interpolate("${a}-${b}", &c), "x-y");
    }

    #[test]
    fn missing_and_falsy_become_blank() {
        let c = ctx(json!({"zero": 0, "empty": "", "no": false, "nil": null}));
        assert_eq!(interpolate("[${missing}]", &c), "[]");
        assert_eq!(interpolate("${zero}${empty}${no}${nil}", &c), "");
    }

    #[test]
    fn repeated_placeholder_substituted_everywhere() {
        let c = ctx(json!({"n": 3}));
        assert_eq!(interpolate("${n}+${n}=6", &c), "3+3=6");
    }

    #[test]
    fn integral_floats_render_without_fraction() {
        let c = ctx(json!({"x": 1.0, "y": 2.5}));
        assert_eq!(interpolate("${x}/${y}", &c), "1/2.5");
    }

    #[test]
    fn no_recursive_expansion() {
        let c = ctx(json!({"a": "${b}", "b": "nope"}));
        assert_eq!(interpolate("${a}", &c), "${b}");
    }

    #[test]
    fn render_first_truthy_scope_wins() {
        let c = Context::new()
            .push(&json!({"name": "", "kind": "first"}))
            .push(&json!({"name": "second", "kind": "ignored"}));
        assert_eq!(render("${name}/${kind}", &c), "second/first");
    }

    #[test]
    fn render_keep_policy_leaves_placeholder() {
        let c = Context::new()
            .with_policy(MissingPolicy::Keep)
            .push(&json!({"a": 1, "f": false}));
        assert_eq!(render("${a} ${b} ${f}", &c), "1 ${b} ${f}");
    }

    #[test]
    fn render_from_records() {
        let c = Context::from(ctx(json!({"a": "one"})))
            .push_record(ctx(json!({"a": "two", "b": "three"})));
        assert_eq!(c.scopes().len(), 2);
        assert_eq!(render("${a} ${b}", &c), "one three");
    }

    #[test]
    fn render_without_scopes_blanks() {
        assert_eq!(render("x${a}y", &Context::new()), "xy");
        assert_eq!(render("plain", &Context::new()), "plain");
    }
}
