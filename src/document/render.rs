use crate::document::value::Value;

const INDENT_WIDTH: usize = 2;

/// Renders a value tree as indented text. `base_indent` is the depth the root
/// container starts at; children sit one level deeper per nesting step.
///
/// The output is not byte-identical to the text the tree was parsed from: key
/// order, numeric literal text and whitespace are all renderer-owned. String
/// content is written back verbatim (escapes were decoded at parse time and
/// are not re-applied).
pub(super) fn render(value: &Value, base_indent: usize) -> String {
    let mut out = String::new();
    // the top-level call is itself a container context: a bare string root
    // still gets its quotes here
    render_child(value, base_indent, &mut out);
    out
}

// The one place that decides whether a child is quoted: only String payloads
// are. Keys are quoted unconditionally by the object arm below.
fn render_child(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        _ => render_value(value, depth, out),
    }
}

fn render_value(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for (i, (key, child)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                indent(depth + 1, out);
                out.push('"');
                out.push_str(key);
                out.push_str("\": ");
                render_child(child, depth + 1, out);
            }
            out.push('\n');
            indent(depth, out);
            out.push('}');
        }
        Value::Array(values) => {
            if values.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, child) in values.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                indent(depth + 1, out);
                render_child(child, depth + 1, out);
            }
            out.push('\n');
            indent(depth, out);
            out.push(']');
        }
        Value::Number(num) => out.push_str(&num.to_string()),
        // literal text; quoting is the parent's call
        Value::String(s) => out.push_str(s),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
    }
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth * INDENT_WIDTH {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;

    #[test]
    fn leaves_render_their_literal_form() {
        assert_eq!(render(&json!(null), 0), "null");
        assert_eq!(render(&json!(true), 0), "true");
        assert_eq!(render(&json!(false), 0), "false");
        assert_eq!(render(&json!(42), 0), "42");
        assert_eq!(render(&json!(42.0), 0), "42.0");
    }

    #[test]
    fn a_root_string_is_quoted_by_the_top_level_context() {
        assert_eq!(render(&json!("hello"), 0), "\"hello\"");
    }

    #[test]
    fn object_members_are_indented_one_level_deeper() {
        let val = json!({ "a": 1, "b": "two" });
        let expected = "{\n  \"a\": 1,\n  \"b\": \"two\"\n}";

        assert_eq!(render(&val, 0), expected);
    }

    #[test]
    fn nested_containers_indent_per_level() {
        let val = json!({ "list": [1, { "x": null }] });
        let expected = "{\n  \"list\": [\n    1,\n    {\n      \"x\": null\n    }\n  ]\n}";

        assert_eq!(render(&val, 0), expected);
    }

    #[test]
    fn base_indent_shifts_children_and_the_closing_delimiter() {
        let val = json!({ "a": 1 });
        // opening brace is written wherever the caller put the cursor
        let expected = "{\n    \"a\": 1\n  }";

        assert_eq!(render(&val, 1), expected);
    }

    #[test]
    fn empty_containers_stay_on_one_line() {
        assert_eq!(render(&json!({}), 0), "{}");
        assert_eq!(render(&json!([]), 0), "[]");
        assert_eq!(render(&json!({ "a": [] }), 0), "{\n  \"a\": []\n}");
    }

    #[test]
    fn strings_inside_arrays_get_quotes_from_the_parent() {
        let val = json!(["x", 1]);

        assert_eq!(render(&val, 0), "[\n  \"x\",\n  1\n]");
    }

    #[test]
    fn display_delegates_to_the_renderer() {
        let val = json!([1]);

        assert_eq!(val.to_string(), "[\n  1\n]");
    }
}
