//! Printf-style message interpolation
//!
//! Supported placeholders: `%s` (display), `%d` (numeric), `%j` (JSON),
//! `%%` (literal percent). Unmatched placeholders pass through literally and
//! excess arguments are returned as structured extras, never dropped.

use crate::core::FieldValue;

/// Merge `args` into `template`, returning the interpolated message and the
/// arguments left over after all placeholders were filled.
///
/// Coercion is best-effort: an argument that does not fit its placeholder is
/// rendered through `Display` rather than raising.
pub fn interpolate(template: &str, args: &[FieldValue]) -> (String, Vec<FieldValue>) {
    let mut out = String::with_capacity(template.len());
    let mut next = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(&spec) if matches!(spec, 's' | 'd' | 'j') => {
                if next < args.len() {
                    chars.next();
                    out.push_str(&coerce(&args[next], spec));
                    next += 1;
                } else {
                    // No argument left: the placeholder stays literal.
                    out.push('%');
                }
            }
            _ => out.push('%'),
        }
    }

    (out, args[next..].to_vec())
}

fn coerce(value: &FieldValue, spec: char) -> String {
    match spec {
        'd' => match value {
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Bool(b) => i64::from(*b).to_string(),
            other => other.to_string(),
        },
        'j' => serde_json::to_string(&value.to_json_value())
            .unwrap_or_else(|_| value.to_string()),
        _ => value.to_string(),
    }
}
