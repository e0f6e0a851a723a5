use crate::parse::{Segment, parse_display};
use crate::types::ExtractedData;

/// Substitute extracted variables into a display template.
///
/// Every `{name}` whose name is present in `extracted` is replaced by its
/// value; any other placeholder is left in place. Substituted values are not
/// scanned again.
#[must_use]
pub fn render(template: &str, extracted: &ExtractedData) -> String {
    if extracted.is_empty() {
        return template.to_owned();
    }
    let Ok(segments) = parse_display(template) else {
        return template.to_owned();
    };

    let mut out = String::with_capacity(template.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => match extracted.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> ExtractedData {
        pairs.iter().copied().collect()
    }

    #[test]
    fn substitutes_known_names() {
        let out = render("🍔 {minutes}m", &data(&[("minutes", "15")]));
        assert_eq!(out, "🍔 15m");
    }

    #[test]
    fn leaves_unknown_placeholders() {
        let out = render("{h}:{m} ({tz})", &data(&[("h", "10"), ("m", "30")]));
        assert_eq!(out, "10:30 ({tz})");
    }

    #[test]
    fn repeated_placeholder() {
        let out = render("{x}-{x}", &data(&[("x", "a")]));
        assert_eq!(out, "a-a");
    }

    #[test]
    fn values_are_not_rescanned() {
        let out = render("{a} {b}", &data(&[("a", "{b}"), ("b", "2")]));
        assert_eq!(out, "{b} 2");
    }

    #[test]
    fn names_with_spaces() {
        let out = render("ETA {arrival time}", &data(&[("arrival time", "10:30")]));
        assert_eq!(out, "ETA 10:30");
    }

    #[test]
    fn empty_data_returns_template() {
        assert_eq!(render("{x} left", &ExtractedData::new()), "{x} left");
    }

    #[test]
    fn stray_braces_survive() {
        let out = render("{{x}} {", &data(&[("x", "1")]));
        assert_eq!(out, "{1} {");
    }
}
