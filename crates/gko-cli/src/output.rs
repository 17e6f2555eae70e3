use gko_core::Outline;

use crate::cli::OutputSettings;

/// Render an outline in the requested form(s). JSON comes first when both
/// are requested.
pub fn render(outline: &Outline, settings: OutputSettings) -> anyhow::Result<String> {
    let mut out = String::new();
    if settings.format.includes_json() {
        let json = if settings.pretty {
            outline.to_json_pretty()?
        } else {
            outline.to_json()?
        };
        out.push_str(&json);
        out.push('\n');
    }
    if settings.format.includes_lines() {
        out.push_str(&outline.to_lines());
    }
    Ok(out)
}

/// Render the JSON Schema of the nested form.
pub fn render_schema(pretty: bool) -> anyhow::Result<String> {
    let schema = Outline::json_schema();
    let mut out = if pretty {
        serde_json::to_string_pretty(&schema)?
    } else {
        serde_json::to_string(&schema)?
    };
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use gko_config::OutputFormat;
    use pretty_assertions::assert_eq;

    use super::*;

    fn outline() -> Outline {
        gko_parser::extract_outline(
            "a_test.go",
            "package p\nvar _ = Describe(\"A\", func() { It(\"a\", func() {}) })\n",
        )
        .expect("valid Go")
    }

    const fn settings(format: OutputFormat, pretty: bool) -> OutputSettings {
        OutputSettings { format, pretty }
    }

    #[test]
    fn lines_only() {
        let rendered = render(&outline(), settings(OutputFormat::Lines, true)).expect("render");
        assert_eq!(
            rendered,
            "Describe,A,a_test.go:2:9\nIt,a,a_test.go:2:32\n"
        );
    }

    #[test]
    fn compact_json_is_single_line() {
        let rendered = render(&outline(), settings(OutputFormat::Json, false)).expect("render");
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.starts_with("[{\"name\":\"Describe\""));
    }

    #[test]
    fn pretty_json_is_indented() {
        let rendered = render(&outline(), settings(OutputFormat::Json, true)).expect("render");
        assert!(rendered.contains("\n  {\n    \"name\": \"Describe\""));
    }

    #[test]
    fn both_prints_json_then_lines() {
        let rendered = render(&outline(), settings(OutputFormat::Both, false)).expect("render");
        let (json, lines) = rendered.split_once('\n').expect("two parts");
        assert!(json.starts_with('['));
        assert_eq!(lines, "Describe,A,a_test.go:2:9\nIt,a,a_test.go:2:32\n");
    }

    #[test]
    fn empty_outline_renders_empty_array() {
        let rendered =
            render(&Outline::default(), settings(OutputFormat::Both, true)).expect("render");
        assert_eq!(rendered, "[]\n");
    }

    #[test]
    fn schema_is_valid_json() {
        let rendered = render_schema(false).expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json");
        assert_eq!(value["type"], "array");
    }
}
