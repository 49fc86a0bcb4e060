use crate::{RenderableConfig, RenderableHeader, RenderableUpdate};

/// Preamble emitted before any update entries.
pub fn render_header(header: &RenderableHeader) -> String {
    format!(
        "# generated by {}\n# ignore rules: {}\nversion: 2\nupdates:\n",
        header.tool, header.ignore_source
    )
}

/// One `updates` entry, including its `ignore` block when there is anything to ignore.
pub fn render_update(update: &RenderableUpdate) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "  - package-ecosystem: {}\n",
        double_quoted(&update.ecosystem)
    ));
    out.push_str(&format!(
        "    directory: {} #{}\n",
        double_quoted(&update.directory),
        update.file_name.replace(['\n', '\r'], " ")
    ));
    out.push_str("    schedule:\n");
    out.push_str(&format!(
        "      interval: {}\n",
        double_quoted(&update.schedule.interval)
    ));
    if let Some(day) = &update.schedule.day {
        out.push_str(&format!("      day: {}\n", double_quoted(day)));
    }
    out.push_str(&format!(
        "    open-pull-requests-limit: {}\n",
        update.open_pull_requests_limit
    ));

    if update.ignores.is_empty() {
        return out;
    }

    out.push_str("    ignore:\n");
    for ignore in &update.ignores {
        out.push_str(&format!(
            "     - dependency-name: {}\n",
            double_quoted(&ignore.dependency_name)
        ));
        out.push_str(&format!(
            "       versions: {}\n",
            render_string_array(&ignore.versions)
        ));
    }

    out
}

/// `["a", "b"]`.
pub fn render_string_array(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| double_quoted(v)).collect();
    format!("[{}]", quoted.join(", "))
}

/// YAML double-quoted scalar, with quotes, backslashes and control whitespace escaped.
fn double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn render_dependabot_yaml(config: &RenderableConfig) -> String {
    let mut out = render_header(&config.header);
    for update in &config.updates {
        out.push_str(&render_update(update));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableIgnore, RenderableSchedule};

    fn header() -> RenderableHeader {
        RenderableHeader {
            tool: "dependagen".to_string(),
            ignore_source: "https://example.com/package-ignore.json".to_string(),
        }
    }

    fn update(directory: &str, file_name: &str, ignores: Vec<RenderableIgnore>) -> RenderableUpdate {
        RenderableUpdate {
            ecosystem: "nuget".to_string(),
            directory: directory.to_string(),
            file_name: file_name.to_string(),
            schedule: RenderableSchedule {
                interval: "weekly".to_string(),
                day: Some("wednesday".to_string()),
            },
            open_pull_requests_limit: 5,
            ignores,
        }
    }

    #[test]
    fn renders_header_only_without_updates() {
        let config = RenderableConfig {
            header: header(),
            updates: Vec::new(),
        };
        assert_eq!(
            render_dependabot_yaml(&config),
            "# generated by dependagen\n\
             # ignore rules: https://example.com/package-ignore.json\n\
             version: 2\n\
             updates:\n"
        );
    }

    #[test]
    fn renders_updates_with_and_without_ignores() {
        let config = RenderableConfig {
            header: header(),
            updates: vec![
                update(
                    "/",
                    "App.csproj",
                    vec![RenderableIgnore {
                        dependency_name: "Foo".to_string(),
                        versions: vec!["5.*".to_string()],
                    }],
                ),
                update("/src/Lib", "Lib.fsproj", Vec::new()),
            ],
        };

        insta::assert_snapshot!(render_dependabot_yaml(&config), @r#"
# generated by dependagen
# ignore rules: https://example.com/package-ignore.json
version: 2
updates:
  - package-ecosystem: "nuget"
    directory: "/" #App.csproj
    schedule:
      interval: "weekly"
      day: "wednesday"
    open-pull-requests-limit: 5
    ignore:
     - dependency-name: "Foo"
       versions: ["5.*"]
  - package-ecosystem: "nuget"
    directory: "/src/Lib" #Lib.fsproj
    schedule:
      interval: "weekly"
      day: "wednesday"
    open-pull-requests-limit: 5
"#);
    }

    #[test]
    fn schedule_without_day_omits_day_line() {
        let mut u = update("/", "App.csproj", Vec::new());
        u.schedule = RenderableSchedule {
            interval: "daily".to_string(),
            day: None,
        };
        let text = render_update(&u);
        assert!(text.contains("      interval: \"daily\"\n"));
        assert!(!text.contains("day:"));
    }

    #[test]
    fn string_array_formatting() {
        assert_eq!(render_string_array(&[]), "[]");
        assert_eq!(render_string_array(&["5.*".to_string()]), "[\"5.*\"]");
        assert_eq!(
            render_string_array(&["9.*".to_string(), "10.*".to_string()]),
            "[\"9.*\", \"10.*\"]"
        );
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(
            render_string_array(&["5.*\"".to_string(), "C:\\x".to_string()]),
            r#"["5.*\"", "C:\\x"]"#
        );

        let mut u = update(
            "/src/we\"ird",
            "App.csproj",
            vec![RenderableIgnore {
                dependency_name: "Foo\\Bar".to_string(),
                versions: vec!["1.*".to_string()],
            }],
        );
        u.ecosystem = "nu\nget".to_string();
        let text = render_update(&u);
        assert!(text.contains(r#"    directory: "/src/we\"ird" #App.csproj"#));
        assert!(text.contains(r#"     - dependency-name: "Foo\\Bar""#));
        assert!(text.contains(r#"  - package-ecosystem: "nu\nget""#));
    }

    #[test]
    fn multiple_ignores_keep_order() {
        let u = update(
            "/",
            "App.csproj",
            vec![
                RenderableIgnore {
                    dependency_name: "B".to_string(),
                    versions: vec!["1.*".to_string()],
                },
                RenderableIgnore {
                    dependency_name: "A".to_string(),
                    versions: vec!["2.*".to_string()],
                },
            ],
        );
        let text = render_update(&u);
        let b = text.find("\"B\"").expect("B rendered");
        let a = text.find("\"A\"").expect("A rendered");
        assert!(b < a);
        assert_eq!(text.matches("    ignore:\n").count(), 1);
    }
}
