//! Index template rendering
//!
//! An index template is the HTML entry page of a UI bundle with two
//! placeholder tokens: one for the schema URL and one for the mount
//! directory name.

/// Replaced with the absolute path of the schema endpoint
pub const SCHEMA_TOKEN: &str = "SERVANT_SWAGGER_UI_SCHEMA";

/// Replaced with the mount directory name, e.g. `docs`
pub const DIR_TOKEN: &str = "SERVANT_SWAGGER_UI_DIR";

/// Substitute `schema_path` and `dir` into `template`
///
/// Tokens are replaced in a single left-to-right pass; substituted text is
/// never scanned again. Values are inserted verbatim, without HTML escaping.
pub fn render(template: &str, dir: &str, schema_path: &str) -> String {
    let replacements = [(SCHEMA_TOKEN, schema_path), (DIR_TOKEN, dir)];
    let mut out = String::with_capacity(template.len() + schema_path.len() + dir.len());
    let mut rest = template;

    loop {
        let next = replacements
            .iter()
            .filter_map(|(token, value)| rest.find(*token).map(|at| (at, token.len(), *value)))
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, token_len, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + token_len..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Files the template loads from its own directory
///
/// Collects every `../SERVANT_SWAGGER_UI_DIR/<file>` reference, in order of
/// first appearance. The file name ends at a quote, whitespace, `>`, `)`,
/// `?` or `#`.
pub fn asset_references(template: &str) -> Vec<&str> {
    let marker = format!("../{}/", DIR_TOKEN);
    let mut refs: Vec<&str> = Vec::new();

    for (at, _) in template.match_indices(&marker) {
        let rest = &template[at + marker.len()..];
        let end = rest
            .find(|c: char| matches!(c, '"' | '\'' | '>' | ')' | '?' | '#') || c.is_whitespace())
            .unwrap_or(rest.len());
        let file = &rest[..end];
        if !file.is_empty() && !refs.contains(&file) {
            refs.push(file);
        }
    }

    refs
}

/// Placeholder tokens that do not occur in `template`
pub fn missing_tokens(template: &str) -> Vec<&'static str> {
    [SCHEMA_TOKEN, DIR_TOKEN]
        .into_iter()
        .filter(|token| !template.contains(*token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_link_template() {
        let template = "<a href='SERVANT_SWAGGER_UI_SCHEMA'>at SERVANT_SWAGGER_UI_DIR</a>";
        assert_eq!(
            render(template, "docs", "/docs.json"),
            "<a href='/docs.json'>at docs</a>"
        );
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let template = "SERVANT_SWAGGER_UI_DIR|SERVANT_SWAGGER_UI_SCHEMA|SERVANT_SWAGGER_UI_DIR|SERVANT_SWAGGER_UI_SCHEMA";
        let html = render(template, "docs", "/api/openapi.json");

        assert_eq!(html, "docs|/api/openapi.json|docs|/api/openapi.json");
        assert!(!html.contains(SCHEMA_TOKEN));
        assert!(!html.contains(DIR_TOKEN));
    }

    #[test]
    fn test_render_without_tokens_is_identity() {
        let template = "<html><body>static</body></html>";
        assert_eq!(render(template, "docs", "/docs.json"), template);
        assert_eq!(render("", "docs", "/docs.json"), "");
    }

    #[test]
    fn test_substituted_text_is_not_rescanned() {
        // A schema path spelling the directory token stays literal.
        let html = render("SERVANT_SWAGGER_UI_SCHEMA", "docs", "/SERVANT_SWAGGER_UI_DIR");
        assert_eq!(html, "/SERVANT_SWAGGER_UI_DIR");
    }

    #[test]
    fn test_render_is_deterministic() {
        let template = "<script>url: 'SERVANT_SWAGGER_UI_SCHEMA', base: 'SERVANT_SWAGGER_UI_DIR'</script>";
        let first = render(template, "reference", "/v1/schema.json");
        for _ in 0..10 {
            assert_eq!(render(template, "reference", "/v1/schema.json"), first);
        }
    }

    #[test]
    fn test_values_are_not_escaped() {
        let html = render("<a href='SERVANT_SWAGGER_UI_SCHEMA'>", "docs", "/a&b");
        assert_eq!(html, "<a href='/a&b'>");
    }

    #[test]
    fn test_asset_references() {
        let template = r#"<link href="../SERVANT_SWAGGER_UI_DIR/swagger-ui.css" />
            <script src='../SERVANT_SWAGGER_UI_DIR/js/bundle.js?v=5'></script>
            <link href="../SERVANT_SWAGGER_UI_DIR/swagger-ui.css" />
            <a href="SERVANT_SWAGGER_UI_SCHEMA">schema</a>
            <img src="../SERVANT_SWAGGER_UI_DIR/">"#;

        assert_eq!(asset_references(template), vec!["swagger-ui.css", "js/bundle.js"]);
        assert!(asset_references("<p>SERVANT_SWAGGER_UI_DIR</p>").is_empty());
    }

    #[test]
    fn test_missing_tokens() {
        assert!(missing_tokens("SERVANT_SWAGGER_UI_SCHEMA SERVANT_SWAGGER_UI_DIR").is_empty());
        assert_eq!(missing_tokens("SERVANT_SWAGGER_UI_SCHEMA"), vec![DIR_TOKEN]);
        assert_eq!(missing_tokens(""), vec![SCHEMA_TOKEN, DIR_TOKEN]);
    }
}
