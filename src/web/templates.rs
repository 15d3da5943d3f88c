use minijinja::value::Value;
use minijinja::{Environment, Error};
use rust_embed::RustEmbed;
use serde::Serialize;
use tracing::error;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct TemplateAssets;

/// Template environment backed by the templates embedded in the binary.
///
/// `.html` templates keep minijinja's HTML auto-escaping; the `json` filter
/// output is marked safe so it can sit inside a `<script>` block.
pub fn init_templates() -> Environment<'static> {
    let mut env = Environment::new();

    env.set_loader(load_embedded);

    env.add_filter("json", |value: Value| {
        let json = serde_json::to_string(&value)
            .map(|json| json.replace("</", "<\\/"))
            .unwrap_or_else(|_| "null".to_string());
        Value::from_safe_string(json)
    });

    env
}

pub fn render_template<S: Serialize>(
    env: &Environment,
    template_name: &str,
    context: S,
) -> Result<String, Error> {
    let tmpl = env.get_template(template_name).map_err(|e| {
        error!("Template not found: {} ({})", template_name, e);
        e
    })?;

    tmpl.render(context).map_err(|e| {
        error!("Template render error: {}", e);
        e
    })
}

fn load_embedded(name: &str) -> Result<Option<String>, Error> {
    Ok(TemplateAssets::get(name).map(|file| String::from_utf8_lossy(&file.data).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn html_templates_escape_interpolated_values() {
        let mut env = init_templates();
        env.add_template_owned("attr.html", r#"<meta content="{{ v }}" />"#.to_string())
            .unwrap();
        let out = env
            .get_template("attr.html")
            .unwrap()
            .render(context! { v => r#"x"><script>'&"# })
            .unwrap();
        assert!(!out.contains("<script>"), "{out}");
        assert!(out.contains("&quot;&gt;&lt;script&gt;"), "{out}");
        assert!(out.contains("&amp;"), "{out}");
    }

    #[test]
    fn json_filter_is_not_html_escaped_and_cannot_close_a_script_tag() {
        let mut env = init_templates();
        env.add_template_owned("script.html", "{{ v | json }}".to_string())
            .unwrap();
        let out = env
            .get_template("script.html")
            .unwrap()
            .render(context! { v => "</script>" })
            .unwrap();
        assert_eq!(out, r#""<\/script>""#);
    }

    #[test]
    fn embedded_templates_load() {
        let env = init_templates();
        for name in ["index.html", "frame.html", "frame_meta.html"] {
            assert!(env.get_template(name).is_ok(), "{name}");
        }
        assert!(env.get_template("missing.html").is_err());
    }
}
