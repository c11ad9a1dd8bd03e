use crate::{form::FormInput, generation::GeneratedContent, resolver::ModelHandle};
use std::fmt::Write;

pub const PAGE_TITLE: &str = "AI Resume Builder";

/// What the page shows below the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Warning(String),
    Error(String),
    Generated(GeneratedContent),
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #262730; }
h1 { font-size: 2rem; margin-bottom: 0.25rem; }
.caption { color: #808495; font-size: 0.875rem; margin-top: 0; }
label { display: block; margin-top: 1rem; font-size: 0.875rem; }
input, textarea { width: 100%; box-sizing: border-box; padding: 0.5rem; margin-top: 0.25rem; font: inherit; }
textarea { min-height: 8rem; }
button { margin-top: 1rem; padding: 0.5rem 1rem; font: inherit; cursor: pointer; }
button:disabled { cursor: progress; opacity: 0.6; }
.alert { padding: 1rem; border-radius: 0.5rem; margin-top: 1rem; white-space: pre-wrap; }
.alert.success { background: #dff5e3; color: #174d22; }
.alert.info { background: #e1ecfb; color: #0b3b74; }
.alert.warning { background: #fff6d6; color: #6b4e00; }
.alert.error { background: #fde3e3; color: #7d1111; }
.output { white-space: pre-wrap; margin-top: 0.75rem; }
hr.divider { margin: 2rem 0; border: none; border-top: 1px solid #e6e6ea; }
"#;

const BUSY_SCRIPT: &str = r#"
document.getElementById("resume-form").addEventListener("submit", function () {
  var button = document.getElementById("generate");
  button.disabled = true;
  button.textContent = "Generating...";
});
"#;

/// Escapes text for both element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{PAGE_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn heading() -> &'static str {
    "<h1>AI Resume &amp; Portfolio Builder</h1>\n"
}

/// The form page, with the submitted values echoed back and an optional outcome.
pub fn render_form(model: &ModelHandle, form: &FormInput, outcome: Option<&Outcome>) -> String {
    let mut body = String::new();
    body.push_str(heading());
    let _ = writeln!(
        body,
        "<p class=\"caption\">Connected using model: {}</p>",
        escape_html(model.as_str())
    );

    let _ = write!(
        body,
        "<form id=\"resume-form\" method=\"post\" action=\"/\">\n\
         <label for=\"name\">Full Name</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\" value=\"{}\">\n\
         <label for=\"job_title\">Target Job Title</label>\n\
         <input id=\"job_title\" name=\"job_title\" type=\"text\" value=\"{}\">\n\
         <label for=\"raw_experience\">What did you do? (Simple words)</label>\n\
         <textarea id=\"raw_experience\" name=\"raw_experience\">{}</textarea>\n\
         <button id=\"generate\" type=\"submit\">Generate Resume Content</button>\n\
         </form>\n",
        escape_html(&form.name),
        escape_html(&form.job_title),
        escape_html(&form.raw_experience),
    );

    match outcome {
        Some(Outcome::Warning(message)) => {
            let _ = writeln!(
                body,
                "<div class=\"alert warning\" role=\"alert\">{}</div>",
                escape_html(message)
            );
        }
        Some(Outcome::Error(message)) => {
            let _ = writeln!(
                body,
                "<div class=\"alert error\" role=\"alert\">{}</div>",
                escape_html(message)
            );
        }
        Some(Outcome::Generated(content)) => {
            let _ = write!(
                body,
                "<section id=\"bullets\">\n\
                 <div class=\"alert success\">Professional Bullet Points:</div>\n\
                 <div class=\"output\">{}</div>\n\
                 </section>\n\
                 <hr class=\"divider\">\n\
                 <section id=\"bio\">\n\
                 <h2>Portfolio Bio</h2>\n\
                 <div class=\"alert info\">{}</div>\n\
                 </section>\n",
                escape_html(&content.bullets),
                escape_html(&content.bio),
            );
        }
        None => {}
    }

    let _ = writeln!(body, "<script>{BUSY_SCRIPT}</script>");

    document(&body)
}

/// Terminal page shown instead of the form when no model could be resolved.
pub fn render_halted(message: &str) -> String {
    let mut body = String::new();
    body.push_str(heading());
    let _ = writeln!(
        body,
        "<div class=\"alert error\" role=\"alert\">{}</div>",
        escape_html(message)
    );

    document(&body)
}
