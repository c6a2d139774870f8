//! HTML rendering for the single form page.

use std::fmt::Write as _;

use teen_health_client::{GuidanceRecord, Measurement};

use crate::Assessment;

/// What the page shows below the form.
pub enum PageState<'a> {
    Empty,
    Rejected(&'a str),
    Done(&'a Assessment),
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Teen Health &amp; Biology Guide</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #1f2933; }
form { display: grid; gap: .75rem; grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr)); align-items: end; }
label { display: flex; flex-direction: column; font-weight: 600; gap: .25rem; }
.error { background: #fde8e8; border: 1px solid #f5a3a3; padding: .75rem; border-radius: .5rem; }
.result { background: #eef6ff; padding: 1rem; border-radius: .5rem; margin-top: 1.5rem; }
section { margin-top: 1.25rem; }
</style>
</head>
<body>
<h1>Teen Health &amp; Biology Guide</h1>
<p>Enter your details to see your BMI and personalised guidance for growing bodies.</p>
"#;

const FOOT: &str = "</body>\n</html>\n";

fn gender_option(out: &mut String, value: &str, label: &str, selected: Option<&str>) {
    let sel = if selected == Some(value) { " selected" } else { "" };
    let _ = writeln!(out, r#"<option value="{value}"{sel}>{label}</option>"#);
}

fn render_form(out: &mut String, echo: Option<&Measurement>) {
    let age = echo.map(|m| m.age.to_string()).unwrap_or_default();
    let height = echo.map(|m| m.height_cm.to_string()).unwrap_or_default();
    let weight = echo.map(|m| m.weight_kg.to_string()).unwrap_or_default();
    let gender = echo.map(|m| m.gender.as_str());

    out.push_str("<form method=\"post\" action=\"/\">\n");
    let _ = writeln!(
        out,
        r#"<label>Age (10-19)<input type="number" name="age" min="10" max="19" required value="{}"></label>"#,
        escape_html(&age)
    );
    out.push_str("<label>Gender<select name=\"gender\" required>\n");
    gender_option(out, "male", "Male", gender);
    gender_option(out, "female", "Female", gender);
    gender_option(out, "other", "Other", gender);
    out.push_str("</select></label>\n");
    let _ = writeln!(
        out,
        r#"<label>Height (cm)<input type="number" name="height" step="0.1" min="0" required value="{}"></label>"#,
        escape_html(&height)
    );
    let _ = writeln!(
        out,
        r#"<label>Weight (kg)<input type="number" name="weight" step="0.1" min="0" required value="{}"></label>"#,
        escape_html(&weight)
    );
    out.push_str("<button type=\"submit\">Get my guidance</button>\n</form>\n");
}

fn render_list(out: &mut String, items: &[String]) {
    out.push_str("<ul>\n");
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>\n");
}

fn render_guidance(out: &mut String, g: &GuidanceRecord) {
    let _ = writeln!(
        out,
        "<section><h3>What this means for your body</h3><p>{}</p></section>",
        escape_html(&g.explanation)
    );

    let n = &g.nutrition;
    let _ = writeln!(
        out,
        "<section><h3>{}</h3><p><strong>Calories:</strong> {}</p><p><strong>Meal timing:</strong> {}</p><p>{}</p>",
        escape_html(&n.title),
        escape_html(&n.calories),
        escape_html(&n.meal_timing),
        escape_html(&n.details)
    );
    out.push_str("<h4>Foods to enjoy</h4>\n");
    render_list(out, &n.foods_to_eat);
    out.push_str("<h4>Foods to limit</h4>\n");
    render_list(out, &n.foods_to_limit);
    out.push_str("</section>\n");

    let h = &g.hydration;
    let _ = writeln!(
        out,
        "<section><h3>{}</h3><p><strong>Daily amount:</strong> {}</p><p>{}</p>",
        escape_html(&h.title),
        escape_html(&h.daily_amount),
        escape_html(&h.importance)
    );
    render_list(out, &h.tips);
    out.push_str("</section>\n");

    let s = &g.sleep;
    let _ = writeln!(
        out,
        "<section><h3>{}</h3><p><strong>Hours:</strong> {}</p><p>{}</p>",
        escape_html(&s.title),
        escape_html(&s.hours),
        escape_html(&s.importance)
    );
    render_list(out, &s.tips);
    out.push_str("</section>\n");

    let a = &g.activity;
    let _ = writeln!(
        out,
        "<section><h3>{}</h3><p><strong>Duration:</strong> {}</p><p>{}</p>",
        escape_html(&a.title),
        escape_html(&a.duration),
        escape_html(&a.benefits)
    );
    render_list(out, &a.types);
    out.push_str("</section>\n");

    out.push_str("<section><h3>Your week</h3>\n<table>\n");
    for (day, goal) in g.weekly_plan.days() {
        let mut name = day.to_string();
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        let _ = writeln!(
            out,
            "<tr><th>{}</th><td>{}</td></tr>",
            name,
            escape_html(goal)
        );
    }
    out.push_str("</table>\n</section>\n");
}

/// Render the whole page for one of the three handler outcomes.
pub fn render_page(state: PageState<'_>) -> String {
    let mut out = String::from(HEAD);
    match state {
        PageState::Empty => render_form(&mut out, None),
        PageState::Rejected(message) => {
            let _ = writeln!(
                out,
                "<p class=\"error\" role=\"alert\">{}</p>",
                escape_html(message)
            );
            render_form(&mut out, None);
        }
        PageState::Done(assessment) => {
            let m = &assessment.measurement;
            render_form(&mut out, Some(m));
            let _ = writeln!(
                out,
                "<div class=\"result\"><h2>Your BMI: {} ({})</h2><p>{}-year-old {}, {} cm, {} kg</p>",
                assessment.bmi.value,
                assessment.bmi.category,
                m.age,
                escape_html(&m.gender),
                m.height_cm,
                m.weight_kg
            );
            render_guidance(&mut out, &assessment.guidance);
            out.push_str("</div>\n");
        }
    }
    out.push_str(FOOT);
    out
}
