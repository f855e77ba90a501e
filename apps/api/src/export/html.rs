//! Standalone HTML rendering of a resume, printable to PDF by the browser.

use crate::models::resume::ResumeRecord;

const NAME_PLACEHOLDER: &str = "Your Name";

const STYLE: &str = "body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
.header { text-align: center; border-bottom: 2px solid #333; padding-bottom: 20px; margin-bottom: 30px; }
.name { font-size: 32px; font-weight: bold; margin-bottom: 10px; }
.contact { color: #666; margin-bottom: 5px; }
.section { margin-bottom: 30px; }
.section-title { font-size: 20px; font-weight: bold; color: #333; border-bottom: 1px solid #ccc; padding-bottom: 5px; margin-bottom: 15px; }
.entry { margin-bottom: 12px; }
.content { line-height: 1.6; white-space: pre-line; }";

/// Escapes text for element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn section(html: &mut String, title: &str, body: &str) {
    html.push_str("<div class=\"section\">\n");
    html.push_str(&format!("<div class=\"section-title\">{title}</div>\n"));
    html.push_str(body);
    html.push_str("</div>\n");
}

fn entry(heading: &str, detail: Option<&str>, items: &[String]) -> String {
    let mut out = format!("<div class=\"entry\"><strong>{}</strong>", escape_html(heading));
    if let Some(detail) = detail.filter(|d| !d.is_empty()) {
        out.push_str(&format!("<div class=\"content\">{}</div>", escape_html(detail)));
    }
    if !items.is_empty() {
        out.push_str("<ul>");
        for item in items {
            out.push_str(&format!("<li>{}</li>", escape_html(item)));
        }
        out.push_str("</ul>");
    }
    out.push_str("</div>\n");
    out
}

/// Renders the record as a complete HTML document. Empty sections are omitted.
pub fn render_html(record: &ResumeRecord) -> String {
    let info = &record.personal_info;
    let name = if info.full_name.is_empty() {
        NAME_PLACEHOLDER
    } else {
        info.full_name.as_str()
    };

    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>Resume - {}</title>\n", escape_html(name)));
    html.push_str(&format!("<style>\n{STYLE}\n</style>\n</head>\n<body>\n"));

    html.push_str("<div class=\"header\">\n");
    html.push_str(&format!("<div class=\"name\">{}</div>\n", escape_html(name)));
    for contact in [&info.email, &info.phone, &info.location] {
        if !contact.is_empty() {
            html.push_str(&format!("<div class=\"contact\">{}</div>\n", escape_html(contact)));
        }
    }
    for link in [&info.website, &info.linkedin].into_iter().flatten() {
        html.push_str(&format!("<div class=\"contact\">{}</div>\n", escape_html(link)));
    }
    html.push_str("</div>\n");

    if !record.summary.is_empty() {
        section(
            &mut html,
            "Professional Summary",
            &format!("<div class=\"content\">{}</div>\n", escape_html(&record.summary)),
        );
    }

    if !record.experience.is_empty() {
        let body: String = record
            .experience
            .iter()
            .map(|e| {
                let heading = format!(
                    "{} - {} ({} - {})",
                    e.position, e.company, e.start_date, e.end_date
                );
                entry(
                    &heading,
                    Some(&e.description),
                    e.achievements.as_deref().unwrap_or_default(),
                )
            })
            .collect();
        section(&mut html, "Work Experience", &body);
    }

    if !record.education.is_empty() {
        let body: String = record
            .education
            .iter()
            .map(|e| {
                let mut heading = format!("{}, {} ({})", e.degree, e.school, e.year);
                if let Some(gpa) = &e.gpa {
                    heading.push_str(&format!(" - GPA {gpa}"));
                }
                entry(
                    &heading,
                    None,
                    e.relevant_courses.as_deref().unwrap_or_default(),
                )
            })
            .collect();
        section(&mut html, "Education", &body);
    }

    if !record.skills.is_empty() {
        let mut body = String::new();
        if !record.skills.technical.is_empty() {
            body.push_str(&entry(
                "Technical",
                Some(&record.skills.technical.join(", ")),
                &[],
            ));
        }
        if !record.skills.soft.is_empty() {
            body.push_str(&entry("Soft", Some(&record.skills.soft.join(", ")), &[]));
        }
        section(&mut html, "Skills", &body);
    }

    if !record.projects.is_empty() {
        let body: String = record
            .projects
            .iter()
            .map(|p| {
                let links: Vec<String> = [&p.github, &p.demo]
                    .into_iter()
                    .flatten()
                    .cloned()
                    .collect();
                let mut detail = p.description.clone();
                if !p.technologies.is_empty() {
                    detail.push_str(&format!("\n{}", p.technologies.join(", ")));
                }
                entry(&p.name, Some(&detail), &links)
            })
            .collect();
        section(&mut html, "Projects", &body);
    }

    if !record.certifications.is_empty() {
        let body: String = record
            .certifications
            .iter()
            .map(|c| {
                let heading = format!("{} - {} ({})", c.name, c.issuer, c.date);
                entry(&heading, c.url.as_deref(), &[])
            })
            .collect();
        section(&mut html, "Certifications", &body);
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeRecord;
    use crate::test_support::sample_record;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_empty_record_uses_placeholder_and_no_sections() {
        let html = render_html(&ResumeRecord::default());
        assert!(html.contains("<div class=\"name\">Your Name</div>"));
        assert!(!html.contains("section-title"));
        assert!(!html.contains("class=\"contact\""));
    }

    #[test]
    fn test_full_record_renders_every_section() {
        let html = render_html(&sample_record());
        for title in [
            "Professional Summary",
            "Work Experience",
            "Education",
            "Skills",
            "Projects",
            "Certifications",
        ] {
            assert!(html.contains(title), "missing section {title}");
        }
        assert!(html.contains("<title>Resume - John Doe</title>"));
        assert!(html.contains("<li>Cut p99 latency by 40%</li>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = render_html(&sample_record());
        assert!(html.contains("Double-entry bookkeeping &lt;engine&gt;"));
        assert!(!html.contains("<engine>"));
    }
}
