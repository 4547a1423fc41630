//! Inline HTML rendering for the form-facing routes.

use super::domain::Submission;

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub(crate) fn render_form(error: Option<&str>) -> String {
    let error_block = match error {
        Some(message) => format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(message)
        ),
        None => String::new(),
    };

    let body = format!(
        "<h1>Submit Your Details</h1>\n{error_block}<form method=\"post\" action=\"/submit\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label><br>\n\
         <label>Email <input type=\"text\" name=\"email\"></label><br>\n\
         <label>Age (optional) <input type=\"text\" name=\"age\"></label><br>\n\
         <button type=\"submit\">Submit</button>\n</form>\n\
         <p><a href=\"/view-data\">View submissions</a></p>"
    );
    page("Submit", &body)
}

pub(crate) fn render_success() -> String {
    page(
        "Success",
        "<h1>Submission received</h1>\n<p><a href=\"/\">Submit another</a> | <a href=\"/view-data\">View submissions</a></p>",
    )
}

pub(crate) fn render_submissions(submissions: &[Submission]) -> String {
    let mut rows = String::new();
    for submission in submissions {
        let age = submission
            .age
            .map(|age| age.to_string())
            .unwrap_or_else(|| "-".to_string());
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{email}</td><td>{age}</td><td>{at}</td>\
             <td><form method=\"post\" action=\"/delete/{id}\"><button type=\"submit\">Delete</button></form></td></tr>\n",
            id = submission.id,
            name = escape_html(&submission.name),
            email = escape_html(&submission.email),
            at = submission.submitted_at.format("%Y-%m-%d %H:%M:%S"),
        ));
    }

    let body = if submissions.is_empty() {
        "<h1>Submissions</h1>\n<p>No submissions yet.</p>\n<p><a href=\"/\">Back to form</a></p>".to_string()
    } else {
        format!(
            "<h1>Submissions</h1>\n<table>\n<tr><th>ID</th><th>Name</th><th>Email</th><th>Age</th><th>Submitted</th><th></th></tr>\n{rows}</table>\n<p><a href=\"/\">Back to form</a></p>"
        )
    };
    page("Submissions", &body)
}
