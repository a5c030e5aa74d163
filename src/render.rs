use crate::core::models::poll::Poll;

pub static NO_POLLS: &str = "No polls are available.";

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn index(polls: &[Poll]) -> String {
    if polls.is_empty() {
        return page("Polls", &format!("<p>{}</p>\n", NO_POLLS));
    }
    let mut body = String::from("<ul>\n");
    for poll in polls {
        body.push_str(&format!("<li><a href=\"/polls/{}/\">{}</a></li>\n", poll.id, escape(&poll.question)));
    }
    body.push_str("</ul>\n");
    page("Polls", &body)
}

pub fn detail(poll: &Poll) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>Published {}</p>\n<a href=\"/polls/\">Back to polls</a>\n",
        escape(&poll.question),
        poll.pub_date.format("%Y-%m-%d %H:%M UTC")
    );
    page(&poll.question, &body)
}
