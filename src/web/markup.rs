// HTML fragments for the output card. Pure string builders so they can be
// checked without a browser.
use crate::catalog::SuggestionRecord;

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

pub fn pending_markup(message: &str) -> String {
    format!(
        "<div class=\"thinking-state\">\
           <span class=\"thinking-text\">{}</span>\
           <div class=\"thinking-dots\"><span></span><span></span><span></span></div>\
         </div>",
        escape_html(message)
    )
}

pub fn result_markup(suggestion: &SuggestionRecord, twist: Option<&str>) -> String {
    let map_link = suggestion
        .map_link
        .map(|href| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"map-link\">\
                   <span class=\"map-icon\">📍</span> View on Google Maps\
                 </a>",
                escape_html(href)
            )
        })
        .unwrap_or_default();
    let twist = twist
        .map(|t| format!("<div class=\"twist\">✨ {}</div>", escape_html(t)))
        .unwrap_or_default();

    format!(
        "<h3>{title}</h3>\
         <p class=\"description\">{description}</p>\
         <div class=\"meta\">\
           <div class=\"meta-item\"><span class=\"icon\">⏱️</span><span>{duration}</span></div>\
           <div class=\"meta-item\"><span class=\"icon\">⚡</span><span>{energy}</span></div>\
         </div>\
         {map_link}{twist}",
        title = escape_html(suggestion.title),
        description = escape_html(suggestion.description),
        duration = escape_html(suggestion.duration),
        energy = suggestion.energy.label(),
    )
}
