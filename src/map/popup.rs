//! Popup bodies shared by every map.
//!
//! Popups are plain HTML fragments; Leaflet injects them verbatim into the
//! popup pane, so everything taken from data is escaped here.

use htmlize::escape_text;

const HEADER_BG: &str = "#1e3a5f";

/// Render a titled key/value table.
///
/// Rows keep the order of `fields`. The output depends only on the inputs.
pub fn render(title: &str, fields: &[(&str, String)]) -> String {
    let mut rows = String::new();
    for (label, value) in fields {
        rows.push_str(&format!(
            "<tr><td style=\"font-weight:600;color:#555;padding:3px 10px 3px 0;\">{}</td>\
             <td style=\"padding:3px 0;\">{}</td></tr>",
            escape_text(*label),
            escape_text(value.as_str()),
        ));
    }

    format!(
        "<div style=\"font-family:'Malgun Gothic',sans-serif;min-width:180px;\">\
         <div style=\"background:{HEADER_BG};color:#fff;padding:6px 10px;border-radius:4px 4px 0 0;\
         font-size:13px;font-weight:700;\">{}</div>\
         <table style=\"font-size:12px;padding:6px 10px;\">{rows}</table></div>",
        escape_text(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rows_in_order() {
        let html = render(
            "신안성 변전소",
            &[("전압", "765kV".to_string()), ("용량", "6,000MVA".to_string())],
        );
        let voltage = html.find("765kV").unwrap();
        let capacity = html.find("6,000MVA").unwrap();
        assert!(voltage < capacity);
        assert!(html.contains("신안성 변전소"));
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_escapes_markup() {
        let html = render("<b>", &[("a&b", "<script>".to_string())]);
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("a&amp;b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_fields() {
        let html = render("title", &[]);
        assert!(html.contains("<table style=\"font-size:12px;padding:6px 10px;\"></table>"));
    }

    proptest! {
        #[test]
        fn render_is_pure(
            title in ".{0,24}",
            fields in prop::collection::vec(("[a-z가-힣]{1,8}", ".{0,16}"), 0..6),
        ) {
            let pairs: Vec<(&str, String)> =
                fields.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
            prop_assert_eq!(render(&title, &pairs), render(&title, &pairs));
        }
    }
}
