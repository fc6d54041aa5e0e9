pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(html_escape("H&M"), "H&amp;M");
        assert_eq!(
            html_escape(r#"<b class="x">'hi'</b>"#),
            "&lt;b class=&quot;x&quot;&gt;&#39;hi&#39;&lt;/b&gt;"
        );
    }
}
