//! Header profile link and drawer profile card.

use crate::routes::Route;
use lm_api_types::SessionRecord;

/// `href` used while the link opens the drawer instead of navigating.
pub const DRAWER_HREF: &str = "javascript:void(0)";
pub const GUEST_ICON_HTML: &str = r#"<i class="fa-solid fa-user"></i>"#;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileView {
    Guest,
    Member {
        avatar_letter: String,
        username: String,
        email_label: String,
    },
}

impl ProfileView {
    pub fn from_session(session: Option<&SessionRecord>) -> Self {
        match session {
            None => ProfileView::Guest,
            Some(record) => ProfileView::Member {
                avatar_letter: record.avatar_letter(),
                username: record.username.clone(),
                email_label: if record.email.is_empty() {
                    "Member".to_owned()
                } else {
                    record.email.clone()
                },
            },
        }
    }

    pub fn icon_html(&self) -> String {
        match self {
            ProfileView::Guest => GUEST_ICON_HTML.to_owned(),
            ProfileView::Member { avatar_letter, .. } => format!(
                r#"<span class="user-avatar">{}</span>"#,
                crate::markup::html_escape(avatar_letter)
            ),
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            ProfileView::Guest => DRAWER_HREF,
            ProfileView::Member { .. } => Route::Profile.path(),
        }
    }

    /// Whether clicking the link should open the auth drawer.
    pub fn opens_drawer(&self) -> bool {
        matches!(self, ProfileView::Guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_link_opens_drawer() {
        let view = ProfileView::from_session(None);
        assert!(view.opens_drawer());
        assert_eq!(view.href(), DRAWER_HREF);
        assert_eq!(view.icon_html(), GUEST_ICON_HTML);
    }

    #[test]
    fn member_link_shows_avatar_letter() {
        let record = SessionRecord::new("ana", "ana@x.com").expect("valid record");
        let view = ProfileView::from_session(Some(&record));
        assert!(!view.opens_drawer());
        assert_eq!(view.href(), "/profile");
        assert_eq!(view.icon_html(), r#"<span class="user-avatar">A</span>"#);
    }

    #[test]
    fn member_without_email_is_labelled_member() {
        let record = SessionRecord::new("bo", "").expect("valid record");
        match ProfileView::from_session(Some(&record)) {
            ProfileView::Member { email_label, .. } => assert_eq!(email_label, "Member"),
            ProfileView::Guest => panic!("expected member view"),
        }
    }
}
