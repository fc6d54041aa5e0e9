//! Header profile link and the drawer's profile card.

use crate::dom::{self, Elements};
use crate::{auth, state};
use lm_storefront_core::profile::ProfileView;
use web_sys::MouseEvent;

fn current_view() -> ProfileView {
    ProfileView::from_session(state::session().load().as_ref())
}

/// Redraw the profile link and card from the stored session.
pub fn refresh(els: &Elements) {
    let view = current_view();

    if let Some(link) = &els.profile_link {
        link.set_inner_html(&view.icon_html());
        if let Err(e) = link.set_attribute("href", view.href()) {
            tracing::warn!("profile link not updated: {e:?}");
        }
    }

    let card = &els.profile_card;
    match &view {
        ProfileView::Member {
            avatar_letter,
            username,
            email_label,
        } => {
            if let Some(el) = &card.large_avatar {
                el.set_text_content(Some(avatar_letter));
            }
            if let Some(el) = &card.username {
                el.set_text_content(Some(username));
            }
            if let Some(el) = &card.email {
                el.set_text_content(Some(email_label));
            }
        }
        ProfileView::Guest => {}
    }
}

/// The link opens the drawer for guests and follows its `href` for members.
pub fn bind(els: &Elements) {
    let Some(link) = &els.profile_link else {
        return;
    };
    let els2 = els.clone();
    dom::listen(link, "click", move |e: MouseEvent| {
        if current_view().opens_drawer() {
            e.prevent_default();
            auth::open_drawer(&els2);
        }
    });
}
