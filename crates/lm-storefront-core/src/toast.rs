//! Toast notification content.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Wishlist,
    Error,
    Info,
}

impl ToastKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Wishlist => "wishlist",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2713}",
            ToastKind::Wishlist => "\u{2665}",
            ToastKind::Error => "!",
            ToastKind::Info => "i",
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            ToastKind::Success | ToastKind::Info => "#b504a3",
            ToastKind::Wishlist | ToastKind::Error => "#ff3366",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_have_distinct_classes() {
        let kinds = [
            ToastKind::Success,
            ToastKind::Wishlist,
            ToastKind::Error,
            ToastKind::Info,
        ];
        let mut classes: Vec<_> = kinds.iter().map(|k| k.class_name()).collect();
        classes.dedup();
        assert_eq!(classes.len(), kinds.len());
    }

    #[test]
    fn error_toast_uses_alert_accent() {
        let toast = Toast::error("nope");
        assert_eq!(toast.kind.accent(), "#ff3366");
        assert_eq!(toast.kind.icon(), "!");
    }
}
