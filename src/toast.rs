/// Toast flavour. Maps onto the toolkit's contextual background classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn background_class(self) -> &'static str {
        match self {
            ToastKind::Success => "text-bg-success",
            ToastKind::Error => "text-bg-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastNotification {
    pub kind: ToastKind,
    pub message: String,
}

impl ToastNotification {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn class_name(&self) -> String {
        format!(
            "toast align-items-center {} border-0",
            self.kind.background_class()
        )
    }
}

pub const CONTAINER_CLASS: &str = "toast-container position-fixed top-0 end-0 p-3";
pub const CONTAINER_Z_INDEX: &str = "9999";
pub const DISMISS_CLASS: &str = "btn-close btn-close-white me-2 m-auto";
