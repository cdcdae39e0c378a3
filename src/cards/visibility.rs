/// Face-up or face-down, as reported after a toggle.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Visible,
    Hidden,
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }
}
impl From<Visibility> for bool {
    fn from(v: Visibility) -> bool {
        matches!(v, Visibility::Visible)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Visible => write!(f, "Visible"),
            Self::Hidden => write!(f, "Not visible"),
        }
    }
}
