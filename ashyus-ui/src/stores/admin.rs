//! Admin panel state

use dioxus::prelude::*;

/// Panel sections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    AddBook,
    EditBooks,
    Banners,
    Releases,
    AuthorPhoto,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::AddBook,
        AdminTab::EditBooks,
        AdminTab::Banners,
        AdminTab::Releases,
        AdminTab::AuthorPhoto,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::AddBook => "Novo Livro",
            AdminTab::EditBooks => "Editar Livros",
            AdminTab::Banners => "Banners",
            AdminTab::Releases => "Lançamentos",
            AdminTab::AuthorPhoto => "Foto do Autor",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AdminTab::AddBook => "add-book",
            AdminTab::EditBooks => "edit-books",
            AdminTab::Banners => "banners",
            AdminTab::Releases => "releases",
            AdminTab::AuthorPhoto => "author-photo",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    /// Saved, but only in this browser session
    Warning,
    Error,
}

/// Inline result message shown at the top of the panel
#[derive(Clone, Debug, PartialEq)]
pub struct AdminNotice {
    pub kind: NoticeKind,
    pub message: String,
}

impl AdminNotice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AdminState {
    pub authenticated: bool,
    pub tab: AdminTab,
    /// A write is in flight
    pub busy: bool,
    pub notice: Option<AdminNotice>,
    pub login_error: Option<String>,
    /// Bumped after every successful write; forms reset when it changes
    pub saved_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_keys_resolve() {
        for tab in AdminTab::ALL {
            assert_eq!(AdminTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(AdminTab::from_key("nope"), None);
    }
}
