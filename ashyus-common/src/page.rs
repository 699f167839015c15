/// Top-level pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Books,
    About,
    Blog,
    Privacy,
    Terms,
}

impl Page {
    /// Pages linked from the header, in display order
    pub const NAV: [Page; 4] = [Page::Home, Page::Books, Page::About, Page::Blog];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Books => "/books",
            Page::About => "/about",
            Page::Blog => "/blog",
            Page::Privacy => "/privacy",
            Page::Terms => "/terms",
        }
    }

    /// Resolve a location path. Anything unknown lands on the home page.
    pub fn from_path(path: &str) -> Self {
        match path.trim_matches('/') {
            "books" => Page::Books,
            "about" => Page::About,
            "blog" => Page::Blog,
            "privacy" => Page::Privacy,
            "terms" => Page::Terms,
            _ => Page::Home,
        }
    }

    /// Document title
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Crônicas da Fantasia | Ashyus Books - Dark Fantasy e Romance",
            Page::Books => "Biblioteca de Livros | Ashyus Books - Sinopses e Capítulos",
            Page::About => "Quem é Ashyus? | Biografia do Autor de Dark Fantasy",
            Page::Blog => "Blog e Lançamentos | Novidades do Universo Ashyus",
            Page::Privacy => "Política de Privacidade | Crônicas da Fantasia",
            Page::Terms => "Termos de Uso | Crônicas da Fantasia",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Books => "Livros",
            Page::About => "Sobre",
            Page::Blog => "Lançamentos",
            Page::Privacy => "Política de Privacidade",
            Page::Terms => "Termos de Uso",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in [
            Page::Home,
            Page::Books,
            Page::About,
            Page::Blog,
            Page::Privacy,
            Page::Terms,
        ] {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(Page::from_path("/nope"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/books/"), Page::Books);
    }
}
