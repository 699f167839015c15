//! First-chapter reader text

use dioxus::prelude::*;

/// One rendered line of a chapter
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChapterLine {
    Heading(String),
    Paragraph(String),
}

/// Split chapter markdown into lines worth rendering. Blank lines are dropped;
/// `#`-prefixed lines become headings with the markers removed.
pub fn chapter_lines(markdown: &str) -> Vec<ChapterLine> {
    markdown
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let stripped = line.trim_start_matches('#');
            if stripped.len() < line.len() && stripped.starts_with(' ') {
                ChapterLine::Heading(stripped.trim().to_string())
            } else {
                ChapterLine::Paragraph(line.to_string())
            }
        })
        .collect()
}

#[component]
pub fn ChapterText(markdown: String) -> Element {
    let lines = chapter_lines(&markdown);

    rsx! {
        article { class: "font-serif text-slate-300 leading-relaxed space-y-4",
            if lines.is_empty() {
                p { class: "italic text-slate-500", "O primeiro capítulo ainda está sendo escrito..." }
            }
            for (i , line) in lines.into_iter().enumerate() {
                match line {
                    ChapterLine::Heading(text) => rsx! {
                        h3 { key: "{i}", class: "text-2xl text-amber-400 font-bold", "{text}" }
                    },
                    ChapterLine::Paragraph(text) => rsx! {
                        p { key: "{i}", class: "indent-6", "{text}" }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped_and_headings_detected() {
        let lines = chapter_lines("## Capítulo 1\n\n  Era uma vez.  \n\n#hashtag\n");
        assert_eq!(
            lines,
            vec![
                ChapterLine::Heading("Capítulo 1".into()),
                ChapterLine::Paragraph("Era uma vez.".into()),
                ChapterLine::Paragraph("#hashtag".into()),
            ]
        );
    }

    #[test]
    fn empty_chapter_has_no_lines() {
        assert!(chapter_lines(" \n\n").is_empty());
    }
}
