//! Project card rendering.
//!
//! Turns ranked projects into the HTML fragment placed between the README
//! markers: linked pin cards, two per centered row.

mod error;
mod style;

pub use error::RenderError;
pub use style::{CardStyle, DEFAULT_THEME, PIN_CARD_ENDPOINT};

use crate::scoring::ScoredProject;
use handlebars::{no_escape, Handlebars};
use serde_json::json;
use url::Url;

/// Fragment written when no project passes the score floor.
pub const NO_CONTRIBUTIONS_PLACEHOLDER: &str = "<!-- No significant contributions found -->";

/// Opens a two-card row.
const ROW_OPEN: &str = r#"<div align="center">"#;

/// Closes a row.
const ROW_CLOSE: &str = "</div>";

/// A single linked pin card.
const CARD_TEMPLATE: &str = r#"<a href="https://github.com/{{owner}}/{{name}}">
  <img align="center" src="{{badge_url}}" />
</a>"#;

/// Renders project cards.
pub struct CardRenderer {
    handlebars: Handlebars<'static>,
    style: CardStyle,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(CardStyle::default())
    }
}

impl CardRenderer {
    /// Creates a renderer using the given card style.
    #[must_use]
    pub fn new(style: CardStyle) -> Self {
        let mut handlebars = Handlebars::new();
        // Output is HTML embedded in markdown; values are already URL-safe.
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(true);
        Self { handlebars, style }
    }

    /// Renders the fragment for the ranked projects.
    ///
    /// An empty slice yields [`NO_CONTRIBUTIONS_PLACEHOLDER`]. Otherwise cards
    /// are laid out in rows of two, rows separated by a blank line; an odd
    /// final card sits alone in its row.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a card fails to render.
    pub fn render(&self, projects: &[ScoredProject]) -> Result<String, RenderError> {
        if projects.is_empty() {
            return Ok(NO_CONTRIBUTIONS_PLACEHOLDER.to_string());
        }

        let mut lines = Vec::with_capacity(projects.len() * 2);
        for (row_index, row) in projects.chunks(2).enumerate() {
            if row_index > 0 {
                lines.push(String::new());
            }
            lines.push(ROW_OPEN.to_string());
            for project in row {
                lines.push(self.render_card(project)?);
            }
            lines.push(ROW_CLOSE.to_string());
        }

        Ok(lines.join("\n"))
    }

    /// Renders one linked card.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the badge URL or template fails.
    pub fn render_card(&self, project: &ScoredProject) -> Result<String, RenderError> {
        let data = json!({
            "owner": project.owner,
            "name": project.name,
            "badge_url": self.badge_url(&project.owner, &project.name)?.as_str(),
        });

        Ok(self.handlebars.render_template(CARD_TEMPLATE, &data)?)
    }

    /// Builds the pin card image URL for a repository.
    fn badge_url(&self, owner: &str, name: &str) -> Result<Url, RenderError> {
        let hide_border = if self.style.hide_border { "true" } else { "false" };
        Ok(Url::parse_with_params(
            PIN_CARD_ENDPOINT,
            &[
                ("username", owner),
                ("repo", name),
                ("theme", self.style.theme.as_str()),
                ("hide_border", hide_border),
            ],
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ProjectAggregate;

    fn project(owner: &str, name: &str) -> ScoredProject {
        let mut aggregate = ProjectAggregate::new(owner, name, 0);
        aggregate.pr_count = 1;
        aggregate.into_scored()
    }

    fn card(owner: &str, name: &str) -> String {
        format!(
            "<a href=\"https://github.com/{owner}/{name}\">\n  \
             <img align=\"center\" src=\"https://readme-stats-fast.vercel.app/api/pin/?username={owner}&repo={name}&theme=github_dark&hide_border=true\" />\n\
             </a>"
        )
    }

    #[test]
    fn empty_input_renders_placeholder() {
        let rendered = CardRenderer::default().render(&[]).unwrap();
        assert_eq!(rendered, NO_CONTRIBUTIONS_PLACEHOLDER);
    }

    #[test]
    fn single_card_is_wrapped_in_row() {
        let rendered = CardRenderer::default()
            .render(&[project("rust-lang", "cargo")])
            .unwrap();

        let expected = format!("<div align=\"center\">\n{}\n</div>", card("rust-lang", "cargo"));
        assert_eq!(rendered, expected);
    }

    #[test]
    fn cards_are_paired_into_rows() {
        let projects = [
            project("a", "one"),
            project("b", "two"),
            project("c", "three"),
        ];

        let rendered = CardRenderer::default().render(&projects).unwrap();

        let expected = [
            "<div align=\"center\">".to_string(),
            card("a", "one"),
            card("b", "two"),
            "</div>".to_string(),
            String::new(),
            "<div align=\"center\">".to_string(),
            card("c", "three"),
            "</div>".to_string(),
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn even_count_has_no_trailing_separator() {
        let projects = [project("a", "one"), project("b", "two")];

        let rendered = CardRenderer::default().render(&projects).unwrap();

        assert!(rendered.ends_with("</a>\n</div>"));
        assert_eq!(rendered.matches(ROW_OPEN).count(), 1);
        assert!(!rendered.contains("\n\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = CardRenderer::default();
        let projects = [project("a", "one"), project("b", "two"), project("c", "x")];

        assert_eq!(
            renderer.render(&projects).unwrap(),
            renderer.render(&projects).unwrap()
        );
    }

    #[test]
    fn theme_is_configurable() {
        let renderer = CardRenderer::new(CardStyle::with_theme("tokyonight"));

        let rendered = renderer.render_card(&project("a", "one")).unwrap();

        assert!(rendered.contains("&theme=tokyonight&hide_border=true"));
    }

    #[test]
    fn html_is_not_escaped() {
        let rendered = CardRenderer::default()
            .render_card(&project("a", "one"))
            .unwrap();

        assert!(rendered.contains("?username=a&repo=one"));
        assert!(!rendered.contains("&amp;"));
    }
}
