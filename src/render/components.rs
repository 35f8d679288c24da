//! Presentational units. Each is a pure function of its props to markup;
//! animated ones take the [`Reveal`] chosen by their parent.

use crate::domain::model::{Project, SkillCategory, SocialLink};
use crate::render::markup::{inline, Element};
use crate::render::motion::Reveal;

pub const SKILL_ICONS_BASE: &str = "https://skillicons.dev/icons";

fn animated(tag: &'static str, extra_class: &str, reveal: &Reveal) -> Element {
    Element::new(tag)
        .class(&format!("{} {}", extra_class, reveal.class()))
        .attr("style", &reveal.style())
}

/// Titled container: heading, then the children.
pub fn section(title: &str, reveal: &Reveal, children: Vec<String>) -> String {
    animated("section", "section", reveal)
        .child(Element::new("h2").text(title))
        .child(Element::new("div").children(children))
        .render()
}

/// Checklist row with the fixed leading glyph. `text` may use `**bold**`.
pub fn list_item(text: &str, reveal: &Reveal) -> String {
    animated("li", "list-item", reveal)
        .child(Element::new("span").class("check").text("✅"))
        .child(Element::new("span").child(inline(text)))
        .render()
}

pub fn project_card(project: &Project, reveal: &Reveal) -> String {
    animated("a", "project-card", reveal)
        .external_link(&project.link)
        .child(
            Element::new("img")
                .attr("src", &project.image)
                .attr("alt", &project.title),
        )
        .child(
            Element::new("div")
                .class("body")
                .child(Element::new("h3").text(&project.display_title()))
                .child(Element::new("p").text(&project.description))
                .child(Element::new("span").class("cta").text("View Project →")),
        )
        .render()
}

pub fn social_link(link: &SocialLink) -> String {
    Element::new("a")
        .class("social-link")
        .external_link(&link.href)
        .text(&link.text)
        .render()
}

pub fn skill_icons_url(ids: &[String]) -> String {
    format!("{}?i={}", SKILL_ICONS_BASE, ids.join(","))
}

/// Heading plus one composite icon image for a skill category.
pub fn skill_row(category: SkillCategory, ids: &[String]) -> String {
    Element::new("div")
        .class(&format!("skill-row skill-{}", category.key()))
        .child(Element::new("h3").text(category.heading()))
        .child(
            Element::new("img")
                .attr("src", &skill_icons_url(ids))
                .attr("alt", category.alt_text()),
        )
        .render()
}
