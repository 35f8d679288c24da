use crate::domain::model::{Content, Profile, SkillCategory, SocialLink};
use crate::render::components::{list_item, project_card, section, skill_row, social_link};
use crate::render::markup::{escape, Element};
use crate::render::motion::{RevealKind, Stagger, Timeline, FOOTER_DELAY_MS};

pub const STYLESHEET_PATH: &str = "styles.css";

/// A rendered document and the reveal timeline of its animated nodes.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub html: String,
    pub timeline: Timeline,
}

pub fn page_title(profile: &Profile) -> String {
    format!("{} — Portfolio", profile.name)
}

fn socials(links: &[SocialLink]) -> String {
    Element::new("div")
        .class("socials")
        .children(links.iter().map(social_link))
        .render()
}

fn checklist(
    timeline: &mut Timeline,
    id_prefix: &str,
    items: &[String],
    stagger: Stagger,
) -> String {
    let mut rows = Vec::with_capacity(items.len());
    for (i, text) in items.iter().enumerate() {
        let reveal = timeline.register(
            format!("{}-{}", id_prefix, i),
            RevealKind::ListItem,
            stagger.delay(i),
        );
        rows.push(list_item(text, &reveal));
    }
    Element::new("ul").class("checklist").children(rows).render()
}

fn header(content: &Content, timeline: &mut Timeline) -> String {
    let profile = &content.profile;
    let reveal = timeline.register("header", RevealKind::Header, 0);
    Element::new("header")
        .class(&format!("site-header {}", reveal.class()))
        .attr("style", &reveal.style())
        .child(Element::new("h1").text(&format!("Hi 👋, I'm {}", profile.name)))
        .child(Element::new("p").class("tagline").text(&profile.tagline))
        .child(Element::new("p").class("intro").text(&profile.intro))
        .child(socials(&profile.socials))
        .render()
}

fn main_sections(content: &Content, timeline: &mut Timeline) -> String {
    let profile = &content.profile;
    let sections = Stagger::after(0);
    let mut body = Vec::new();

    // About
    let delay = sections.delay(0);
    let reveal = timeline.register("about", RevealKind::Section, delay);
    let bio = Element::new("p")
        .text("I'm ")
        .child(Element::new("strong").text(&profile.short_name))
        .text(&format!(", {}", profile.bio))
        .render();
    let about = checklist(timeline, "about-item", &profile.about, Stagger::after(delay));
    body.push(section("🌌 About Me", &reveal, vec![bio, about]));

    // Tech Stack
    let reveal = timeline.register("tech-stack", RevealKind::Section, sections.delay(1));
    let rows = Element::new("div")
        .class("skills")
        .children(
            SkillCategory::ALL
                .iter()
                .map(|&category| skill_row(category, content.skills.get(category))),
        )
        .render();
    body.push(section("🧰 Tech Stack", &reveal, vec![rows]));

    // Projects
    let delay = sections.delay(2);
    let reveal = timeline.register("projects", RevealKind::Section, delay);
    let cards = Stagger::after(delay);
    let mut grid = Vec::with_capacity(content.projects.len());
    for (i, project) in content.projects.iter().enumerate() {
        let card = timeline.register(
            format!("project-{}", project.title),
            RevealKind::Card,
            cards.delay(i),
        );
        grid.push(project_card(project, &card));
    }
    let grid = Element::new("div").class("projects").children(grid).render();
    body.push(section("🚀 Featured Projects", &reveal, vec![grid]));

    // Philosophy
    let reveal = timeline.register("philosophy", RevealKind::Section, sections.delay(3));
    let quote = Element::new("blockquote").text(&profile.philosophy).render();
    body.push(section("🧠 My Development Philosophy", &reveal, vec![quote]));

    // Current Focus
    let delay = sections.delay(4);
    let reveal = timeline.register("focus", RevealKind::Section, delay);
    let focus = checklist(timeline, "focus-item", &profile.focus, Stagger::after(delay));
    body.push(section("📈 Current Focus", &reveal, vec![focus]));

    Element::new("main").children(body).render()
}

fn footer(content: &Content, timeline: &mut Timeline) -> String {
    let profile = &content.profile;
    let reveal = timeline.register("footer", RevealKind::Footer, FOOTER_DELAY_MS);
    Element::new("footer")
        .class(&format!("site-footer {}", reveal.class()))
        .attr("style", &reveal.style())
        .child(Element::new("h2").text("🤝 Let’s Connect"))
        .child(socials(&profile.socials))
        .child(Element::new("p").class("footer-note").text(&profile.footer_note))
        .child(Element::new("p").class("sign-off").text(&profile.footer_sign_off))
        .render()
}

/// Render the whole document. Same content in, same bytes out.
pub fn render_page(content: &Content) -> Page {
    let mut timeline = Timeline::new();
    let title = page_title(&content.profile);

    let header = header(content, &mut timeline);
    let main = main_sections(content, &mut timeline);
    let footer = footer(content, &mut timeline);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&title)));
    html.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n",
        STYLESHEET_PATH
    ));
    html.push_str("</head>\n<body>\n<div class=\"container\">\n");
    for block in [header, main, footer] {
        html.push_str(&block);
        html.push('\n');
    }
    html.push_str("</div>\n</body>\n</html>\n");

    tracing::debug!(
        "Rendered page '{}' with {} animated nodes",
        title,
        timeline.len()
    );

    Page {
        title,
        html,
        timeline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::defaults;
    use crate::render::motion::RevealState;

    #[test]
    fn test_header_renders_name_and_tagline() {
        let page = render_page(&defaults::content());
        assert!(page.html.contains("<h1>Hi 👋, I&#39;m Brian Kiprono Ngetich</h1>"));
        assert!(page
            .html
            .contains("🚀 Software Developer | Python • JavaScript • APIs • React"));
        assert_eq!(page.title, "Brian Kiprono Ngetich — Portfolio");
    }

    #[test]
    fn test_sections_in_order() {
        let page = render_page(&defaults::content());
        let positions: Vec<usize> = [
            "🌌 About Me",
            "🧰 Tech Stack",
            "🚀 Featured Projects",
            "🧠 My Development Philosophy",
            "📈 Current Focus",
            "🤝 Let’s Connect",
        ]
        .iter()
        .map(|t| page.html.find(t).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sections_stagger_by_index() {
        let page = render_page(&defaults::content());
        let delays: Vec<u32> = ["about", "tech-stack", "projects", "philosophy", "focus"]
            .iter()
            .map(|id| {
                page.timeline
                    .entries()
                    .iter()
                    .find(|e| e.id == *id)
                    .unwrap()
                    .reveal
                    .delay_ms
            })
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400]);
    }

    #[test]
    fn test_focus_items_follow_their_section() {
        let page = render_page(&defaults::content());
        let delays: Vec<u32> = page
            .timeline
            .entries()
            .iter()
            .filter(|e| e.id.starts_with("focus-item-"))
            .map(|e| e.reveal.delay_ms)
            .collect();
        assert_eq!(delays, vec![400, 500, 600, 700]);
    }

    #[test]
    fn test_timeline_counts_every_animated_node() {
        let mut page = render_page(&defaults::content());
        // header + 5 sections + 4 about + 2 cards + 4 focus + footer
        assert_eq!(page.timeline.len(), 17);
        assert!(page
            .timeline
            .entries()
            .iter()
            .all(|e| e.state == RevealState::Hidden));
        assert_eq!(page.timeline.mount(), 17);
    }

    #[test]
    fn test_bio_bold_name() {
        let page = render_page(&defaults::content());
        assert!(page.html.contains(
            "<p>I&#39;m <strong>Brian Ngetich</strong>, a passionate developer"
        ));
    }
}
