use crate::render::motion::{card_hover, Pose, RevealKind};

const BASE: &str = r#"*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; background: #111827; color: #e5e7eb; font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif; line-height: 1.5; }
a { color: inherit; text-decoration: none; }
.container { margin: 0 auto; max-width: 56rem; padding: 2rem 1rem; }
.site-header { text-align: center; margin-bottom: 4rem; }
.site-header h1 { font-size: 2.75rem; font-weight: 700; color: #fff; margin: 0 0 0.5rem; }
.tagline { font-size: 1.25rem; color: #22d3ee; margin: 0 0 1rem; }
.intro { max-width: 42rem; margin: 0 auto 1.5rem; color: #9ca3af; }
.socials { display: flex; justify-content: center; gap: 1rem; }
.social-link { background: #1f2937; color: #fff; font-weight: 700; padding: 0.5rem 1rem; border-radius: 0.25rem; transition: background-color 300ms; }
.social-link:hover { background: #06b6d4; }
.section { margin-bottom: 3rem; }
.section > h2 { display: inline-block; font-size: 1.875rem; font-weight: 700; color: #fff; margin: 0 0 1.5rem; padding-bottom: 0.5rem; border-bottom: 2px solid #06b6d4; }
.checklist { list-style: none; padding: 0; margin: 1rem 0 0; display: grid; gap: 0.5rem; }
.list-item { background: #1f2937; padding: 0.75rem; border-radius: 0.5rem; display: flex; align-items: center; }
.list-item .check { margin-right: 0.75rem; color: #22d3ee; }
.skills { display: flex; flex-direction: column; align-items: center; gap: 1rem; }
.skills h3 { font-size: 1.125rem; font-weight: 600; color: #fff; margin: 0 0 0.5rem; }
.projects { display: grid; gap: 2rem; }
@media (min-width: 768px) { .projects { grid-template-columns: repeat(2, 1fr); } }
.project-card { display: block; background: #1f2937; border-radius: 0.5rem; overflow: hidden; }
.project-card img { width: 100%; height: 10rem; object-fit: cover; display: block; }
.project-card .body { padding: 1rem; }
.project-card h3 { font-size: 1.25rem; font-weight: 700; color: #fff; margin: 0 0 0.5rem; }
.project-card p { color: #9ca3af; margin: 0 0 1rem; }
.project-card .cta { font-weight: 600; color: #22d3ee; }
.project-card:hover .cta { text-decoration: underline; }
blockquote { border-left: 4px solid #22d3ee; padding-left: 1rem; margin: 0; font-style: italic; color: #9ca3af; }
.site-footer { text-align: center; margin-top: 4rem; padding-top: 2rem; border-top: 1px solid #1f2937; }
.site-footer h2 { font-size: 1.5rem; font-weight: 700; color: #fff; margin: 0 0 1rem; }
.site-footer .socials { margin-bottom: 1.5rem; }
.footer-note { color: #6b7280; margin: 0; }
.sign-off { color: #9ca3af; margin: 0.5rem 0 0; font-weight: 600; }
"#;

fn translate(pose: &Pose) -> String {
    format!("{}px {}px", pose.x, pose.y)
}

/// `@keyframes` plus the class rule for one reveal variant.
///
/// Reveals animate `translate` rather than `transform` so the card hover
/// transform still applies once the animation has filled forwards.
pub fn reveal_rules(kind: RevealKind) -> String {
    let hidden = kind.hidden();
    let visible = kind.visible();
    let transition = kind.transition();
    format!(
        "@keyframes reveal-{name} {{ from {{ opacity: {h_op}; translate: {h_tr}; }} to {{ opacity: {v_op}; translate: {v_tr}; }} }}\n\
         .reveal-{name} {{ animation: reveal-{name} {dur}ms {ease} var(--reveal-delay, 0ms) 1 both; }}\n",
        name = kind.name(),
        h_op = hidden.opacity,
        h_tr = translate(&hidden),
        v_op = visible.opacity,
        v_tr = translate(&visible),
        dur = transition.duration_ms,
        ease = transition.easing.css(),
    )
}

fn hover_rules() -> String {
    let hover = card_hover();
    format!(
        ".project-card {{ transition: transform {}ms {}; }}\n\
         .project-card:hover {{ transform: translateY({}px) scale({}); }}\n",
        hover.transition.duration_ms,
        hover.transition.easing.css(),
        hover.lift_px,
        hover.scale,
    )
}

pub fn stylesheet() -> String {
    let mut css = String::from(BASE);
    for kind in RevealKind::ALL {
        css.push_str(&reveal_rules(kind));
    }
    css.push_str(&hover_rules());
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_rules_run_once_and_fill_both() {
        let rules = reveal_rules(RevealKind::Section);
        assert!(rules.contains("@keyframes reveal-section"));
        assert!(rules.contains("from { opacity: 0; translate: 0px 20px; }"));
        assert!(rules.contains("to { opacity: 1; translate: 0px 0px; }"));
        assert!(rules.contains("500ms ease-out var(--reveal-delay, 0ms) 1 both"));
    }

    #[test]
    fn test_list_item_uses_spring_easing() {
        let rules = reveal_rules(RevealKind::ListItem);
        assert!(rules.contains("translate: -20px 0px"));
        assert!(rules.contains("628ms cubic-bezier(0.34, 1.30, 0.64, 1)"));
    }

    #[test]
    fn test_stylesheet_has_every_variant_and_hover() {
        let css = stylesheet();
        for kind in RevealKind::ALL {
            assert!(css.contains(&format!(".reveal-{} {{", kind.name())));
        }
        assert!(css.contains(".project-card:hover { transform: translateY(-5px) scale(1.02); }"));
    }
}
