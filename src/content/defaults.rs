//! Built-in page content.

use crate::domain::model::{Content, Profile, Project, Skills, SocialLink};

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/brian-kiprono/";
pub const GITHUB_URL: &str = "https://github.com/BrianRony";
pub const EMAIL_HREF: &str = "mailto:kipronobrian97@gmail.com";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn skills() -> Skills {
    Skills {
        languages: strings(&["js", "python", "html", "css"]),
        frameworks: strings(&["react", "flask", "laravel"]),
        tools: strings(&["git", "github", "vscode", "postman"]),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "EPL Hub — Live Football News & Updates".to_string(),
            emoji: "⚽".to_string(),
            description: "A clean football platform for EPL fans, built for speed and simplicity."
                .to_string(),
            link: "https://epl-hub-sigma.vercel.app/".to_string(),
            image: "https://via.placeholder.com/520x260.png?text=EPL+Hub".to_string(),
        },
        Project {
            title: "Maasai Mara Game — Wildlife Adventure".to_string(),
            emoji: "🦁".to_string(),
            description:
                "A fun browser-based game inspired by the thrill and beauty of Maasai Mara."
                    .to_string(),
            link: "https://maasai-mara-game.vercel.app/".to_string(),
            image: "https://via.placeholder.com/520x260.png?text=Maasai+Mara+Game".to_string(),
        },
    ]
}

pub fn socials() -> Vec<SocialLink> {
    vec![
        SocialLink {
            href: LINKEDIN_URL.to_string(),
            text: "LinkedIn".to_string(),
        },
        SocialLink {
            href: GITHUB_URL.to_string(),
            text: "GitHub".to_string(),
        },
        SocialLink {
            href: EMAIL_HREF.to_string(),
            text: "Email".to_string(),
        },
    ]
}

pub fn profile() -> Profile {
    Profile {
        name: "Brian Kiprono Ngetich".to_string(),
        short_name: "Brian Ngetich".to_string(),
        tagline: "🚀 Software Developer | Python • JavaScript • APIs • React".to_string(),
        intro: "I build clean, functional web apps and APIs — with a strong focus on performance, simplicity, and real-world impact.".to_string(),
        bio: "a passionate developer who loves turning ideas into working products. I enjoy building APIs, designing clean UIs, and creating tools that solve real problems.".to_string(),
        about: strings(&[
            "🔥 I like writing code that is **simple, readable, and scalable**",
            "🧠 I’m always learning and improving my engineering skills",
            "⚙️ I enjoy backend logic just as much as frontend polish",
            "🎮 Gamer at heart — I love games and tech that feels alive",
        ]),
        philosophy: "“Build things that work. Make them clean. Make them fast. Make them meaningful.”".to_string(),
        focus: strings(&[
            "Improving backend architecture (Flask + DB design)",
            "Building more full-stack applications",
            "Writing cleaner React code (components, hooks, state)",
            "Shipping more real projects consistently 🚀",
        ]),
        footer_note: "⭐ If you like what I build, feel free to follow my GitHub ⭐".to_string(),
        footer_sign_off: "Let’s build something great.".to_string(),
        socials: socials(),
    }
}

pub fn content() -> Content {
    Content {
        profile: profile(),
        skills: skills(),
        projects: projects(),
    }
}
