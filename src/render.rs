//! Terminal rendering of the page sections

use std::fmt::Write;

use folio_core::content::{
    self, ABOUT, CONTACT_PITCH, GITHUB_PROFILE, HERO_TECH, HIGHLIGHTS, PROFILE, PROJECTS, QUOTE,
    QUOTE_AUTHOR, SKILLS, SOCIAL_LINKS, STATS,
};

const BAR_WIDTH: usize = 20;
const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Stats,
    Quote,
    Contact,
}

static SECTIONS: phf::Map<&'static str, Section> = phf::phf_map! {
    "hero" => Section::Hero,
    "home" => Section::Hero,
    "about" => Section::About,
    "skills" => Section::Skills,
    "projects" => Section::Projects,
    "stats" => Section::Stats,
    "github" => Section::Stats,
    "quote" => Section::Quote,
    "contact" => Section::Contact,
};

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Stats,
        Section::Quote,
        Section::Contact,
    ];

    pub fn lookup(name: &str) -> Option<Section> {
        SECTIONS.get(name.trim().to_ascii_lowercase().as_str()).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Stats => "stats",
            Section::Quote => "quote",
            Section::Contact => "contact",
        }
    }

    pub fn render(&self, current_year: i32) -> String {
        match self {
            Section::Hero => render_hero(),
            Section::About => render_about(current_year),
            Section::Skills => render_skills(),
            Section::Projects => render_projects(),
            Section::Stats => render_stats(),
            Section::Quote => render_quote(),
            Section::Contact => render_contact(),
        }
    }
}

pub fn render_page(current_year: i32) -> String {
    Section::ALL
        .iter()
        .map(|section| section.render(current_year))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The hero's animated line: typed text followed by the caret when visible.
pub fn hero_line(text: &str, caret: &str, caret_visible: bool) -> String {
    if caret_visible {
        format!("> {text}{caret}")
    } else {
        // Pad so the caret blinking off does not shift anything
        format!("> {text}{}", " ".repeat(caret.chars().count()))
    }
}

/// `█████░░░░░ 50%`
pub fn level_bar(level: u8) -> String {
    let level = level.min(100) as usize;
    let filled = level * BAR_WIDTH / 100;
    format!(
        "{}{} {level:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "─".repeat(RULE_WIDTH));
}

fn render_hero() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", PROFILE.avatar);
    let _ = writeln!(out, "Hi, I'm {}", PROFILE.name);
    let _ = writeln!(out, "📍 {}", PROFILE.location);
    let _ = writeln!(out, "{}", PROFILE.role);
    let badges: Vec<String> = HERO_TECH.iter().map(|t| format!("[{t}]")).collect();
    let _ = writeln!(out, "{}", badges.join(" "));
    let _ = writeln!(out, "(run `play` to start the typing animation)");
    out
}

fn render_about(current_year: i32) -> String {
    let mut out = String::new();
    heading(&mut out, "About Me");
    for paragraph in ABOUT {
        let _ = writeln!(out, "{paragraph}\n");
    }
    let _ = writeln!(
        out,
        "{} Experience Since {} · {}+ Years of Development",
        PROFILE.avatar,
        PROFILE.coding_since,
        PROFILE.years_of_experience(current_year)
    );
    let cards: Vec<String> = HIGHLIGHTS
        .iter()
        .map(|h| format!("{} {}", h.icon, h.label))
        .collect();
    let _ = writeln!(out, "{}", cards.join("  |  "));
    out
}

fn render_skills() -> String {
    let mut out = String::new();
    heading(&mut out, "Skills & Technologies");
    for category in SKILLS {
        let _ = writeln!(out, "{} (avg {}%)", category.title, category.average_level());
        for skill in category.skills {
            let _ = writeln!(
                out,
                "  {} {:<12} {}",
                skill.icon,
                skill.name,
                level_bar(skill.level)
            );
        }
    }
    out
}

fn render_projects() -> String {
    let mut out = String::new();
    heading(&mut out, "Featured Projects");
    for project in PROJECTS {
        let _ = writeln!(out, "{} {}  [{}]", project.icon, project.title, project.stats);
        let _ = writeln!(out, "  {}", project.description);
        let _ = writeln!(out, "  tech: {}", project.tech.join(", "));
        let _ = writeln!(out, "  code: {}", project.source);
        let _ = writeln!(out, "  demo: {}", project.demo);
    }
    out
}

fn render_stats() -> String {
    let mut out = String::new();
    heading(&mut out, "GitHub Statistics");
    for stat in STATS {
        let _ = writeln!(out, "  {} {:>6}  {}", stat.icon, stat.value, stat.label);
    }
    let _ = writeln!(out, "\nView GitHub Profile: {GITHUB_PROFILE}");
    out
}

fn render_quote() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "“{QUOTE}”");
    let _ = writeln!(out, "    – {QUOTE_AUTHOR}");
    out
}

fn render_contact() -> String {
    let mut out = String::new();
    heading(&mut out, "Let's Build Something Great Together!");
    let _ = writeln!(out, "{CONTACT_PITCH}\n");
    for link in SOCIAL_LINKS {
        let _ = writeln!(out, "  {:<10} {}", link.label, link.href);
    }
    if let Some(mail) = content::find_social("gmail") {
        let _ = writeln!(out, "\nOr just write: {}", mail.href.trim_start_matches("mailto:"));
    }
    out
}
