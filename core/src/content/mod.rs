//! Static portfolio content
//!
//! Read-only data rendered by the page sections. Nothing here is mutated at
//! runtime.

mod data;

pub use data::{
    ABOUT, CONTACT_PITCH, GITHUB_PROFILE, HERO_TECH, HIGHLIGHTS, PROFILE, PROJECTS, QUOTE,
    QUOTE_AUTHOR, SKILLS, SOCIAL_LINKS, STATS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub avatar: &'static str,
    pub coding_since: i32,
}

impl Profile {
    /// Whole years since `coding_since`; never negative.
    pub fn years_of_experience(&self, current_year: i32) -> u32 {
        u32::try_from(current_year - self.coding_since).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Proficiency percentage, 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    /// Lookup key (`mobile`, `web`, ...)
    pub name: &'static str,
    pub title: &'static str,
    pub skills: &'static [Skill],
}

impl SkillCategory {
    pub fn average_level(&self) -> u8 {
        if self.skills.is_empty() {
            return 0;
        }
        let total: u32 = self.skills.iter().map(|s| u32::from(s.level)).sum();
        (total / self.skills.len() as u32) as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub icon: &'static str,
    pub stats: &'static str,
    pub source: &'static str,
    pub demo: &'static str,
}

/// One figure on the GitHub statistics card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: &'static str,
    /// Display-ready, thousands already grouped
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn skill_category(name: &str) -> Option<&'static SkillCategory> {
    SKILLS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

pub fn find_social(label: &str) -> Option<&'static SocialLink> {
    SOCIAL_LINKS
        .iter()
        .find(|link| link.label.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_lookup_ignores_case() {
        let web = skill_category("WEB").unwrap();
        assert_eq!(web.title, "Web Development");
        assert!(skill_category("design").is_none());
    }

    #[test]
    fn average_level_rounds_down() {
        // 95 + 90 + 92 = 277 / 3
        assert_eq!(skill_category("mobile").unwrap().average_level(), 92);
        let empty = SkillCategory {
            name: "none",
            title: "None",
            skills: &[],
        };
        assert_eq!(empty.average_level(), 0);
    }

    #[test]
    fn levels_are_percentages() {
        for category in SKILLS {
            assert_eq!(category.skills.len(), 3);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn social_lookup() {
        assert_eq!(find_social("gmail").unwrap().href, "mailto:thanhhbao4123@gmail.com");
        assert!(find_social("twitter").is_none());
    }

    #[test]
    fn experience_saturates() {
        assert_eq!(PROFILE.years_of_experience(2025), 5);
        assert_eq!(PROFILE.years_of_experience(2020), 0);
        assert_eq!(PROFILE.years_of_experience(2019), 0);
    }

    #[test]
    fn github_stats_in_card_order() {
        let labels: Vec<_> = STATS.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["Contributions", "Repositories", "Commits"]);
        assert_eq!(STATS[0].value, "1,247");
    }

    #[test]
    fn every_project_links_somewhere() {
        assert_eq!(PROJECTS.len(), 4);
        for project in PROJECTS {
            assert!(project.source.starts_with("https://"));
            assert!(project.demo.starts_with("https://"));
            assert!(!project.tech.is_empty());
        }
    }
}
