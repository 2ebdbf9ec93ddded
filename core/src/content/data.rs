use super::{Highlight, Profile, Project, Skill, SkillCategory, SocialLink, Stat};

pub const PROFILE: Profile = Profile {
    name: "Thành Bảo",
    role: "Mobile & Web Developer",
    location: "Vietnam 🇻🇳",
    avatar: "👨‍💻",
    coding_since: 2020,
};

pub const HERO_TECH: &[&str] = &["Flutter", "Kotlin", "Firebase", "React", "Angular"];

pub const ABOUT: &[&str] = &[
    "I'm Thành Bảo, a Mobile & Web Developer from Vietnam 🇻🇳 with experience since 2020. \
     I love building cross-platform apps with Flutter, React, and Firebase. I believe in \
     clean code, smooth UX, and scalable architecture.",
    "When I'm not coding, you'll find me exploring new technologies, contributing to open \
     source, or turning coffee into features! I love building applications that make a \
     difference in people's lives.",
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "📱",
        label: "Mobile Apps",
    },
    Highlight {
        icon: "🌐",
        label: "Web Apps",
    },
    Highlight {
        icon: "🔥",
        label: "Firebase",
    },
    Highlight {
        icon: "☕",
        label: "Coffee Lover",
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "mobile",
        title: "Mobile Development",
        skills: &[
            Skill {
                name: "Flutter",
                icon: "📱",
                level: 95,
            },
            Skill {
                name: "Kotlin",
                icon: "🤖",
                level: 90,
            },
            Skill {
                name: "Dart",
                icon: "🎯",
                level: 92,
            },
        ],
    },
    SkillCategory {
        name: "web",
        title: "Web Development",
        skills: &[
            Skill {
                name: "React",
                icon: "⚛️",
                level: 88,
            },
            Skill {
                name: "Angular",
                icon: "🅰️",
                level: 85,
            },
            Skill {
                name: "TypeScript",
                icon: "📘",
                level: 90,
            },
        ],
    },
    SkillCategory {
        name: "backend",
        title: "Backend & Database",
        skills: &[
            Skill {
                name: "Firebase",
                icon: "🔥",
                level: 93,
            },
            Skill {
                name: "Node.js",
                icon: "🟢",
                level: 87,
            },
            Skill {
                name: "MongoDB",
                icon: "🍃",
                level: 85,
            },
        ],
    },
    SkillCategory {
        name: "tools",
        title: "Tools & Others",
        skills: &[
            Skill {
                name: "Git",
                icon: "🌿",
                level: 95,
            },
            Skill {
                name: "VS Code",
                icon: "💻",
                level: 98,
            },
            Skill {
                name: "Figma",
                icon: "🎨",
                level: 80,
            },
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "MedAI – Skin Cancer Detection",
        description: "AI-powered mobile app for early skin cancer detection using TensorFlow \
                      and Flutter with 95% accuracy rate",
        tech: &["Flutter", "TensorFlow", "Dart", "Python"],
        icon: "🏥",
        stats: "10K+ Downloads",
        source: "https://github.com/thanhhbao",
        demo: "https://medai-demo.com",
    },
    Project {
        title: "StreamFlow – Music Streaming",
        description: "Real-time music streaming platform with WebRTC integration and social \
                      features",
        tech: &["Flutter", "WebRTC", "Firebase", "Node.js"],
        icon: "🎵",
        stats: "5K+ Users",
        source: "https://github.com/thanhhbao",
        demo: "https://streamflow-demo.com",
    },
    Project {
        title: "E-commerce App – Full-stack Shopping",
        description: "Complete shopping solution with payment integration, inventory \
                      management, and analytics",
        tech: &["React", "MongoDB", "Node.js", "Stripe"],
        icon: "🛒",
        stats: "50+ Products",
        source: "https://github.com/thanhhbao",
        demo: "https://ecommerce-demo.com",
    },
    Project {
        title: "Admin Dashboard – Data Visualization",
        description: "Interactive dashboard with real-time analytics, beautiful charts, and \
                      comprehensive reporting",
        tech: &["Angular", "D3.js", "TypeScript", "Chart.js"],
        icon: "📊",
        stats: "Real-time Data",
        source: "https://github.com/thanhhbao",
        demo: "https://dashboard-demo.com",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        icon: "🐙",
        value: "1,247",
        label: "Contributions",
    },
    Stat {
        icon: "⭐",
        value: "42",
        label: "Repositories",
    },
    Stat {
        icon: "🔀",
        value: "156",
        label: "Commits",
    },
];

pub const GITHUB_PROFILE: &str = "https://github.com/thanhhbao";

pub const QUOTE: &str = "Code is like humor. When you have to explain it, it's bad.";

pub const QUOTE_AUTHOR: &str = "Cory House";

pub const CONTACT_PITCH: &str = "Ready to turn your ideas into amazing applications? \
                                 Let's connect and create something awesome! 🚀";

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/thanhbao1",
    },
    SocialLink {
        label: "Gmail",
        href: "mailto:thanhhbao4123@gmail.com",
    },
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/thanhhbao.0412",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/thanhhbao",
    },
];
