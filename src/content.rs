// Portfolio content data. Pure copy; nothing here drives behavior beyond
// what the screens choose to render.

pub struct Profile {
    pub name: &'static str,
    pub class: &'static str,
    pub guild: &'static str,
    pub bio: &'static [&'static str],
}

pub struct Stat {
    pub name: &'static str,
    pub value: u8,
}

pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    pub level: u8,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum QuestStatus {
    Complete,
    Active,
    SideQuest,
}

impl QuestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complete => "CLEARED",
            Self::Active => "IN PROGRESS",
            Self::SideQuest => "SIDE QUEST",
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub status: QuestStatus,
    pub summary: &'static str,
    pub stack: &'static str,
    pub url: Option<&'static str>,
}

pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
    pub url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "ABHINAV D.",
    class: "FULL-STACK DEVELOPER",
    guild: "FREELANCE ADVENTURERS GUILD",
    bio: &[
        "A wandering engineer who learned the craft in browser dungeons",
        "and server caverns. Collects side projects the way other",
        "adventurers collect potions.",
        "Currently questing for interesting problems and good teammates.",
    ],
};

pub const STATS: &[Stat] = &[
    Stat { name: "STR (Backend)", value: 8 },
    Stat { name: "DEX (Frontend)", value: 9 },
    Stat { name: "INT (Architecture)", value: 7 },
    Stat { name: "WIS (Debugging)", value: 8 },
    Stat { name: "CHA (Communication)", value: 7 },
    Stat { name: "LCK (Shipping)", value: 6 },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", category: "Weapons", level: 9 },
    Skill { name: "React", category: "Weapons", level: 9 },
    Skill { name: "Node.js", category: "Weapons", level: 8 },
    Skill { name: "TypeScript", category: "Weapons", level: 8 },
    Skill { name: "CSS / Tailwind", category: "Armor", level: 8 },
    Skill { name: "HTML", category: "Armor", level: 9 },
    Skill { name: "Git", category: "Tools", level: 8 },
    Skill { name: "Docker", category: "Tools", level: 6 },
    Skill { name: "PostgreSQL", category: "Scrolls", level: 7 },
    Skill { name: "MongoDB", category: "Scrolls", level: 7 },
    Skill { name: "Figma", category: "Scrolls", level: 5 },
    Skill { name: "AWS", category: "Scrolls", level: 5 },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "PIXEL PORTFOLIO",
        status: QuestStatus::Complete,
        summary: "The very artifact you are holding. A retro game shell around a portfolio.",
        stack: "React / Vite / Framer Motion",
        url: Some("https://github.com/example/pixel-portfolio"),
    },
    Project {
        title: "DUNGEON TRACKER",
        status: QuestStatus::Active,
        summary: "Habit tracker where streaks are dungeon floors and misses are trap rooms.",
        stack: "React Native / Express / Postgres",
        url: Some("https://github.com/example/dungeon-tracker"),
    },
    Project {
        title: "LOOT TABLE",
        status: QuestStatus::Complete,
        summary: "Inventory and pricing dashboard for a small game shop.",
        stack: "Next.js / Prisma",
        url: Some("https://github.com/example/loot-table"),
    },
    Project {
        title: "NPC DIALOGUE ENGINE",
        status: QuestStatus::SideQuest,
        summary: "Branching dialogue editor with a graph view and export to JSON.",
        stack: "TypeScript / D3",
        url: None,
    },
];

pub const LINKS: &[ContactLink] = &[
    ContactLink { label: "SEND RAVEN (email)", value: "hello@example.dev", url: "mailto:hello@example.dev" },
    ContactLink { label: "GUILD HALL (GitHub)", value: "github.com/example", url: "https://github.com/example" },
    ContactLink { label: "TOWN SQUARE (LinkedIn)", value: "linkedin.com/in/example", url: "https://linkedin.com/in/example" },
];
