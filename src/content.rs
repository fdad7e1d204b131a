//! Résumé content: domain types and the embedded literals.
//!
//! Everything here is built once from `'static` data and never mutated.
//! Selection state (active tab, palette, reveal progress) lives in the
//! TUI model, not here.

use serde::Serialize;

// ============================================================================
// SECTIONS
// ============================================================================

/// One of the four mutually exclusive content views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    About,
    Experience,
    Projects,
    Skills,
}

impl Section {
    /// Tab order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
    ];

    /// Capitalized tab label.
    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
        }
    }

    /// Position in [`Section::ALL`].
    pub fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Experience => 1,
            Section::Projects => 2,
            Section::Skills => 3,
        }
    }

    /// Section for a 1-based tab number, if any.
    pub fn from_number(n: u8) -> Option<Section> {
        match n {
            1..=4 => Some(Section::ALL[usize::from(n - 1)]),
            _ => None,
        }
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}

// ============================================================================
// CONTACTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    CodeHosting,
    ProfessionalNetwork,
    Phone,
}

/// An outbound link shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    /// Display label ("Email", "GitHub", ...).
    pub label: &'static str,
    /// URI handed to the host's default handler.
    pub target: &'static str,
}

// ============================================================================
// ENTRIES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub expected: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub organization: &'static str,
    /// Free-text date range.
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

/// Headline metric shown on a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub stats: &'static [Stat],
    pub details: &'static [&'static str],
    pub tech: &'static [&'static str],
}

/// Skills under one category. Display order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

/// The whole résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub contacts: &'static [ContactLink],
    pub education: Education,
    pub experience: &'static [ExperienceEntry],
    pub projects: &'static [ProjectEntry],
    pub skills: &'static [SkillGroup],
}

// ============================================================================
// LITERALS
// ============================================================================

/// Text typed out by the terminal animation.
pub const TERMINAL_TEXT: &str = "> Hello! I'm Nasir Mirza
> Computer Science & Economics Student
> Full Stack Developer & Data Scientist
Type 'help' for available commands...";

pub const EMAIL_URI: &str = "mailto:nmirza001@csbsju.edu";
pub const GITHUB_URL: &str = "https://github.com/nmirza001";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/nasir-mirzacs/";
pub const PHONE_URI: &str = "tel:320-271-6071";

static CONTACTS: [ContactLink; 4] = [
    ContactLink {
        kind: ContactKind::Email,
        label: "Email",
        target: EMAIL_URI,
    },
    ContactLink {
        kind: ContactKind::CodeHosting,
        label: "GitHub",
        target: GITHUB_URL,
    },
    ContactLink {
        kind: ContactKind::ProfessionalNetwork,
        label: "LinkedIn",
        target: LINKEDIN_URL,
    },
    ContactLink {
        kind: ContactKind::Phone,
        label: "Phone",
        target: PHONE_URI,
    },
];

static EXPERIENCE: [ExperienceEntry; 2] = [
    ExperienceEntry {
        title: "Teaching Assistant & Tutor",
        organization: "Department of Economics, CSB/SJU",
        period: "2023 – Present",
        bullets: &[
            "Lead weekly recitation sessions for 3 courses with 120+ students",
            "Improved average class performance by 15%",
        ],
    },
    ExperienceEntry {
        title: "Financial Officer Intern",
        organization: "[Company Name], [Location]",
        period: "Summer 2024",
        bullets: &[
            "Assisted in financial analysis and budget forecasting",
            "Supported the preparation of financial reports for senior management",
            "Analyzed market trends and financial statements for strategic decision-making",
        ],
    },
];

static PROJECTS: [ProjectEntry; 2] = [
    ProjectEntry {
        title: "Algorithmic Trading System",
        description: "Full-stack trading system with ML optimization",
        stats: &[
            Stat { label: "Data Points", value: "1M+" },
            Stat { label: "Accuracy", value: "92%" },
            Stat { label: "Annual Return", value: "18%" },
        ],
        details: &[
            "Backtesting engine over historical market data",
            "Parameter search driven by model feedback",
        ],
        tech: &["Python", "pandas", "NumPy", "ML"],
    },
    ProjectEntry {
        title: "Twitter Sentiment Analysis",
        description: "NLP pipeline for financial tweet analysis",
        stats: &[
            Stat { label: "Tweets Analyzed", value: "100K+" },
            Stat { label: "Accuracy", value: "94%" },
            Stat { label: "Data Processed", value: "50GB+" },
        ],
        details: &[
            "Tokenization and sentiment scoring with NLTK",
            "Interactive dashboard built on Streamlit",
        ],
        tech: &["Python", "NLTK", "scikit-learn", "Streamlit"],
    },
];

static SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        category: "Programming",
        skills: &["Python", "Java"],
    },
    SkillGroup {
        category: "Data Science",
        skills: &["Pandas", "NumPy", "Scikit-learn", "NLTK"],
    },
    SkillGroup {
        category: "Tools",
        skills: &["Git", "Docker", "REST APIs"],
    },
    SkillGroup {
        category: "Economics",
        skills: &["Econometrics", "Time Series", "R", "SAS"],
    },
];

/// The embedded résumé.
pub fn profile() -> Profile {
    Profile {
        name: "Nasir Mirza",
        tagline: "Computer Science & Economics Student",
        contacts: &CONTACTS,
        education: Education {
            institution: "College of Saint Benedict and Saint John's University",
            degree: "Bachelor of Arts in Computer Science and Economics",
            expected: "Expected Dec. 2026",
            highlights: &[
                "Vice President of Computer Science Club",
                "Led 15+ technical workshops",
            ],
        },
        experience: &EXPERIENCE,
        projects: &PROJECTS,
        skills: &SKILLS,
    }
}

// ============================================================================
// TESTS
// ============================================================================
