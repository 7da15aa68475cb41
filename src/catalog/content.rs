//! Embedded profile content
//!
//! The "files" of the portfolio are real text bodies compiled into the binary.
//! Structured ones (projects, skills) are parsed with serde so the views
//! render from the same text the source view shows.

use serde::Deserialize;

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────────────────

pub const OWNER_NAME: &str = "Suman Mandal";
pub const OWNER_TITLE: &str = "Data Scientist & AI/ML Engineer";
pub const OWNER_AFFILIATION: &str = "IIT Madras (BS Data Science)";
pub const TAGLINE: &str = "Transforming raw data into actionable intelligence through Scalable AI.";
pub const RESUME_URL: &str =
    "https://raw.githubusercontent.com/sayhitosuman/assets/main/Resume%20(1).pdf";
pub const CONTACT_EMAIL: &str = "sayhitosuman@outlook.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sayhitosuman";
pub const DISCORD_URL: &str = "https://discord.com/users/1435629720531239024";
pub const PERSONAL_PROFILE_URL: &str = "https://youtube.com";

// ─────────────────────────────────────────────────────────────────────────────
// File Bodies
// ─────────────────────────────────────────────────────────────────────────────

pub const README_MD: &str = r#"# Hi, I'm Suman Mandal

**Data Scientist & AI/ML Engineer** at IIT Madras (BS Data Science)

> Transforming raw data into actionable intelligence through Scalable AI.

## Tech Stack

- **Languages:** Python, SQL, C++, JavaScript
- **Frameworks:** PyTorch, TensorFlow, Scikit-learn
- **Tools:** Docker, Kubernetes, AWS, Git

## Focus Areas

- Computer Vision
- Natural Language Processing (LLMs)
- Predictive Analytics
"#;

pub const ABOUT_ME_PY: &str = r#""""
About Configuration Module
Detailed professional breakdown and background history.
"""

import Torch, TensorFlow
from Life import Passion


class SumanMandal(DataScientist):

    def __init__(self):
        # Driven by data, inspired by intelligence.
        self.summary = (
            "Undergraduate at IIT Madras specialized in Data Science. "
            "Building the bridge between theoretical AI and production systems."
        )
        self.status = "Open to Opportunities"
        self.location = "India"

    def get_education(self):
        return [
            {
                "degree": "BS in Data Science & Applications",
                "institution": "Indian Institute of Technology, Madras",
                "year": "2026 - 2030 (Expected)",
                "focus": ["Deep Learning", "Big Data"],
            },
        ]

    def get_experience(self):
        return [
            {
                "role": "Student Researcher",
                "domain": "Neural Networks / NLP",
                "description": "Researching architecture optimization for Low-Resource LLMs.",
            },
            {
                "role": "Open Source Contributor",
                "domain": "Python / AI Tools",
                "description": "Contributed to libraries like LangChain and HuggingFace Transformers.",
            },
        ]

    def get_skills(self):
        return load_yaml('config/skills.yaml')

    # Execute download protocol
    def download_resume(self, format="pdf"):
        ...
"#;

pub const EXPERIENCE_TSX: &str = r#"const EXPERIENCE_DATA = await fetchHistory();

export const experience = [
  {
    role: "Open source contribution",
    company: "community",
    date: "2025- Present",
    description: "Actively contributing to various open-source AI repositories.",
    stack: ["python", "jax", "keras"],
    type: "Part-time",
  },
];
"#;

pub const CONTACT_TSX: &str = r#"// user@portfolio:~$ ./send_message --priority high
export async function sendMessage(email: string, message: string) {
  return handshake({ email, message });
}
"#;

pub const PROJECTS_JSON: &str = r#"[
  {
    "name": "Brain-Tumor-Segmentation",
    "stack": "PyTorch, U-Net, OpenCV",
    "desc": "Deep learning model achieving 98% accuracy in MRI scan segmentation using modified U-Net architecture.",
    "repo": "https://github.com/suman/brain-tumor-seg",
    "demo": "https://huggingface.co/spaces/suman/brain-seg"
  },
  {
    "name": "Stock-Price-LSTM",
    "stack": "Python, TensorFlow, Pandas",
    "desc": "Time-series forecasting engine for NSE/BSE stocks using Long Short-Term Memory networks.",
    "repo": "https://github.com/suman/stock-lstm",
    "demo": null
  },
  {
    "name": "Medical-Chatbot-RAG",
    "stack": "LangChain, Pinecone, Llama-2",
    "desc": "Retrieval-Augmented Generation chatbot specialized in medical diagnosis assistance using reliable datasets.",
    "repo": "https://github.com/suman/med-rag",
    "demo": "https://med-chat.demo.app"
  },
  {
    "name": "Auto-Resume-Parser",
    "stack": "Spacy, NLP, FastAPI",
    "desc": "API that extracts skills, education, and experience from PDF resumes with high entity recognition rates.",
    "repo": "https://github.com/suman/resume-parser",
    "demo": null
  }
]
"#;

pub const SKILLS_YAML: &str = r#"# skills.yaml config
visualize: true
skills:
  - name: React
    level: 95
  - name: TS
    level: 90
  - name: Node
    level: 85
  - name: Python
    level: 80
  - name: SQL
    level: 75
  - name: AWS
    level: 70
  - name: UI/UX
    level: 85
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Structured Records
// ─────────────────────────────────────────────────────────────────────────────

/// A project card from `models/projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    pub stack: String,
    pub desc: String,
    pub repo: Option<String>,
    pub demo: Option<String>,
}

/// One bar of the skills chart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency from 0 to 100
    pub level: u8,
}

#[derive(Debug, Deserialize)]
struct SkillsFile {
    #[serde(default)]
    visualize: bool,
    skills: Vec<Skill>,
}

/// Parsed `config/skills.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillSheet {
    pub visualize: bool,
    pub skills: Vec<Skill>,
}

/// A work history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub kind: &'static str,
}

/// A social profile presented as an installable editor extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extension {
    pub name: &'static str,
    pub id: &'static str,
    pub publisher: &'static str,
    pub desc: &'static str,
    pub url: &'static str,
}

impl Extension {
    /// Case-insensitive match against name, description, id and publisher.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [self.name, self.desc, self.id, self.publisher]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

pub const EXPERIENCE: &[Experience] = &[Experience {
    role: "Open source contribution",
    company: "community",
    date: "2025- Present",
    description: "Actively contributing to various open-source AI repositories.",
    stack: &["python", "jax", "keras"],
    kind: "Part-time",
}];

pub const EXTENSIONS: &[Extension] = &[
    Extension {
        name: "LinkedIn",
        id: "linkedin.connect",
        publisher: "Microsoft",
        desc: "Professional networking and career profile.",
        url: "https://linkedin.com/in/sayhitosuman",
    },
    Extension {
        name: "GitHub",
        id: "github.code",
        publisher: "GitHub",
        desc: "Source code repository and version control.",
        url: "https://github.com/sayhitosuman",
    },
    Extension {
        name: "Kaggle",
        id: "kaggle.data",
        publisher: "Google",
        desc: "Data science competitions and datasets.",
        url: "https://kaggle.com/sayhitosuman",
    },
    Extension {
        name: "Twitter / X",
        id: "twitter.social",
        publisher: "X Corp",
        desc: "Tech discussions and updates.",
        url: "https://twitter.com/sayhitosuman",
    },
    Extension {
        name: "Discord",
        id: "discord.community",
        publisher: "Discord Inc",
        desc: "Community chat and collaboration.",
        url: "https://discord.com/users/sayhitosuman",
    },
    Extension {
        name: "HackerRank",
        id: "hackerrank.coding",
        publisher: "HackerRank",
        desc: "Coding challenges and skill certifications.",
        url: "https://www.hackerrank.com/profile/sayhitosuman",
    },
    Extension {
        name: "LeetCode",
        id: "leetcode.algorithms",
        publisher: "LeetCode",
        desc: "Algorithm practice and technical interviews.",
        url: "https://leetcode.com/u/sayhitosuman/",
    },
    Extension {
        name: "Slack",
        id: "slack.workspace",
        publisher: "Slack Technologies",
        desc: "Team communication and workspace collaboration.",
        url: "https://app.slack.com/client/T09QBD2R151/D09QHR823S6",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a projects document.
pub fn parse_projects(json: &str) -> Result<Vec<Project>> {
    serde_json::from_str(json).map_err(|e| Error::Content(format!("projects.json: {}", e)))
}

/// Parse a skills document.
pub fn parse_skills(yaml: &str) -> Result<SkillSheet> {
    let file: SkillsFile =
        serde_yaml::from_str(yaml).map_err(|e| Error::Content(format!("skills.yaml: {}", e)))?;
    Ok(SkillSheet {
        visualize: file.visualize,
        skills: file
            .skills
            .into_iter()
            .map(|s| Skill {
                level: s.level.min(100),
                ..s
            })
            .collect(),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_projects_parse() {
        let projects = parse_projects(PROJECTS_JSON).unwrap();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0].name, "Brain-Tumor-Segmentation");
        assert!(projects[0].demo.is_some());
        assert!(projects[1].demo.is_none());
        assert!(projects.iter().all(|p| p.repo.is_some()));
    }

    #[test]
    fn test_embedded_skills_parse() {
        let sheet = parse_skills(SKILLS_YAML).unwrap();
        assert!(sheet.visualize);
        assert_eq!(sheet.skills.len(), 7);
        assert_eq!(
            sheet.skills[0],
            Skill {
                name: "React".to_string(),
                level: 95
            }
        );
        assert_eq!(sheet.skills[6].name, "UI/UX");
    }

    #[test]
    fn test_skill_level_is_capped() {
        let sheet = parse_skills("skills:\n  - name: Rust\n    level: 250\n").unwrap();
        assert_eq!(sheet.skills[0].level, 100);
        assert!(!sheet.visualize);
    }

    #[test]
    fn test_bad_projects_json_is_content_error() {
        let result = parse_projects("{ not a list }");
        assert!(matches!(result, Err(Error::Content(_))));
    }

    #[test]
    fn test_bad_skills_yaml_is_content_error() {
        let result = parse_skills("skills: [");
        assert!(matches!(result, Err(Error::Content(_))));
    }

    #[test]
    fn test_extension_matches() {
        let github = EXTENSIONS.iter().find(|e| e.name == "GitHub").unwrap();
        assert!(github.matches("git"));
        assert!(github.matches("VERSION CONTROL"));
        assert!(github.matches(""));
        assert!(!github.matches("kaggle"));
    }

    #[test]
    fn test_extension_count() {
        assert_eq!(EXTENSIONS.len(), 8);
        assert_eq!(EXPERIENCE.len(), 1);
    }
}
