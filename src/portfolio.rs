//! Everything the portfolio renders. Plain `'static` records; nothing here is
//! mutated after startup.

pub const OWNER: &str = "Somnath Jha";
pub const BRAND: &str = "Som.dev";
pub const ROLE: &str = "Backend Developer & Systems Engineer";
pub const BLURB: &str =
    "Software engineer fluent in embedded sorcery, backend alchemy, and Linux whispering.";
pub const EMAIL: &str = "somnath.jha.official@gmail.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/somnath-jhaa";
pub const GITHUB_URL: &str = "https://github.com/somnathjha007";
pub const LOCATION: &str = "Pune, India";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Terminal,
    Bot,
    Cpu,
    Server,
    Database,
    Mail,
    Linkedin,
    Github,
    MapPin,
    Briefcase,
    GraduationCap,
    Award,
    ExternalLink,
    Type,
    FileCode,
}

impl Icon {
    pub fn class(&self) -> &'static str {
        match self {
            Icon::Code => "extra-code",
            Icon::Terminal => "extra-terminal",
            Icon::Bot => "extra-bot",
            Icon::Cpu => "extra-cpu",
            Icon::Server => "extra-server",
            Icon::Database => "extra-database",
            Icon::Mail => "extra-email",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Github => "devicon-github-plain",
            Icon::MapPin => "extra-location",
            Icon::Briefcase => "extra-briefcase",
            Icon::GraduationCap => "extra-graduation",
            Icon::Award => "extra-award",
            Icon::ExternalLink => "extra-link",
            Icon::Type => "extra-type",
            Icon::FileCode => "extra-file-code",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub position: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub tech: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

impl ProjectEntry {
    /// The description rendered as bullet points, one per sentence.
    pub fn highlights(&self) -> Vec<&'static str> {
        self.description
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// `"#"` is a placeholder for a repository that isn't public yet.
    pub fn code_link(&self) -> Option<&'static str> {
        self.github.filter(|url| *url != "#")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CertificateEntry {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub link: Option<&'static str>,
    pub description: &'static str,
}

impl ContactMethod {
    pub fn is_external(&self) -> bool {
        self.link.is_some_and(|l| l.starts_with("http"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabTool {
    TextUtility,
    Notepad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    Available(LabTool),
    ComingSoon,
}

#[derive(Debug, Clone, Copy)]
pub struct LabToolCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub status: ToolStatus,
}

pub const TAGLINES: &[&str] = &[
    "Brewing AI elixirs with TensorFlow and PyTorch: sometimes it's wizardry, sometimes it's mad science, occasionally it even obeys.",
    "Summoning neural networks like Dumbledore conjures Fawkes, with TensorFlow wands and PyTorch potions at my command.",
    "Cooking up AI models in the lab, Breaking Bad style, but instead of blue crystals it's pure deep learning magic.",
    "Casting spells in Python, chanting TensorFlow, and invoking PyTorch, because even Gandalf would approve of well-trained models.",
    "AI whisperer: teaching GPUs to levitate data, making neural nets obey like Hogwarts first-years in detention.",
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "C", icon: Icon::Code },
    Skill { name: "C++", icon: Icon::Code },
    Skill { name: "Python", icon: Icon::Code },
    Skill { name: "GoLang", icon: Icon::Code },
    Skill { name: "Linux & LDD", icon: Icon::Terminal },
    Skill { name: "Embedded AI", icon: Icon::Bot },
    Skill { name: "ESP32/Arduino", icon: Icon::Cpu },
    Skill { name: "FastAPI/Flask", icon: Icon::Server },
    Skill { name: "MySQL/MongoDB", icon: Icon::Database },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        position: "Associate Software Engineer",
        company: "Bosch Global Software Technologies",
        duration: "October 2024 - Present",
        location: "Pune, India",
        description: "Developed embedded solutions optimized for deployment on automotive SoCs. Designed and deployed modules connecting edge devices with cloud backends.",
        highlights: &[
            "Embedded solutions for automotive SoCs",
            "Edge-to-cloud device connectivity modules",
            "Scalable automotive system architecture",
        ],
        tech: &["C", "C++", "Python", "TensorFlow Lite"],
    },
    ExperienceEntry {
        position: "Industrial Trainee",
        company: "SAIL (Steel Authority of India Limited)",
        duration: "February 2023 - June 2023",
        location: "Dhanbad, India",
        description: "Managed PLC control room operations and maintenance. Conducted quality control assessments for mining rigs and industrial equipment. Gained experience in industrial automation and large-scale system reliability.",
        highlights: &["PLC control room operations management"],
        tech: &["PLC", "Industrial Automation", "System Monitoring"],
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Hybrid Traffic Violation Detection",
        description: "Traffic Light & Zebra Crossing Detection with Violation Monitoring using YOLO V8. Quantized TFLite Model Pipeline for Embedded ML",
        tech: &[
            "YOLO v8/PyTorch",
            "OpenCV/NumPy/Matplotlib",
            "Python, Flask",
            "JSON(API comms)",
            "TensorFlow Lite",
            "CNN",
            "Quantization",
        ],
        github: Some("https://github.com/Somnathjha007/Traffic-Violation-Detector-YOLOv8"),
        demo: None,
    },
    ProjectEntry {
        title: "Edge to Cloud Image Pipeline",
        description: "Implemented edge device image capture with cloud-based Flask server. Integrated with FlaskAPI endpoint for scalable data collection",
        tech: &[
            "ESP32-S3",
            "Embedded C",
            "Flask",
            "Python",
            "REST API",
            "cURL",
            "Git/Github",
        ],
        github: Some("https://github.com/Somnathjha007/Edge-to-Cloud-Image-Pipeline"),
        demo: None,
    },
    ProjectEntry {
        title: "Upcoming",
        description: "Under development: wizards are working, spells are being cast",
        tech: &["Magic", "Pixie dust", "Prof Snape", "Holy Water"],
        github: Some("#"),
        demo: None,
    },
];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "Bachelor of Technology - Electronics and Communication Engineering",
        institution: "Chandigarh Engineering College, Punjab Technical University",
        year: "2019-2023",
        description: "GPA: 7.9/10 - Focus on embedded systems, signal processing, and communication technologies",
    },
    EducationEntry {
        degree: "Higher Secondary Certificate - Non-Medical",
        institution: "Holy Cross School (CBSE)",
        year: "2016-2018",
        description: "Strong foundation in Mathematics, Physics, and Chemistry",
    },
];

pub const CERTIFICATES: &[CertificateEntry] = &[
    CertificateEntry {
        title: "LINUX for Cloud",
        issuer: "Udemy",
        year: "2025",
        link: "https://www.udemy.com/certificate/UC-263a3ce9-5cdd-467c-a960-95bf52e237e0/",
    },
    CertificateEntry {
        title: "Git and Github Essentials",
        issuer: "Udemy",
        year: "2025",
        link: "https://www.udemy.com/certificate/UC-f48b7341-ed77-45ea-9258-4de66d32b90d/",
    },
];

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "Email",
        value: EMAIL,
        icon: Icon::Mail,
        link: Some("mailto:somnath.jha.official@gmail.com"),
        description: "Drop me a line anytime",
    },
    ContactMethod {
        label: "LinkedIn",
        value: "/in/somnath-jhaa",
        icon: Icon::Linkedin,
        link: Some(LINKEDIN_URL),
        description: "Professional network",
    },
    ContactMethod {
        label: "GitHub",
        value: "@somnathjha007",
        icon: Icon::Github,
        link: Some(GITHUB_URL),
        description: "Check out my code",
    },
    ContactMethod {
        label: "Location",
        value: LOCATION,
        icon: Icon::MapPin,
        link: None,
        description: "Open to opportunities",
    },
];

pub const LAB_TOOLS: &[LabToolCard] = &[
    LabToolCard {
        title: "Text Utility",
        description: "Transform text with encoding, formatting, and manipulation tools",
        icon: Icon::Type,
        status: ToolStatus::Available(LabTool::TextUtility),
    },
    LabToolCard {
        title: "Code Notepad",
        description: "Code editor with local saves, file upload/download and auto-save",
        icon: Icon::FileCode,
        status: ToolStatus::Available(LabTool::Notepad),
    },
];

pub const FUTURE_TOOLS: &[LabToolCard] = &[
    LabToolCard {
        title: "Code Formatter",
        description: "Multi-language code formatter with custom styling rules",
        icon: Icon::Code,
        status: ToolStatus::ComingSoon,
    },
    LabToolCard {
        title: "SQL Query Builder",
        description: "Visual query builder with real-time preview and optimization",
        icon: Icon::Database,
        status: ToolStatus::ComingSoon,
    },
    LabToolCard {
        title: "API Tester",
        description: "Comprehensive API testing suite with automated reporting",
        icon: Icon::Server,
        status: ToolStatus::ComingSoon,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taglines_present() {
        assert!(!TAGLINES.is_empty());
        assert!(TAGLINES.iter().all(|t| !t.trim().is_empty()));
    }

    #[test]
    fn test_project_highlights_split_on_sentences() {
        let p = &PROJECTS[0];
        assert_eq!(
            p.highlights(),
            vec![
                "Traffic Light & Zebra Crossing Detection with Violation Monitoring using YOLO V8",
                "Quantized TFLite Model Pipeline for Embedded ML",
            ]
        );
        let trailing = ProjectEntry {
            title: "t",
            description: "One. Two.  ",
            tech: &[],
            github: None,
            demo: None,
        };
        assert_eq!(trailing.highlights(), vec!["One", "Two"]);
    }

    #[test]
    fn test_placeholder_repo_link_hidden() {
        assert!(PROJECTS[0].code_link().is_some());
        let upcoming = PROJECTS.iter().find(|p| p.title == "Upcoming").unwrap();
        assert_eq!(upcoming.code_link(), None);
    }

    #[test]
    fn test_contact_external_links() {
        let by_label = |label: &str| CONTACT_METHODS.iter().find(|c| c.label == label).unwrap();
        assert!(!by_label("Email").is_external());
        assert!(by_label("LinkedIn").is_external());
        assert!(by_label("GitHub").is_external());
        assert!(!by_label("Location").is_external());
    }

    #[test]
    fn test_every_available_tool_has_a_card() {
        for tool in [LabTool::TextUtility, LabTool::Notepad] {
            assert!(LAB_TOOLS
                .iter()
                .any(|c| c.status == ToolStatus::Available(tool)));
        }
        assert!(FUTURE_TOOLS
            .iter()
            .all(|c| c.status == ToolStatus::ComingSoon));
    }
}
