//! Curated portfolio facts for the system prompt
//!
//! This module holds the static biographical data the chat proxy embeds in
//! every system prompt. The default profile carries the site owner's facts;
//! the structure is serde-enabled so a different profile can be supplied via
//! configuration tooling without touching the prompt assembly code.

use serde::{Deserialize, Serialize};

/// Education entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    /// Institution name
    pub institution: String,
    /// Graduation year or expected year
    pub year: String,
    /// Degree or board plus result
    pub detail: String,
}

/// Work or research experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    /// Position title and organization
    pub title: String,
    /// Time period
    pub period: String,
    /// What was done, one line per highlight
    pub highlights: Vec<String>,
    /// Technologies used
    pub technologies: Vec<String>,
}

/// Technical project entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,
    /// Highlights, one line each
    pub highlights: Vec<String>,
    /// Technologies used
    pub technologies: Vec<String>,
}

/// Grouped technical skills
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub machine_learning: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

/// The full set of curated facts fed to the system prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// GitHub profile URL or handle
    pub github: String,
    /// LinkedIn profile URL or handle
    pub linkedin: String,
    /// Education history, most recent first
    pub education: Vec<Education>,
    /// Experience entries, most recent first
    pub experience: Vec<Experience>,
    /// Technical projects
    pub projects: Vec<Project>,
    /// Grouped skills
    pub skills: Skills,
    /// Achievements and activities
    pub achievements: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Sripada Sai Charan".to_string(),
            email: "saicharansripada5@gmail.com".to_string(),
            github: "github.com/sai-charan1".to_string(),
            linkedin: "linkedin.com/in/sripada-sai-charan".to_string(),
            education: vec![
                Education {
                    institution: "IIT Bhilai".to_string(),
                    year: "Expected 2026".to_string(),
                    detail: "BTech in Electrical Engineering (CGPA: 7.97)".to_string(),
                },
                Education {
                    institution: "Impulse Junior College".to_string(),
                    year: "2022".to_string(),
                    detail: "Telangana State Board (98.1%)".to_string(),
                },
            ],
            experience: vec![
                Experience {
                    title: "Research And Development - IBITF, IIT Bhilai".to_string(),
                    period: "May-July 2024".to_string(),
                    highlights: vec![
                        "Designed wearable heat stress system using C++ and Arduino".to_string(),
                        "Used ESP32 and Google Firebase for real-time data".to_string(),
                    ],
                    technologies: vec![
                        "C++".to_string(),
                        "Arduino".to_string(),
                        "Firebase".to_string(),
                    ],
                },
                Experience {
                    title: "ML Intern - Languify".to_string(),
                    period: "Aug-Sep 2024".to_string(),
                    highlights: vec![
                        "Implemented Vision Transformer (ViT) on CIFAR-10".to_string(),
                        "Compared performance against CNNs".to_string(),
                    ],
                    technologies: vec![
                        "Python".to_string(),
                        "TensorFlow".to_string(),
                        "ViT".to_string(),
                    ],
                },
            ],
            projects: vec![
                Project {
                    name: "Automatic License Plate Detection".to_string(),
                    highlights: vec![
                        "YOLOv8 and OCR for vehicle tracking".to_string(),
                        "Processed 5,000+ vehicles".to_string(),
                    ],
                    technologies: vec![
                        "YOLOv8".to_string(),
                        "OpenCV".to_string(),
                        "PyTorch".to_string(),
                    ],
                },
                Project {
                    name: "Credit Card Risk Monitoring".to_string(),
                    highlights: vec![
                        "XGBoost model with 80% accuracy".to_string(),
                        "Deployed via Flask".to_string(),
                    ],
                    technologies: vec![
                        "XGBoost".to_string(),
                        "Flask".to_string(),
                        "Pandas".to_string(),
                    ],
                },
                Project {
                    name: "Movie Recommender System".to_string(),
                    highlights: vec![
                        "Content-based using Cosine Similarity".to_string(),
                        "Analyzed 8,500+ movies".to_string(),
                    ],
                    technologies: vec![
                        "NLTK".to_string(),
                        "Streamlit".to_string(),
                        "Heroku".to_string(),
                    ],
                },
            ],
            skills: Skills {
                languages: vec![
                    "Python".to_string(),
                    "C".to_string(),
                    "C++".to_string(),
                    "SQL".to_string(),
                ],
                machine_learning: vec![
                    "PyTorch".to_string(),
                    "TensorFlow".to_string(),
                    "OpenCV".to_string(),
                    "LLMs".to_string(),
                    "YOLO".to_string(),
                ],
                frameworks: vec![
                    "Flask".to_string(),
                    "Streamlit".to_string(),
                    "LangChain".to_string(),
                ],
                tools: vec![
                    "Git".to_string(),
                    "Docker".to_string(),
                    "Linux".to_string(),
                    "Arduino".to_string(),
                ],
            },
            achievements: vec![
                "Volleyball Community Leader, IIT Bhilai".to_string(),
                "Core Member of DesignX".to_string(),
                "Flipkart Grid Challenge qualifier".to_string(),
            ],
        }
    }
}
