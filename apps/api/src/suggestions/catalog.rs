//! Fixed suggestion and template tables.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::resume::{Education, Experience, Project, ResumeRecord, SectionType};
use crate::suggestions::{
    SectionTemplate, Suggestion, SuggestionCategory, SuggestionProvider, TemplateData,
};

const TECHNICAL_SKILLS: &[&str] = &[
    "React",
    "TypeScript",
    "Node.js",
    "Python",
    "SQL",
    "AWS",
    "Docker",
    "Git",
];

const SOFT_SKILLS: &[&str] = &[
    "Leadership",
    "Communication",
    "Problem Solving",
    "Team Collaboration",
    "Project Management",
    "Critical Thinking",
];

const ACHIEVEMENTS: &[&str] = &[
    "Led a team of 5 developers to deliver project 2 weeks ahead of schedule",
    "Improved application performance by 40% through code optimization",
    "Implemented automated testing, reducing bugs by 60%",
];

const RESPONSIBILITIES: &[&str] = &[
    "Developed and maintained web applications using React and Node.js",
    "Collaborated with cross-functional teams to define project requirements",
];

const SUMMARY_TEMPLATES: &[&str] = &[
    "Results-driven professional with X years of experience in...",
    "Passionate [role] specializing in [skills] with proven track record of...",
];

/// Deterministic lookup-table backend. Same input, same output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSuggestionProvider;

fn from_table(category: SuggestionCategory, table: &[&str]) -> Vec<Suggestion> {
    table
        .iter()
        .map(|text| Suggestion {
            category,
            text: text.to_string(),
        })
        .collect()
}

fn skill_suggestions(context: Option<&ResumeRecord>) -> Vec<Suggestion> {
    let mut suggestions = from_table(SuggestionCategory::Technical, TECHNICAL_SKILLS);
    suggestions.extend(from_table(SuggestionCategory::Soft, SOFT_SKILLS));

    let Some(record) = context else {
        return suggestions;
    };
    suggestions
        .into_iter()
        .filter(|s| !record.skills.all().any(|have| have.eq_ignore_ascii_case(&s.text)))
        .collect()
}

fn experience_templates() -> Vec<SectionTemplate> {
    vec![
        SectionTemplate {
            title: "Software Engineer".to_string(),
            description: "Template for software engineering roles".to_string(),
            data: TemplateData::Experience(Experience {
                position: "Software Engineer".to_string(),
                company: "Tech Company".to_string(),
                start_date: "Jan 2020".to_string(),
                end_date: "Present".to_string(),
                description: "Developed and maintained web applications using modern technologies. Collaborated with cross-functional teams to deliver high-quality software solutions.".to_string(),
                achievements: None,
            }),
        },
        SectionTemplate {
            title: "Product Manager".to_string(),
            description: "Template for product management roles".to_string(),
            data: TemplateData::Experience(Experience {
                position: "Product Manager".to_string(),
                company: "Startup Inc.".to_string(),
                start_date: "Mar 2019".to_string(),
                end_date: "Dec 2021".to_string(),
                description: "Led product strategy and roadmap development. Worked closely with engineering and design teams to deliver user-centric products.".to_string(),
                achievements: None,
            }),
        },
    ]
}

fn degree_template(
    title: &str,
    description: &str,
    degree: &str,
    school: &str,
    year: &str,
    gpa: &str,
) -> SectionTemplate {
    SectionTemplate {
        title: title.to_string(),
        description: description.to_string(),
        data: TemplateData::Education(Education {
            degree: degree.to_string(),
            school: school.to_string(),
            year: year.to_string(),
            gpa: Some(gpa.to_string()),
            relevant_courses: None,
        }),
    }
}

fn education_templates() -> Vec<SectionTemplate> {
    vec![
        degree_template(
            "Computer Science Degree",
            "Bachelor's in Computer Science",
            "Bachelor of Science in Computer Science",
            "University Name",
            "2020",
            "3.8",
        ),
        degree_template(
            "MBA",
            "Master of Business Administration",
            "Master of Business Administration",
            "Business School",
            "2022",
            "3.9",
        ),
    ]
}

fn project_templates() -> Vec<SectionTemplate> {
    vec![SectionTemplate {
        title: "E-commerce Platform".to_string(),
        description: "Full-stack web application".to_string(),
        data: TemplateData::Project(Project {
            name: "E-commerce Platform".to_string(),
            description: "Built a full-stack e-commerce platform with React, Node.js, and MongoDB"
                .to_string(),
            technologies: ["React", "Node.js", "MongoDB", "Express"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            github: Some("https://github.com/username/project".to_string()),
            demo: Some("https://project-demo.com".to_string()),
        }),
    }]
}

#[async_trait]
impl SuggestionProvider for StaticSuggestionProvider {
    async fn suggest(
        &self,
        section: SectionType,
        context: Option<&ResumeRecord>,
    ) -> Result<Vec<Suggestion>, AppError> {
        Ok(match section {
            SectionType::Skills => skill_suggestions(context),
            SectionType::Experience => {
                let mut suggestions = from_table(SuggestionCategory::Achievement, ACHIEVEMENTS);
                suggestions.extend(from_table(
                    SuggestionCategory::Responsibility,
                    RESPONSIBILITIES,
                ));
                suggestions
            }
            SectionType::Summary => from_table(SuggestionCategory::Template, SUMMARY_TEMPLATES),
            _ => Vec::new(),
        })
    }

    async fn templates(&self, section: SectionType) -> Result<Vec<SectionTemplate>, AppError> {
        Ok(match section {
            SectionType::Experience => experience_templates(),
            SectionType::Education => education_templates(),
            SectionType::Projects => project_templates(),
            _ => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_record;

    #[tokio::test]
    async fn test_skill_suggestions_without_context() {
        let s = StaticSuggestionProvider
            .suggest(SectionType::Skills, None)
            .await
            .unwrap();
        assert_eq!(s.len(), TECHNICAL_SKILLS.len() + SOFT_SKILLS.len());
        assert_eq!(s[0].category, SuggestionCategory::Technical);
        assert_eq!(s[0].text, "React");
    }

    #[tokio::test]
    async fn test_skill_suggestions_skip_existing_skills() {
        // sample_record has SQL, Docker and Communication.
        let record = sample_record();
        let s = StaticSuggestionProvider
            .suggest(SectionType::Skills, Some(&record))
            .await
            .unwrap();
        let texts: Vec<&str> = s.iter().map(|s| s.text.as_str()).collect();
        assert!(!texts.contains(&"SQL"));
        assert!(!texts.contains(&"Docker"));
        assert!(!texts.contains(&"Communication"));
        assert!(texts.contains(&"React"));
    }

    #[tokio::test]
    async fn test_experience_suggestions_are_ordered_by_category() {
        let s = StaticSuggestionProvider
            .suggest(SectionType::Experience, None)
            .await
            .unwrap();
        assert_eq!(s.len(), 5);
        assert!(s[..3]
            .iter()
            .all(|s| s.category == SuggestionCategory::Achievement));
        assert_eq!(s[4].category, SuggestionCategory::Responsibility);
    }

    #[tokio::test]
    async fn test_sections_without_tables_are_empty() {
        let p = StaticSuggestionProvider;
        assert!(p.suggest(SectionType::PersonalInfo, None).await.unwrap().is_empty());
        assert!(p.templates(SectionType::Skills).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_templates_per_section() {
        let p = StaticSuggestionProvider;
        assert_eq!(p.templates(SectionType::Experience).await.unwrap().len(), 2);
        assert_eq!(p.templates(SectionType::Education).await.unwrap().len(), 2);
        let projects = p.templates(SectionType::Projects).await.unwrap();
        assert!(matches!(&projects[0].data, TemplateData::Project(p) if p.technologies.len() == 4));
    }

    #[tokio::test]
    async fn test_template_data_serializes_flat() {
        let templates = StaticSuggestionProvider
            .templates(SectionType::Education)
            .await
            .unwrap();
        let value = serde_json::to_value(&templates[0]).unwrap();
        assert_eq!(value["data"]["school"], "University Name");
        assert_eq!(value["data"]["gpa"], "3.8");
    }
}
