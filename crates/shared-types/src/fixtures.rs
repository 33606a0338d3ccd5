//! Static demo content rendered by the dashboard panels.
//!
//! Every record here is literal fixture data: flat display strings and
//! numbers with no identity and no mutation. The constructors return fresh
//! owned copies so panels can consume them like any other DTO.

use serde::{Deserialize, Serialize};

/// Completion state of a demo project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    Planejamento,
    EmAndamento,
    Concluido,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planejamento => "Planejamento",
            ProjectStatus::EmAndamento => "Em Andamento",
            ProjectStatus::Concluido => "Concluído",
        }
    }
}

/// Priority of a demo project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Alta,
    Media,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Alta => "Alta",
            Priority::Media => "Média",
        }
    }
}

/// Response state of a customer feedback entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeedbackStatus {
    Respondido,
    Pendente,
}

impl FeedbackStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackStatus::Respondido => "Respondido",
            FeedbackStatus::Pendente => "Pendente",
        }
    }
}

/// A headline metric on the overview panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatEntry {
    pub title: String,
    pub value: String,
    pub trend: String,
}

/// A recent-activity line on the overview panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub text: String,
    pub time: String,
}

/// Compact project line on the overview panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    pub name: String,
    pub status: ProjectStatus,
    pub priority: Priority,
}

/// Full project card on the projects panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    /// Completion percentage, 0..=100.
    pub progress: u8,
}

/// An idea card on the ideas panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Idea {
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: String,
    pub votes: u32,
}

/// A customer feedback card on the feedback panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackEntry {
    pub client: String,
    pub project: String,
    pub message: String,
    /// Star rating, 0..=5.
    pub rating: u8,
    pub date: String,
    pub status: FeedbackStatus,
}

/// Number of stars in a feedback rating row.
pub const RATING_SCALE: u8 = 5;

pub fn demo_stats() -> Vec<StatEntry> {
    [
        ("Projetos Ativos", "12", "+2"),
        ("Ideias Registradas", "28", "+5"),
        ("Feedbacks Recebidos", "156", "+12"),
        ("Taxa de Conclusão", "78%", "+3%"),
    ]
    .into_iter()
    .map(|(title, value, trend)| StatEntry {
        title: title.to_string(),
        value: value.to_string(),
        trend: trend.to_string(),
    })
    .collect()
}

pub fn recent_projects() -> Vec<ProjectSummary> {
    vec![
        ProjectSummary {
            name: "App Mobile".to_string(),
            status: ProjectStatus::EmAndamento,
            priority: Priority::Alta,
        },
        ProjectSummary {
            name: "Website Redesign".to_string(),
            status: ProjectStatus::Concluido,
            priority: Priority::Media,
        },
        ProjectSummary {
            name: "API Integration".to_string(),
            status: ProjectStatus::Planejamento,
            priority: Priority::Alta,
        },
    ]
}

pub fn demo_activities() -> Vec<ActivityEntry> {
    [
        ("Nova ideia adicionada: 'Chatbot IA'", "2h atrás"),
        ("Feedback recebido no projeto Mobile", "4h atrás"),
        ("Projeto Website aprovado", "1d atrás"),
    ]
    .into_iter()
    .map(|(text, time)| ActivityEntry {
        text: text.to_string(),
        time: time.to_string(),
    })
    .collect()
}

pub fn demo_projects() -> Vec<Project> {
    vec![
        Project {
            title: "App Mobile Futurize".to_string(),
            description: "Desenvolvimento do aplicativo mobile principal da plataforma"
                .to_string(),
            status: ProjectStatus::EmAndamento,
            priority: Priority::Alta,
            progress: 65,
        },
        Project {
            title: "Website Institucional".to_string(),
            description: "Redesign completo do website da empresa".to_string(),
            status: ProjectStatus::Concluido,
            priority: Priority::Media,
            progress: 100,
        },
        Project {
            title: "Integração com APIs".to_string(),
            description: "Implementação de integrações com sistemas externos".to_string(),
            status: ProjectStatus::Planejamento,
            priority: Priority::Alta,
            progress: 20,
        },
    ]
}

pub fn demo_ideas() -> Vec<Idea> {
    vec![
        Idea {
            title: "Chatbot com IA".to_string(),
            description: "Implementar um chatbot inteligente para atendimento ao cliente"
                .to_string(),
            author: "João Silva".to_string(),
            date: "Há 2 dias".to_string(),
            votes: 12,
        },
        Idea {
            title: "Dashboard Analítico".to_string(),
            description: "Criar dashboard com métricas avançadas de performance".to_string(),
            author: "Maria Santos".to_string(),
            date: "Há 1 semana".to_string(),
            votes: 8,
        },
        Idea {
            title: "App de Realidade Aumentada".to_string(),
            description: "Desenvolver funcionalidades de AR para visualização de projetos"
                .to_string(),
            author: "Pedro Costa".to_string(),
            date: "Há 2 semanas".to_string(),
            votes: 15,
        },
    ]
}

pub fn demo_feedback() -> Vec<FeedbackEntry> {
    vec![
        FeedbackEntry {
            client: "TechCorp".to_string(),
            project: "App Mobile".to_string(),
            message: "Excelente trabalho! O app ficou muito intuitivo e rápido.".to_string(),
            rating: 5,
            date: "Há 1 dia".to_string(),
            status: FeedbackStatus::Respondido,
        },
        FeedbackEntry {
            client: "StartupXYZ".to_string(),
            project: "Website".to_string(),
            message: "Gostaria de algumas modificações no layout da homepage.".to_string(),
            rating: 3,
            date: "Há 3 dias".to_string(),
            status: FeedbackStatus::Pendente,
        },
        FeedbackEntry {
            client: "InnovaCorp".to_string(),
            project: "Dashboard".to_string(),
            message: "Funcionalidade incrível! Vai nos economizar muito tempo.".to_string(),
            rating: 5,
            date: "Há 1 semana".to_string(),
            status: FeedbackStatus::Respondido,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_serialization_roundtrip() {
        let project = demo_projects().remove(0);

        let json = serde_json::to_string(&project).unwrap();
        let deserialized: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(project, deserialized);
    }

    #[test]
    fn overview_fixtures_have_expected_shape() {
        assert_eq!(demo_stats().len(), 4);
        assert_eq!(recent_projects().len(), 3);
        assert_eq!(demo_activities().len(), 3);
        assert_eq!(demo_stats()[3].value, "78%");
    }

    #[test]
    fn progress_stays_within_percentage_bounds() {
        for project in demo_projects() {
            assert!(project.progress <= 100, "{}", project.title);
        }
    }

    #[test]
    fn feedback_ratings_fit_the_star_scale() {
        for entry in demo_feedback() {
            assert!(entry.rating <= RATING_SCALE, "{}", entry.client);
        }
    }
}
