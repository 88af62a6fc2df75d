//! The fixed sample collection used to initialize empty storage.

use chrono::NaiveDate;
use nonempty::nonempty;

use crate::domain::{Activity, ActivityId, ActivityKind, ActivityStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Returns the ten pre-populated sample activities, covering each kind.
///
/// The store persists this collection the first time it is asked to read
/// from an empty slot.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: ActivityId::from("1"),
            title: "Curso de Programação Web".to_string(),
            description: "Aprenda desenvolvimento web com HTML, CSS, JavaScript e React. Curso \
                          prático com projetos reais."
                .to_string(),
            kind: ActivityKind::Course,
            status: ActivityStatus::Pending,
            start_date: date(2025, 3, 1),
            end_date: date(2025, 5, 30),
            time: Some("18:30 - 22:00".to_string()),
            location: "Laboratório de Informática 1".to_string(),
            coordinator: "Prof. Carlos Silva".to_string(),
            participants: 30,
            tags: nonempty![
                "programação".to_string(),
                "web".to_string(),
                "react".to_string(),
                "javascript".to_string()
            ],
            image_url: Some("/images/web-dev.jpg".to_string()),
            requirements: Some(vec![
                "Conhecimentos básicos de lógica de programação".to_string(),
                "Notebook próprio".to_string(),
                "Disponibilidade para atividades práticas".to_string(),
            ]),
            updated_at: None,
        },
        Activity {
            id: ActivityId::from("2"),
            title: "Workshop de Inteligência Artificial".to_string(),
            description: "Workshop intensivo sobre IA, Machine Learning e suas aplicações \
                          práticas."
                .to_string(),
            kind: ActivityKind::Workshop,
            status: ActivityStatus::Pending,
            start_date: date(2025, 4, 15),
            end_date: date(2025, 4, 17),
            time: Some("09:00 - 17:00".to_string()),
            location: "Auditório Principal".to_string(),
            coordinator: "Profa. Ana Santos".to_string(),
            participants: 50,
            tags: nonempty![
                "ia".to_string(),
                "machine learning".to_string(),
                "tecnologia".to_string()
            ],
            image_url: Some("/images/ai-workshop.jpg".to_string()),
            requirements: Some(vec![
                "Conhecimentos de Python".to_string(),
                "Noções de estatística".to_string(),
                "Laptop com configuração para processamento de dados".to_string(),
            ]),
            updated_at: None,
        },
        Activity {
            id: ActivityId::from("3"),
            title: "Seminário de Inovação Tecnológica".to_string(),
            description: "Discussão sobre as últimas tendências em inovação e tecnologia."
                .to_string(),
            kind: ActivityKind::Seminar,
            status: ActivityStatus::Completed,
            start_date: date(2025, 2, 10),
            end_date: date(2025, 2, 10),
            time: None,
            location: "Sala de Conferências".to_string(),
            coordinator: "Prof. Roberto Lima".to_string(),
            participants: 100,
            tags: nonempty![
                "inovação".to_string(),
                "tecnologia".to_string(),
                "tendências".to_string()
            ],
            image_url: Some("/images/tech-innovation.jpg".to_string()),
            requirements: None,
            updated_at: None,
        },
        Activity {
            id: ActivityId::from("4"),
            title: "Projeto de Pesquisa em IoT".to_string(),
            description: "Pesquisa aplicada em Internet das Coisas para cidades inteligentes."
                .to_string(),
            kind: ActivityKind::Research,
            status: ActivityStatus::Pending,
            start_date: date(2025, 1, 1),
            end_date: date(2025, 12, 31),
            time: None,
            location: "Laboratório de IoT".to_string(),
            coordinator: "Prof. Marcos Oliveira".to_string(),
            participants: 15,
            tags: nonempty![
                "iot".to_string(),
                "pesquisa".to_string(),
                "cidades inteligentes".to_string()
            ],
            image_url: Some("/images/iot-research.jpg".to_string()),
            requirements: None,
            updated_at: None,
        },
        Activity {
            id: ActivityId::from("5"),
            title: "Extensão: Programação para Jovens".to_string(),
            description: "Projeto de extensão para ensinar programação a jovens da comunidade."
                .to_string(),
            kind: ActivityKind::Extension,
            status: ActivityStatus::Pending,
            start_date: date(2025, 3, 15),
            end_date: date(2025, 11, 30),
            time: None,
            location: "Escolas Parceiras".to_string(),
            coordinator: "Profa. Maria Costa".to_string(),
            participants: 200,
            tags: nonempty![
                "extensão".to_string(),
                "educação".to_string(),
                "programação".to_string()
            ],
            image_url: Some("/images/youth-coding.jpg".to_string()),
            requirements: None,
            updated_at: None,
        },
        Activity {
            id: ActivityId::from("6"),
            title: "Hackathon UFC Sobral 2025".to_string(),
            description: "Competição de programação com foco em soluções para problemas locais."
                .to_string(),
            kind: ActivityKind::Other,
            status: ActivityStatus::Pending,
            start_date: date(2025, 6, 20),
            end_date: date(2025, 6, 22),
            time: None,
            location: "Campus UFC Sobral".to_string(),
            coordinator: "Prof. Paulo Mendes".to_string(),
            participants: 150,
            tags: nonempty![
                "hackathon".to_string(),
                "inovação".to_string(),
                "competição".to_string()
            ],
            image_url: Some("/images/hackathon.jpg".to_string()),
            requirements: None,
            updated_at: None,
        },
        Activity {
            id: ActivityId::from("7"),
            title: "Curso de Ciência de Dados".to_string(),
            description: "Fundamentos de análise de dados, estatística e visualização."
                .to_string(),
            kind: ActivityKind::Course,
            status: ActivityStatus::Pending,
            start_date: date(2025, 8, 1),
            end_date: date(2025, 11, 30),
            time: None,
            location: "Laboratório de Informática 2".to_string(),
            coordinator: "Profa. Lucia Santos".to_string(),
            participants: 40,
            tags: nonempty![
                "data science".to_string(),
                "estatística".to_string(),
                "python".to_string()
            ],
            image_url: Some("/images/data-science.jpg".to_string()),
            requirements: None,
            updated_at: None,
        },
        Activity {
            id: ActivityId::from("8"),
            title: "Workshop de Robótica".to_string(),
            description: "Hands-on com Arduino e construção de robôs básicos.".to_string(),
            kind: ActivityKind::Workshop,
            status: ActivityStatus::Pending,
            start_date: date(2025, 5, 10),
            end_date: date(2025, 5, 12),
            time: None,
            location: "Laboratório de Robótica".to_string(),
            coordinator: "Prof. Ricardo Alves".to_string(),
            participants: 25,
            tags: nonempty![
                "robótica".to_string(),
                "arduino".to_string(),
                "eletrônica".to_string()
            ],
            image_url: Some("/images/robotics.jpg".to_string()),
            requirements: None,
            updated_at: None,
        },
        Activity {
            id: ActivityId::from("9"),
            title: "Pesquisa em Computação Verde".to_string(),
            description: "Estudo sobre eficiência energética em data centers.".to_string(),
            kind: ActivityKind::Research,
            status: ActivityStatus::Pending,
            start_date: date(2025, 2, 1),
            end_date: date(2026, 1, 31),
            time: None,
            location: "Laboratório de Redes".to_string(),
            coordinator: "Prof. Fernando Costa".to_string(),
            participants: 10,
            tags: nonempty![
                "sustentabilidade".to_string(),
                "computação".to_string(),
                "energia".to_string()
            ],
            image_url: Some("/images/green-computing.jpg".to_string()),
            requirements: None,
            updated_at: None,
        },
        Activity {
            id: ActivityId::from("10"),
            title: "Extensão: Inclusão Digital".to_string(),
            description: "Projeto para promover inclusão digital na terceira idade.".to_string(),
            kind: ActivityKind::Extension,
            status: ActivityStatus::Pending,
            start_date: date(2025, 4, 1),
            end_date: date(2025, 10, 31),
            time: None,
            location: "Centro Comunitário".to_string(),
            coordinator: "Profa. Sandra Lima".to_string(),
            participants: 80,
            tags: nonempty![
                "inclusão digital".to_string(),
                "terceira idade".to_string(),
                "extensão".to_string()
            ],
            image_url: Some("/images/digital-inclusion.jpg".to_string()),
            requirements: None,
            updated_at: None,
        },
    ]
}
